pub use super::chats::Entity as Chats;
