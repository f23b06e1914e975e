pub mod prelude;

pub mod chats;
