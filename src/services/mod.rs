pub mod cache;
pub use cache::ResultCache;

pub mod search;
pub use search::SearchService;

pub mod chat;
pub use chat::{ChatService, Resolution};
