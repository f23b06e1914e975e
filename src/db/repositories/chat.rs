use crate::entities::{chats, prelude::*};
use anyhow::Result;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set};

/// Append-only access to the `chats` table.
pub struct ChatRepository {
    conn: DatabaseConnection,
}

impl ChatRepository {
    #[must_use]
    pub const fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    pub async fn add(&self, user_message: &str, bot_response: &str) -> Result<chats::Model> {
        let active_model = chats::ActiveModel {
            user_message: Set(user_message.to_string()),
            bot_response: Set(bot_response.to_string()),
            timestamp: Set(chrono::Utc::now().to_rfc3339()),
            ..Default::default()
        };

        Ok(active_model.insert(&self.conn).await?)
    }

    pub async fn count(&self) -> Result<u64> {
        Ok(Chats::find().count(&self.conn).await?)
    }

    pub async fn latest(&self) -> Result<Option<chats::Model>> {
        Ok(Chats::find()
            .order_by_desc(chats::Column::Id)
            .one(&self.conn)
            .await?)
    }
}
