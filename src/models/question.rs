use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub quiz_id: i32,
    pub question_text: String,
    pub question_order: Option<i32>,
    /// Seconds.
    pub time_limit: i32,
    pub points: i32,
    pub question_type: i32,
    pub image: Option<i32>,
}
