use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct PlayerAnswer {
    pub id: i32,
    pub player_id: i32,
    pub session_id: i32,
    pub question_id: i32,
    pub answer_id: i32,
    /// Milliseconds from question shown to answer submitted.
    pub response_time: i32,
    pub points_earned: i32,
    pub is_correct: Option<bool>,
}
