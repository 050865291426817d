use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SessionScoreboard {
    pub id: i32,
    pub session_id: i32,
    pub player_id: i32,
    pub total_score: i32,
    pub correct_answers: i32,
    pub rank: Option<i32>,
}
