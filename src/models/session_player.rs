use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SessionPlayer {
    pub id: i32,
    pub session_id: i32,
    pub display_name: String,
    pub user_id: Option<i32>,
    pub joined_at: DateTime<Utc>,
    pub player_points: i32,
}
