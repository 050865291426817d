use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A live run of a quiz that players join with `session_code`.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Session {
    pub id: i32,
    pub session_name: String,
    pub host_user_id: i32,
    pub active_quiz: Option<i32>,
    pub qr_code_id: Option<i32>,
    pub session_status: i32,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub current_question_id: Option<i32>,
    pub session_code: i32,
}
