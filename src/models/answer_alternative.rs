use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AnswerAlternative {
    pub id: i32,
    pub question_id: i32,
    pub answer_text: String,
    pub is_correct: bool,
    pub answer_icon: Option<i32>,
    pub answer_order: Option<i32>,
}
