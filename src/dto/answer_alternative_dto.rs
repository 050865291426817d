use serde::{Deserialize, Serialize};
use validator::Validate;

use super::nullable;
use crate::database::{FieldPatch, PartialUpdate, Table};
use crate::error::Result;
use crate::models::answer_alternative::AnswerAlternative;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAnswerAlternativePayload {
    pub question_id: i32,
    #[validate(length(min = 1, max = 255))]
    pub answer_text: String,
    pub is_correct: bool,
    pub answer_icon: Option<i32>,
    pub answer_order: Option<i32>,
}

pub type UpdateAnswerAlternativePayload = CreateAnswerAlternativePayload;

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PatchAnswerAlternativePayload {
    pub question_id: Option<i32>,
    #[validate(length(min = 1, max = 255))]
    pub answer_text: Option<String>,
    pub is_correct: Option<bool>,
    #[serde(default, deserialize_with = "nullable")]
    pub answer_icon: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub answer_order: Option<Option<i32>>,
}

impl FieldPatch for PatchAnswerAlternativePayload {
    fn into_update(self) -> Result<PartialUpdate> {
        let mut update = PartialUpdate::new(Table::AnswerAlternatives);
        update
            .set_some("question_id", self.question_id)
            .set_some("answer_text", self.answer_text)
            .set_some("is_correct", self.is_correct)
            .set_some("answer_icon", self.answer_icon)
            .set_some("answer_order", self.answer_order);
        Ok(update)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerAlternativeResponse {
    pub id: i32,
    pub question_id: i32,
    pub answer_text: String,
    pub is_correct: bool,
    pub answer_icon: Option<i32>,
    pub answer_order: Option<i32>,
}

impl From<AnswerAlternative> for AnswerAlternativeResponse {
    fn from(value: AnswerAlternative) -> Self {
        Self {
            id: value.id,
            question_id: value.question_id,
            answer_text: value.answer_text,
            is_correct: value.is_correct,
            answer_icon: value.answer_icon,
            answer_order: value.answer_order,
        }
    }
}
