use serde::{Deserialize, Serialize};
use validator::Validate;

use super::nullable;
use crate::database::{FieldPatch, PartialUpdate, Table};
use crate::error::Result;
use crate::models::question::Question;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateQuestionPayload {
    pub quiz_id: i32,
    #[validate(length(min = 1, max = 500))]
    pub question_text: String,
    pub question_order: Option<i32>,
    #[validate(range(min = 1))]
    pub time_limit: i32,
    #[validate(range(min = 0))]
    pub points: Option<i32>,
    pub question_type: i32,
    pub image: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateQuestionPayload {
    pub quiz_id: i32,
    #[validate(length(min = 1, max = 500))]
    pub question_text: String,
    pub question_order: Option<i32>,
    #[validate(range(min = 1))]
    pub time_limit: i32,
    #[validate(range(min = 0))]
    pub points: i32,
    pub question_type: i32,
    pub image: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PatchQuestionPayload {
    pub quiz_id: Option<i32>,
    #[validate(length(min = 1, max = 500))]
    pub question_text: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub question_order: Option<Option<i32>>,
    #[validate(range(min = 1))]
    pub time_limit: Option<i32>,
    #[validate(range(min = 0))]
    pub points: Option<i32>,
    pub question_type: Option<i32>,
    #[serde(default, deserialize_with = "nullable")]
    pub image: Option<Option<i32>>,
}

impl FieldPatch for PatchQuestionPayload {
    fn into_update(self) -> Result<PartialUpdate> {
        let mut update = PartialUpdate::new(Table::Questions);
        update
            .set_some("quiz_id", self.quiz_id)
            .set_some("question_text", self.question_text)
            .set_some("question_order", self.question_order)
            .set_some("time_limit", self.time_limit)
            .set_some("points", self.points)
            .set_some("question_type", self.question_type)
            .set_some("image", self.image);
        Ok(update)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionResponse {
    pub id: i32,
    pub quiz_id: i32,
    pub question_text: String,
    pub question_order: Option<i32>,
    pub time_limit: i32,
    pub points: i32,
    pub question_type: i32,
    pub image: Option<i32>,
}

impl From<Question> for QuestionResponse {
    fn from(value: Question) -> Self {
        Self {
            id: value.id,
            quiz_id: value.quiz_id,
            question_text: value.question_text,
            question_order: value.question_order,
            time_limit: value.time_limit,
            points: value.points,
            question_type: value.question_type,
            image: value.image,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_time_limit_is_rejected() {
        let payload: CreateQuestionPayload = serde_json::from_value(serde_json::json!({
            "quiz_id": 1,
            "question_text": "Capital of Norway?",
            "time_limit": 0,
            "question_type": 1
        }))
        .unwrap();
        let errors = payload.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("time_limit"));
    }

    #[test]
    fn patch_maps_fields_to_columns_in_declaration_order() {
        let payload: PatchQuestionPayload = serde_json::from_value(serde_json::json!({
            "image": null,
            "points": 250,
            "question_text": "Capital of Sweden?"
        }))
        .unwrap();
        let update = payload.into_update().unwrap();
        assert_eq!(
            update.columns().collect::<Vec<_>>(),
            vec!["question_text", "points", "image"]
        );
    }
}
