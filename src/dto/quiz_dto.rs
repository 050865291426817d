use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::nullable;
use crate::database::{FieldPatch, PartialUpdate, Table};
use crate::error::Result;
use crate::models::quiz::Quiz;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateQuizPayload {
    pub quiz_creator_id: i32,
    #[validate(length(min = 1, max = 255))]
    pub quiz_title: String,
    pub quiz_description: Option<String>,
    pub intro_image: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_public: bool,
}

/// Replaces every client-owned column; `updated_at` is stamped by the server.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateQuizPayload {
    pub quiz_creator_id: i32,
    #[validate(length(min = 1, max = 255))]
    pub quiz_title: String,
    pub quiz_description: Option<String>,
    pub intro_image: Option<i32>,
    pub is_public: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PatchQuizPayload {
    pub quiz_creator_id: Option<i32>,
    #[validate(length(min = 1, max = 255))]
    pub quiz_title: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub quiz_description: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub intro_image: Option<Option<i32>>,
    pub is_public: Option<bool>,
}

impl FieldPatch for PatchQuizPayload {
    fn into_update(self) -> Result<PartialUpdate> {
        let mut update = PartialUpdate::new(Table::Quizzes);
        update
            .set_some("quiz_creator_id", self.quiz_creator_id)
            .set_some("quiz_title", self.quiz_title)
            .set_some("quiz_description", self.quiz_description)
            .set_some("intro_image", self.intro_image)
            .set_some("is_public", self.is_public)
            .touch("updated_at");
        Ok(update)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResponse {
    pub id: i32,
    pub quiz_creator_id: i32,
    pub quiz_title: String,
    pub quiz_description: Option<String>,
    pub intro_image: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub is_public: bool,
}

impl From<Quiz> for QuizResponse {
    fn from(value: Quiz) -> Self {
        Self {
            id: value.id,
            quiz_creator_id: value.quiz_creator_id,
            quiz_title: value.quiz_title,
            quiz_description: value.quiz_description,
            intro_image: value.intro_image,
            created_at: value.created_at,
            updated_at: value.updated_at,
            is_public: value.is_public,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::PatchValue;

    #[test]
    fn explicit_null_clears_description_while_absent_fields_are_skipped() {
        let payload: PatchQuizPayload =
            serde_json::from_value(serde_json::json!({ "quiz_description": null })).unwrap();
        assert_eq!(payload.quiz_description, Some(None));
        assert_eq!(payload.intro_image, None);

        let update = payload.into_update().unwrap();
        assert_eq!(update.columns().collect::<Vec<_>>(), vec!["quiz_description"]);
        assert_eq!(update.value("quiz_description"), Some(&PatchValue::Text(None)));
    }

    #[test]
    fn empty_title_is_rejected() {
        let payload = PatchQuizPayload {
            quiz_title: Some(String::new()),
            ..Default::default()
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn create_defaults_to_private() {
        let payload: CreateQuizPayload = serde_json::from_value(serde_json::json!({
            "quiz_creator_id": 1,
            "quiz_title": "Capitals of Europe"
        }))
        .unwrap();
        assert!(!payload.is_public);
        assert!(payload.validate().is_ok());
    }
}
