use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::nullable;
use crate::database::{FieldPatch, PartialUpdate, Table};
use crate::error::Result;
use crate::models::session::Session;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSessionPayload {
    #[validate(length(min = 1, max = 255))]
    pub session_name: String,
    pub host_user_id: i32,
    pub active_quiz: Option<i32>,
    pub qr_code_id: Option<i32>,
    pub session_status: i32,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub current_question_id: Option<i32>,
    /// Generated when omitted.
    #[validate(range(min = 0, max = 99_999_999))]
    pub session_code: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateSessionPayload {
    #[validate(length(min = 1, max = 255))]
    pub session_name: String,
    pub host_user_id: i32,
    pub active_quiz: Option<i32>,
    pub qr_code_id: Option<i32>,
    pub session_status: i32,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub current_question_id: Option<i32>,
    #[validate(range(min = 0, max = 99_999_999))]
    pub session_code: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PatchSessionPayload {
    #[validate(length(min = 1, max = 255))]
    pub session_name: Option<String>,
    pub host_user_id: Option<i32>,
    #[serde(default, deserialize_with = "nullable")]
    pub active_quiz: Option<Option<i32>>,
    #[serde(default, deserialize_with = "nullable")]
    pub qr_code_id: Option<Option<i32>>,
    pub session_status: Option<i32>,
    #[serde(default, deserialize_with = "nullable")]
    pub started_at: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "nullable")]
    pub ended_at: Option<Option<DateTime<Utc>>>,
    #[serde(default, deserialize_with = "nullable")]
    pub current_question_id: Option<Option<i32>>,
    #[validate(range(min = 0, max = 99_999_999))]
    pub session_code: Option<i32>,
}

impl FieldPatch for PatchSessionPayload {
    fn into_update(self) -> Result<PartialUpdate> {
        let mut update = PartialUpdate::new(Table::Sessions);
        update
            .set_some("session_name", self.session_name)
            .set_some("host_user_id", self.host_user_id)
            .set_some("active_quiz", self.active_quiz)
            .set_some("qr_code_id", self.qr_code_id)
            .set_some("session_status", self.session_status)
            .set_some("started_at", self.started_at)
            .set_some("ended_at", self.ended_at)
            .set_some("current_question_id", self.current_question_id)
            .set_some("session_code", self.session_code);
        Ok(update)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
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

impl From<Session> for SessionResponse {
    fn from(value: Session) -> Self {
        Self {
            id: value.id,
            session_name: value.session_name,
            host_user_id: value.host_user_id,
            active_quiz: value.active_quiz,
            qr_code_id: value.qr_code_id,
            session_status: value.session_status,
            started_at: value.started_at,
            ended_at: value.ended_at,
            current_question_id: value.current_question_id,
            session_code: value.session_code,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::PatchValue;

    #[test]
    fn out_of_range_join_code_is_rejected() {
        let payload = PatchSessionPayload {
            session_code: Some(100_000_000),
            ..Default::default()
        };
        assert!(payload.validate().is_err());

        let payload = PatchSessionPayload {
            session_code: Some(-1),
            ..Default::default()
        };
        assert!(payload.validate().is_err());
    }

    #[test]
    fn ending_a_session_stamps_end_and_clears_current_question() {
        let payload: PatchSessionPayload = serde_json::from_value(serde_json::json!({
            "ended_at": "2026-10-19T12:00:00Z",
            "current_question_id": null
        }))
        .unwrap();
        let update = payload.into_update().unwrap();

        assert_eq!(
            update.columns().collect::<Vec<_>>(),
            vec!["ended_at", "current_question_id"]
        );
        assert_eq!(update.value("current_question_id"), Some(&PatchValue::Int(None)));
    }
}
