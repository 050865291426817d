use serde::{Deserialize, Serialize};
use validator::Validate;

use super::nullable;
use crate::database::{FieldPatch, PartialUpdate, Table};
use crate::error::Result;
use crate::models::player_answer::PlayerAnswer;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreatePlayerAnswerPayload {
    pub player_id: i32,
    pub session_id: i32,
    pub question_id: i32,
    pub answer_id: i32,
    #[validate(range(min = 0))]
    pub response_time: i32,
    #[validate(range(min = 0))]
    pub points_earned: Option<i32>,
    pub is_correct: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdatePlayerAnswerPayload {
    pub player_id: i32,
    pub session_id: i32,
    pub question_id: i32,
    pub answer_id: i32,
    #[validate(range(min = 0))]
    pub response_time: i32,
    #[validate(range(min = 0))]
    pub points_earned: i32,
    pub is_correct: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PatchPlayerAnswerPayload {
    pub player_id: Option<i32>,
    pub session_id: Option<i32>,
    pub question_id: Option<i32>,
    pub answer_id: Option<i32>,
    #[validate(range(min = 0))]
    pub response_time: Option<i32>,
    #[validate(range(min = 0))]
    pub points_earned: Option<i32>,
    #[serde(default, deserialize_with = "nullable")]
    pub is_correct: Option<Option<bool>>,
}

impl FieldPatch for PatchPlayerAnswerPayload {
    fn into_update(self) -> Result<PartialUpdate> {
        let mut update = PartialUpdate::new(Table::PlayerAnswers);
        update
            .set_some("player_id", self.player_id)
            .set_some("session_id", self.session_id)
            .set_some("question_id", self.question_id)
            .set_some("answer_id", self.answer_id)
            .set_some("response_time", self.response_time)
            .set_some("points_earned", self.points_earned)
            .set_some("is_correct", self.is_correct);
        Ok(update)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerAnswerResponse {
    pub id: i32,
    pub player_id: i32,
    pub session_id: i32,
    pub question_id: i32,
    pub answer_id: i32,
    pub response_time: i32,
    pub points_earned: i32,
    pub is_correct: Option<bool>,
}

impl From<PlayerAnswer> for PlayerAnswerResponse {
    fn from(value: PlayerAnswer) -> Self {
        Self {
            id: value.id,
            player_id: value.player_id,
            session_id: value.session_id,
            question_id: value.question_id,
            answer_id: value.answer_id,
            response_time: value.response_time,
            points_earned: value.points_earned,
            is_correct: value.is_correct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_response_time_is_rejected() {
        let payload: CreatePlayerAnswerPayload = serde_json::from_value(serde_json::json!({
            "player_id": 1,
            "session_id": 1,
            "question_id": 1,
            "answer_id": 1,
            "response_time": -20
        }))
        .unwrap();
        assert!(payload.validate().is_err());
    }
}
