use serde::{Deserialize, Serialize};
use validator::Validate;

use super::nullable;
use crate::database::{FieldPatch, PartialUpdate, Table};
use crate::error::Result;
use crate::models::session_scoreboard::SessionScoreboard;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSessionScoreboardPayload {
    pub session_id: i32,
    pub player_id: i32,
    pub total_score: Option<i32>,
    #[validate(range(min = 0))]
    pub correct_answers: Option<i32>,
    #[validate(range(min = 1))]
    pub rank: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateSessionScoreboardPayload {
    pub session_id: i32,
    pub player_id: i32,
    pub total_score: i32,
    #[validate(range(min = 0))]
    pub correct_answers: i32,
    #[validate(range(min = 1))]
    pub rank: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PatchSessionScoreboardPayload {
    pub session_id: Option<i32>,
    pub player_id: Option<i32>,
    pub total_score: Option<i32>,
    #[validate(range(min = 0))]
    pub correct_answers: Option<i32>,
    #[serde(default, deserialize_with = "nullable")]
    pub rank: Option<Option<i32>>,
}

impl FieldPatch for PatchSessionScoreboardPayload {
    fn into_update(self) -> Result<PartialUpdate> {
        let mut update = PartialUpdate::new(Table::SessionScoreboards);
        update
            .set_some("session_id", self.session_id)
            .set_some("player_id", self.player_id)
            .set_some("total_score", self.total_score)
            .set_some("correct_answers", self.correct_answers)
            .set_some("rank", self.rank);
        Ok(update)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionScoreboardResponse {
    pub id: i32,
    pub session_id: i32,
    pub player_id: i32,
    pub total_score: i32,
    pub correct_answers: i32,
    pub rank: Option<i32>,
}

impl From<SessionScoreboard> for SessionScoreboardResponse {
    fn from(value: SessionScoreboard) -> Self {
        Self {
            id: value.id,
            session_id: value.session_id,
            player_id: value.player_id,
            total_score: value.total_score,
            correct_answers: value.correct_answers,
            rank: value.rank,
        }
    }
}
