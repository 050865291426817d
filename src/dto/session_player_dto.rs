use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::nullable;
use crate::database::{FieldPatch, PartialUpdate, Table};
use crate::error::Result;
use crate::models::session_player::SessionPlayer;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSessionPlayerPayload {
    pub session_id: i32,
    #[validate(length(min = 1, max = 255))]
    pub display_name: String,
    pub user_id: Option<i32>,
    pub joined_at: Option<DateTime<Utc>>,
    pub player_points: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateSessionPlayerPayload {
    pub session_id: i32,
    #[validate(length(min = 1, max = 255))]
    pub display_name: String,
    pub user_id: Option<i32>,
    pub joined_at: DateTime<Utc>,
    pub player_points: i32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PatchSessionPlayerPayload {
    pub session_id: Option<i32>,
    #[validate(length(min = 1, max = 255))]
    pub display_name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub user_id: Option<Option<i32>>,
    pub joined_at: Option<DateTime<Utc>>,
    pub player_points: Option<i32>,
}

impl FieldPatch for PatchSessionPlayerPayload {
    fn into_update(self) -> Result<PartialUpdate> {
        let mut update = PartialUpdate::new(Table::SessionPlayers);
        update
            .set_some("session_id", self.session_id)
            .set_some("display_name", self.display_name)
            .set_some("user_id", self.user_id)
            .set_some("joined_at", self.joined_at)
            .set_some("player_points", self.player_points);
        Ok(update)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionPlayerResponse {
    pub id: i32,
    pub session_id: i32,
    pub display_name: String,
    pub user_id: Option<i32>,
    pub joined_at: DateTime<Utc>,
    pub player_points: i32,
}

impl From<SessionPlayer> for SessionPlayerResponse {
    fn from(value: SessionPlayer) -> Self {
        Self {
            id: value.id,
            session_id: value.session_id,
            display_name: value.display_name,
            user_id: value.user_id,
            joined_at: value.joined_at,
            player_points: value.player_points,
        }
    }
}
