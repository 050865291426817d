pub mod answer_alternative_dto;
pub mod common;
pub mod player_answer_dto;
pub mod question_dto;
pub mod quiz_dto;
pub mod session_dto;
pub mod session_player_dto;
pub mod session_scoreboard_dto;
pub mod user_dto;

use serde::{Deserialize, Deserializer};

/// Distinguishes an explicit `null` from an absent field.
///
/// Use with `#[serde(default, deserialize_with = "nullable")]` on an
/// `Option<Option<T>>`: absent is `None`, `null` is `Some(None)`.
pub(crate) fn nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
