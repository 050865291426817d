use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

#[derive(Debug, Clone, Serialize, Deserialize, Default, IntoParams)]
#[serde(default)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// Maximum number of rows (1-100).
    pub limit: Option<i64>,
}

/// Key of a created or deleted row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdResponse {
    pub id: i32,
}

impl From<i32> for IdResponse {
    fn from(id: i32) -> Self {
        Self { id }
    }
}

impl ListQuery {
    /// Requested row cap, falling back to `default` and clamped to 1..=100.
    pub fn limit_or(&self, default: i64) -> i64 {
        crate::database::rows::clamp_limit(self.limit, default)
    }
}
