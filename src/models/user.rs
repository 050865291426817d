use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered account. The password hash is never loaded.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i32,
    pub user_name: String,
    pub email: String,
    pub registration_date: NaiveDate,
    pub user_status: i32,
    pub birth_date: NaiveDate,
}
