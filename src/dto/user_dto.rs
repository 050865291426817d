use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::database::{FieldPatch, PartialUpdate, Table};
use crate::error::Result;
use crate::models::user::User;
use crate::utils::crypto::hash_password;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateUserPayload {
    #[validate(length(min = 1, max = 50))]
    pub user_name: String,
    #[validate(email, length(max = 50))]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    pub registration_date: Option<NaiveDate>,
    pub user_status: i32,
    pub birth_date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateUserPayload {
    #[validate(length(min = 1, max = 50))]
    pub user_name: String,
    #[validate(email, length(max = 50))]
    pub email: String,
    #[validate(length(min = 8, max = 128))]
    pub password: String,
    pub registration_date: NaiveDate,
    pub user_status: i32,
    pub birth_date: NaiveDate,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct PatchUserPayload {
    #[validate(length(min = 1, max = 50))]
    pub user_name: Option<String>,
    #[validate(email, length(max = 50))]
    pub email: Option<String>,
    #[validate(length(min = 8, max = 128))]
    pub password: Option<String>,
    pub registration_date: Option<NaiveDate>,
    pub user_status: Option<i32>,
    pub birth_date: Option<NaiveDate>,
}

impl FieldPatch for PatchUserPayload {
    fn into_update(self) -> Result<PartialUpdate> {
        let password_hash = self
            .password
            .map(|plain| hash_password(&plain))
            .transpose()?;

        let mut update = PartialUpdate::new(Table::Users);
        update
            .set_some("user_name", self.user_name)
            .set_some("email", self.email)
            .set_some("password_hash", password_hash)
            .set_some("registration_date", self.registration_date)
            .set_some("user_status", self.user_status)
            .set_some("birth_date", self.birth_date);
        Ok(update)
    }
}

/// Public view of a user; carries no password material.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: i32,
    pub user_name: String,
    pub email: String,
    pub registration_date: NaiveDate,
    pub user_status: i32,
    pub birth_date: NaiveDate,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        Self {
            id: value.id,
            user_name: value.user_name,
            email: value.email,
            registration_date: value.registration_date,
            user_status: value.user_status,
            birth_date: value.birth_date,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::PatchValue;
    use crate::utils::crypto::verify_password;

    #[test]
    fn create_payload_rejects_bad_email_and_short_password() {
        let payload: CreateUserPayload = serde_json::from_value(serde_json::json!({
            "user_name": "alice",
            "email": "not-an-email",
            "password": "short",
            "user_status": 1,
            "birth_date": "1990-04-01"
        }))
        .unwrap();

        let errors = payload.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
        assert!(!fields.contains_key("user_name"));
    }

    #[test]
    fn patch_only_carries_supplied_fields() {
        let payload: PatchUserPayload =
            serde_json::from_value(serde_json::json!({ "email": "alice2@example.com" })).unwrap();
        payload.validate().unwrap();

        let update = payload.into_update().unwrap();
        assert_eq!(update.columns().collect::<Vec<_>>(), vec!["email"]);
    }

    #[test]
    fn patch_hashes_password_into_hash_column() {
        let payload = PatchUserPayload {
            password: Some("correct horse".to_string()),
            ..Default::default()
        };

        let update = payload.into_update().unwrap();
        assert_eq!(update.columns().collect::<Vec<_>>(), vec!["password_hash"]);
        match update.value("password_hash") {
            Some(PatchValue::Text(Some(hash))) => {
                assert_ne!(hash, "correct horse");
                assert!(verify_password("correct horse", hash));
            }
            other => panic!("unexpected value {:?}", other),
        }
    }

    #[test]
    fn empty_patch_produces_empty_update() {
        let update = PatchUserPayload::default().into_update().unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn response_has_no_password_field() {
        let response = UserResponse::from(User {
            id: 1,
            user_name: "alice".into(),
            email: "a@example.com".into(),
            registration_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            user_status: 1,
            birth_date: NaiveDate::from_ymd_opt(1990, 4, 1).unwrap(),
        });
        let json = serde_json::to_value(response).unwrap();
        assert!(json.get("password").is_none());
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["user_name"], "alice");
    }
}
