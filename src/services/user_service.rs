use crate::database::{rows, FieldPatch, Table};
use crate::dto::user_dto::{CreateUserPayload, PatchUserPayload, UpdateUserPayload};
use crate::error::{ConstraintMessages, Error, Result};
use crate::models::user::User;
use crate::utils::crypto::hash_password;
use sqlx::PgPool;

const WRITE: ConstraintMessages = ConstraintMessages::new(
    "User name or email already taken",
    "Invalid user status reference",
);
const DELETE: ConstraintMessages = ConstraintMessages::new(
    "User name or email already taken",
    "Cannot delete user: referenced elsewhere",
);

#[derive(Clone)]
pub struct UserService {
    pool: PgPool,
}

impl UserService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, limit: i64) -> Result<Vec<User>> {
        rows::list(&self.pool, Table::Users, limit).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<User> {
        rows::get(&self.pool, Table::Users, id).await
    }

    pub async fn create(&self, payload: CreateUserPayload) -> Result<i32> {
        let password_hash = hash_password(&payload.password)?;
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO users (user_name, email, password_hash, registration_date, user_status, birth_date)
            VALUES ($1, $2, $3, COALESCE($4, CURRENT_DATE), $5, $6)
            RETURNING id
            "#,
        )
        .bind(&payload.user_name)
        .bind(&payload.email)
        .bind(&password_hash)
        .bind(payload.registration_date)
        .bind(payload.user_status)
        .bind(payload.birth_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Error::from_db(e, &WRITE))?;

        tracing::info!(user_id = id, "User created");
        Ok(id)
    }

    pub async fn replace(&self, id: i32, payload: UpdateUserPayload) -> Result<User> {
        let password_hash = hash_password(&payload.password)?;
        let sql = format!(
            r#"
            UPDATE users
            SET user_name = $1, email = $2, password_hash = $3, registration_date = $4,
                user_status = $5, birth_date = $6
            WHERE id = $7
            RETURNING {}
            "#,
            Table::Users.select_list()
        );
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(&payload.user_name)
            .bind(&payload.email)
            .bind(&password_hash)
            .bind(payload.registration_date)
            .bind(payload.user_status)
            .bind(payload.birth_date)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Error::from_db(e, &WRITE))?
            .ok_or_else(|| rows::not_found(Table::Users))?;

        tracing::info!(user_id = id, "User replaced");
        Ok(user)
    }

    pub async fn patch(&self, id: i32, payload: PatchUserPayload) -> Result<User> {
        rows::patch(&self.pool, payload.into_update()?, id, &WRITE).await
    }

    pub async fn delete(&self, id: i32) -> Result<i32> {
        rows::delete(&self.pool, Table::Users, id, &DELETE).await
    }
}
