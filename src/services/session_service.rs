use crate::database::{rows, FieldPatch, Table};
use crate::dto::session_dto::{CreateSessionPayload, PatchSessionPayload, UpdateSessionPayload};
use crate::error::{ConstraintMessages, Error, Result};
use crate::models::session::Session;
use crate::utils::join_code::generate_join_code;
use sqlx::PgPool;

const WRITE: ConstraintMessages = ConstraintMessages::new(
    "Session code already in use",
    "Invalid host, quiz, QR code, status or question reference",
);
const DELETE: ConstraintMessages = ConstraintMessages::new(
    "Session code already in use",
    "Cannot delete session: it still has players, answers or scoreboards",
);

#[derive(Clone)]
pub struct SessionService {
    pool: PgPool,
}

impl SessionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, limit: i64) -> Result<Vec<Session>> {
        rows::list(&self.pool, Table::Sessions, limit).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Session> {
        rows::get(&self.pool, Table::Sessions, id).await
    }

    /// Resolves the code players type to join.
    pub async fn get_by_code(&self, session_code: i32) -> Result<Session> {
        let sql = format!(
            "SELECT {} FROM sessions WHERE session_code = $1",
            Table::Sessions.select_list()
        );
        sqlx::query_as::<_, Session>(&sql)
            .bind(session_code)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| rows::not_found(Table::Sessions))
    }

    pub async fn create(&self, payload: CreateSessionPayload) -> Result<i32> {
        let session_code = payload.session_code.unwrap_or_else(generate_join_code);
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO sessions (
                session_name, host_user_id, active_quiz, qr_code_id, session_status,
                started_at, ended_at, current_question_id, session_code
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id
            "#,
        )
        .bind(&payload.session_name)
        .bind(payload.host_user_id)
        .bind(payload.active_quiz)
        .bind(payload.qr_code_id)
        .bind(payload.session_status)
        .bind(payload.started_at)
        .bind(payload.ended_at)
        .bind(payload.current_question_id)
        .bind(session_code)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Error::from_db(e, &WRITE))?;

        tracing::info!(session_id = id, session_code, "Session created");
        Ok(id)
    }

    pub async fn replace(&self, id: i32, payload: UpdateSessionPayload) -> Result<Session> {
        let sql = format!(
            r#"
            UPDATE sessions
            SET session_name = $1, host_user_id = $2, active_quiz = $3, qr_code_id = $4,
                session_status = $5, started_at = $6, ended_at = $7, current_question_id = $8,
                session_code = $9
            WHERE id = $10
            RETURNING {}
            "#,
            Table::Sessions.select_list()
        );
        let session = sqlx::query_as::<_, Session>(&sql)
            .bind(&payload.session_name)
            .bind(payload.host_user_id)
            .bind(payload.active_quiz)
            .bind(payload.qr_code_id)
            .bind(payload.session_status)
            .bind(payload.started_at)
            .bind(payload.ended_at)
            .bind(payload.current_question_id)
            .bind(payload.session_code)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Error::from_db(e, &WRITE))?
            .ok_or_else(|| rows::not_found(Table::Sessions))?;

        tracing::info!(session_id = id, "Session replaced");
        Ok(session)
    }

    pub async fn patch(&self, id: i32, payload: PatchSessionPayload) -> Result<Session> {
        rows::patch(&self.pool, payload.into_update()?, id, &WRITE).await
    }

    pub async fn delete(&self, id: i32) -> Result<i32> {
        rows::delete(&self.pool, Table::Sessions, id, &DELETE).await
    }
}
