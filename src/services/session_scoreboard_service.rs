use crate::database::{rows, FieldPatch, Table};
use crate::dto::session_scoreboard_dto::{
    CreateSessionScoreboardPayload, PatchSessionScoreboardPayload, UpdateSessionScoreboardPayload,
};
use crate::error::{ConstraintMessages, Error, Result};
use crate::models::session_scoreboard::SessionScoreboard;
use sqlx::PgPool;

const WRITE: ConstraintMessages = ConstraintMessages::new(
    "Player already has a scoreboard entry in this session",
    "Invalid session or player reference",
);
const DELETE: ConstraintMessages = ConstraintMessages::new(
    "Player already has a scoreboard entry in this session",
    "Cannot delete scoreboard entry: referenced elsewhere",
);

#[derive(Clone)]
pub struct SessionScoreboardService {
    pool: PgPool,
}

impl SessionScoreboardService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, limit: i64) -> Result<Vec<SessionScoreboard>> {
        rows::list(&self.pool, Table::SessionScoreboards, limit).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<SessionScoreboard> {
        rows::get(&self.pool, Table::SessionScoreboards, id).await
    }

    /// Standings of one session, best first.
    pub async fn list_for_session(&self, session_id: i32) -> Result<Vec<SessionScoreboard>> {
        rows::children(
            &self.pool,
            Table::SessionScoreboards,
            "session_id",
            Table::Sessions,
            session_id,
            r#""rank" NULLS LAST, "total_score" DESC, "id""#,
        )
        .await
    }

    pub async fn create(&self, payload: CreateSessionScoreboardPayload) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO session_scoreboards (session_id, player_id, total_score, correct_answers, rank)
            VALUES ($1, $2, COALESCE($3, 0), COALESCE($4, 0), $5)
            RETURNING id
            "#,
        )
        .bind(payload.session_id)
        .bind(payload.player_id)
        .bind(payload.total_score)
        .bind(payload.correct_answers)
        .bind(payload.rank)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Error::from_db(e, &WRITE))?;

        tracing::info!(
            scoreboard_id = id,
            session_id = payload.session_id,
            "Scoreboard entry created"
        );
        Ok(id)
    }

    pub async fn replace(
        &self,
        id: i32,
        payload: UpdateSessionScoreboardPayload,
    ) -> Result<SessionScoreboard> {
        let sql = format!(
            r#"
            UPDATE session_scoreboards
            SET session_id = $1, player_id = $2, total_score = $3, correct_answers = $4, rank = $5
            WHERE id = $6
            RETURNING {}
            "#,
            Table::SessionScoreboards.select_list()
        );
        let entry = sqlx::query_as::<_, SessionScoreboard>(&sql)
            .bind(payload.session_id)
            .bind(payload.player_id)
            .bind(payload.total_score)
            .bind(payload.correct_answers)
            .bind(payload.rank)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Error::from_db(e, &WRITE))?
            .ok_or_else(|| rows::not_found(Table::SessionScoreboards))?;

        tracing::info!(scoreboard_id = id, "Scoreboard entry replaced");
        Ok(entry)
    }

    pub async fn patch(
        &self,
        id: i32,
        payload: PatchSessionScoreboardPayload,
    ) -> Result<SessionScoreboard> {
        rows::patch(&self.pool, payload.into_update()?, id, &WRITE).await
    }

    pub async fn delete(&self, id: i32) -> Result<i32> {
        rows::delete(&self.pool, Table::SessionScoreboards, id, &DELETE).await
    }
}
