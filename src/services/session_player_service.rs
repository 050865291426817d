use crate::database::{rows, FieldPatch, Table};
use crate::dto::session_player_dto::{
    CreateSessionPlayerPayload, PatchSessionPlayerPayload, UpdateSessionPlayerPayload,
};
use crate::error::{ConstraintMessages, Error, Result};
use crate::models::session_player::SessionPlayer;
use sqlx::PgPool;

const WRITE: ConstraintMessages = ConstraintMessages::new(
    "Display name already taken in this session",
    "Invalid session or user reference",
);
const DELETE: ConstraintMessages = ConstraintMessages::new(
    "Display name already taken in this session",
    "Cannot delete player: answers or scoreboard entries reference it",
);

#[derive(Clone)]
pub struct SessionPlayerService {
    pool: PgPool,
}

impl SessionPlayerService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, limit: i64) -> Result<Vec<SessionPlayer>> {
        rows::list(&self.pool, Table::SessionPlayers, limit).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<SessionPlayer> {
        rows::get(&self.pool, Table::SessionPlayers, id).await
    }

    pub async fn list_for_session(&self, session_id: i32) -> Result<Vec<SessionPlayer>> {
        rows::children(
            &self.pool,
            Table::SessionPlayers,
            "session_id",
            Table::Sessions,
            session_id,
            r#""joined_at", "id""#,
        )
        .await
    }

    pub async fn create(&self, payload: CreateSessionPlayerPayload) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO session_players (session_id, display_name, user_id, joined_at, player_points)
            VALUES ($1, $2, $3, COALESCE($4, NOW()), COALESCE($5, 0))
            RETURNING id
            "#,
        )
        .bind(payload.session_id)
        .bind(&payload.display_name)
        .bind(payload.user_id)
        .bind(payload.joined_at)
        .bind(payload.player_points)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Error::from_db(e, &WRITE))?;

        tracing::info!(
            player_id = id,
            session_id = payload.session_id,
            "Player joined session"
        );
        Ok(id)
    }

    pub async fn replace(
        &self,
        id: i32,
        payload: UpdateSessionPlayerPayload,
    ) -> Result<SessionPlayer> {
        let sql = format!(
            r#"
            UPDATE session_players
            SET session_id = $1, display_name = $2, user_id = $3, joined_at = $4, player_points = $5
            WHERE id = $6
            RETURNING {}
            "#,
            Table::SessionPlayers.select_list()
        );
        let player = sqlx::query_as::<_, SessionPlayer>(&sql)
            .bind(payload.session_id)
            .bind(&payload.display_name)
            .bind(payload.user_id)
            .bind(payload.joined_at)
            .bind(payload.player_points)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Error::from_db(e, &WRITE))?
            .ok_or_else(|| rows::not_found(Table::SessionPlayers))?;

        tracing::info!(player_id = id, "Player replaced");
        Ok(player)
    }

    pub async fn patch(
        &self,
        id: i32,
        payload: PatchSessionPlayerPayload,
    ) -> Result<SessionPlayer> {
        rows::patch(&self.pool, payload.into_update()?, id, &WRITE).await
    }

    pub async fn delete(&self, id: i32) -> Result<i32> {
        rows::delete(&self.pool, Table::SessionPlayers, id, &DELETE).await
    }
}
