use crate::database::{rows, FieldPatch, Table};
use crate::dto::player_answer_dto::{
    CreatePlayerAnswerPayload, PatchPlayerAnswerPayload, UpdatePlayerAnswerPayload,
};
use crate::error::{ConstraintMessages, Error, Result};
use crate::models::player_answer::PlayerAnswer;
use sqlx::PgPool;

const WRITE: ConstraintMessages = ConstraintMessages::new(
    "Player has already answered this question",
    "Invalid player, session, question or answer reference",
);
const DELETE: ConstraintMessages = ConstraintMessages::new(
    "Player has already answered this question",
    "Cannot delete player answer: referenced elsewhere",
);

#[derive(Clone)]
pub struct PlayerAnswerService {
    pool: PgPool,
}

impl PlayerAnswerService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, limit: i64) -> Result<Vec<PlayerAnswer>> {
        rows::list(&self.pool, Table::PlayerAnswers, limit).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<PlayerAnswer> {
        rows::get(&self.pool, Table::PlayerAnswers, id).await
    }

    pub async fn list_for_player(&self, player_id: i32) -> Result<Vec<PlayerAnswer>> {
        rows::children(
            &self.pool,
            Table::PlayerAnswers,
            "player_id",
            Table::SessionPlayers,
            player_id,
            r#""id""#,
        )
        .await
    }

    /// The single answer `player_id` gave to `question_id`.
    pub async fn get_for_question(&self, player_id: i32, question_id: i32) -> Result<PlayerAnswer> {
        let sql = format!(
            "SELECT {} FROM player_answers WHERE player_id = $1 AND question_id = $2",
            Table::PlayerAnswers.select_list()
        );
        sqlx::query_as::<_, PlayerAnswer>(&sql)
            .bind(player_id)
            .bind(question_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| rows::not_found(Table::PlayerAnswers))
    }

    pub async fn create(&self, payload: CreatePlayerAnswerPayload) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO player_answers (
                player_id, session_id, question_id, answer_id, response_time, points_earned, is_correct
            )
            VALUES ($1, $2, $3, $4, $5, COALESCE($6, 0), $7)
            RETURNING id
            "#,
        )
        .bind(payload.player_id)
        .bind(payload.session_id)
        .bind(payload.question_id)
        .bind(payload.answer_id)
        .bind(payload.response_time)
        .bind(payload.points_earned)
        .bind(payload.is_correct)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Error::from_db(e, &WRITE))?;

        tracing::info!(
            player_answer_id = id,
            player_id = payload.player_id,
            question_id = payload.question_id,
            "Player answer recorded"
        );
        Ok(id)
    }

    pub async fn replace(
        &self,
        id: i32,
        payload: UpdatePlayerAnswerPayload,
    ) -> Result<PlayerAnswer> {
        let sql = format!(
            r#"
            UPDATE player_answers
            SET player_id = $1, session_id = $2, question_id = $3, answer_id = $4,
                response_time = $5, points_earned = $6, is_correct = $7
            WHERE id = $8
            RETURNING {}
            "#,
            Table::PlayerAnswers.select_list()
        );
        let answer = sqlx::query_as::<_, PlayerAnswer>(&sql)
            .bind(payload.player_id)
            .bind(payload.session_id)
            .bind(payload.question_id)
            .bind(payload.answer_id)
            .bind(payload.response_time)
            .bind(payload.points_earned)
            .bind(payload.is_correct)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Error::from_db(e, &WRITE))?
            .ok_or_else(|| rows::not_found(Table::PlayerAnswers))?;

        tracing::info!(player_answer_id = id, "Player answer replaced");
        Ok(answer)
    }

    pub async fn patch(&self, id: i32, payload: PatchPlayerAnswerPayload) -> Result<PlayerAnswer> {
        rows::patch(&self.pool, payload.into_update()?, id, &WRITE).await
    }

    pub async fn delete(&self, id: i32) -> Result<i32> {
        rows::delete(&self.pool, Table::PlayerAnswers, id, &DELETE).await
    }
}
