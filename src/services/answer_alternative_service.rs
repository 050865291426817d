use crate::database::{rows, FieldPatch, Table};
use crate::dto::answer_alternative_dto::{
    CreateAnswerAlternativePayload, PatchAnswerAlternativePayload, UpdateAnswerAlternativePayload,
};
use crate::error::{ConstraintMessages, Error, Result};
use crate::models::answer_alternative::AnswerAlternative;
use sqlx::PgPool;

const WRITE: ConstraintMessages = ConstraintMessages::new(
    "Answer alternative already exists",
    "Invalid question or answer icon reference",
);
const DELETE: ConstraintMessages = ConstraintMessages::new(
    "Answer alternative already exists",
    "Cannot delete answer alternative: players have chosen it",
);

#[derive(Clone)]
pub struct AnswerAlternativeService {
    pool: PgPool,
}

impl AnswerAlternativeService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, limit: i64) -> Result<Vec<AnswerAlternative>> {
        rows::list(&self.pool, Table::AnswerAlternatives, limit).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<AnswerAlternative> {
        rows::get(&self.pool, Table::AnswerAlternatives, id).await
    }

    pub async fn list_for_question(&self, question_id: i32) -> Result<Vec<AnswerAlternative>> {
        rows::children(
            &self.pool,
            Table::AnswerAlternatives,
            "question_id",
            Table::Questions,
            question_id,
            r#""answer_order" NULLS LAST, "id""#,
        )
        .await
    }

    pub async fn create(&self, payload: CreateAnswerAlternativePayload) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO answer_alternatives (question_id, answer_text, is_correct, answer_icon, answer_order)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(payload.question_id)
        .bind(&payload.answer_text)
        .bind(payload.is_correct)
        .bind(payload.answer_icon)
        .bind(payload.answer_order)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Error::from_db(e, &WRITE))?;

        tracing::info!(answer_alternative_id = id, "Answer alternative created");
        Ok(id)
    }

    pub async fn replace(
        &self,
        id: i32,
        payload: UpdateAnswerAlternativePayload,
    ) -> Result<AnswerAlternative> {
        let sql = format!(
            r#"
            UPDATE answer_alternatives
            SET question_id = $1, answer_text = $2, is_correct = $3, answer_icon = $4, answer_order = $5
            WHERE id = $6
            RETURNING {}
            "#,
            Table::AnswerAlternatives.select_list()
        );
        let alternative = sqlx::query_as::<_, AnswerAlternative>(&sql)
            .bind(payload.question_id)
            .bind(&payload.answer_text)
            .bind(payload.is_correct)
            .bind(payload.answer_icon)
            .bind(payload.answer_order)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Error::from_db(e, &WRITE))?
            .ok_or_else(|| rows::not_found(Table::AnswerAlternatives))?;

        tracing::info!(answer_alternative_id = id, "Answer alternative replaced");
        Ok(alternative)
    }

    pub async fn patch(
        &self,
        id: i32,
        payload: PatchAnswerAlternativePayload,
    ) -> Result<AnswerAlternative> {
        rows::patch(&self.pool, payload.into_update()?, id, &WRITE).await
    }

    pub async fn delete(&self, id: i32) -> Result<i32> {
        rows::delete(&self.pool, Table::AnswerAlternatives, id, &DELETE).await
    }
}
