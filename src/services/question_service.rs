use crate::database::{rows, FieldPatch, Table};
use crate::dto::question_dto::{CreateQuestionPayload, PatchQuestionPayload, UpdateQuestionPayload};
use crate::error::{ConstraintMessages, Error, Result};
use crate::models::question::Question;
use sqlx::PgPool;

const WRITE: ConstraintMessages = ConstraintMessages::new(
    "Question already exists",
    "Invalid quiz, question type or image reference",
);
const DELETE: ConstraintMessages = ConstraintMessages::new(
    "Question already exists",
    "Cannot delete question: it still has answer alternatives or answers",
);

#[derive(Clone)]
pub struct QuestionService {
    pool: PgPool,
}

impl QuestionService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, limit: i64) -> Result<Vec<Question>> {
        rows::list(&self.pool, Table::Questions, limit).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Question> {
        rows::get(&self.pool, Table::Questions, id).await
    }

    /// Questions of one quiz in play order.
    pub async fn list_for_quiz(&self, quiz_id: i32) -> Result<Vec<Question>> {
        rows::children(
            &self.pool,
            Table::Questions,
            "quiz_id",
            Table::Quizzes,
            quiz_id,
            r#""question_order" NULLS LAST, "id""#,
        )
        .await
    }

    pub async fn create(&self, payload: CreateQuestionPayload) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO questions (quiz_id, question_text, question_order, time_limit, points, question_type, image)
            VALUES ($1, $2, $3, $4, COALESCE($5, 100), $6, $7)
            RETURNING id
            "#,
        )
        .bind(payload.quiz_id)
        .bind(&payload.question_text)
        .bind(payload.question_order)
        .bind(payload.time_limit)
        .bind(payload.points)
        .bind(payload.question_type)
        .bind(payload.image)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Error::from_db(e, &WRITE))?;

        tracing::info!(question_id = id, quiz_id = payload.quiz_id, "Question created");
        Ok(id)
    }

    pub async fn replace(&self, id: i32, payload: UpdateQuestionPayload) -> Result<Question> {
        let sql = format!(
            r#"
            UPDATE questions
            SET quiz_id = $1, question_text = $2, question_order = $3, time_limit = $4,
                points = $5, question_type = $6, image = $7
            WHERE id = $8
            RETURNING {}
            "#,
            Table::Questions.select_list()
        );
        let question = sqlx::query_as::<_, Question>(&sql)
            .bind(payload.quiz_id)
            .bind(&payload.question_text)
            .bind(payload.question_order)
            .bind(payload.time_limit)
            .bind(payload.points)
            .bind(payload.question_type)
            .bind(payload.image)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Error::from_db(e, &WRITE))?
            .ok_or_else(|| rows::not_found(Table::Questions))?;

        tracing::info!(question_id = id, "Question replaced");
        Ok(question)
    }

    pub async fn patch(&self, id: i32, payload: PatchQuestionPayload) -> Result<Question> {
        rows::patch(&self.pool, payload.into_update()?, id, &WRITE).await
    }

    pub async fn delete(&self, id: i32) -> Result<i32> {
        rows::delete(&self.pool, Table::Questions, id, &DELETE).await
    }
}
