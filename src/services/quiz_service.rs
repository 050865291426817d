use crate::database::{rows, FieldPatch, Table};
use crate::dto::quiz_dto::{CreateQuizPayload, PatchQuizPayload, UpdateQuizPayload};
use crate::error::{ConstraintMessages, Error, Result};
use crate::models::quiz::Quiz;
use sqlx::PgPool;

const WRITE: ConstraintMessages = ConstraintMessages::new(
    "Quiz already exists",
    "Invalid creator or intro image reference",
);
const DELETE: ConstraintMessages = ConstraintMessages::new(
    "Quiz already exists",
    "Cannot delete quiz: it still has questions or sessions",
);

#[derive(Clone)]
pub struct QuizService {
    pool: PgPool,
}

impl QuizService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, limit: i64) -> Result<Vec<Quiz>> {
        rows::list(&self.pool, Table::Quizzes, limit).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Quiz> {
        rows::get(&self.pool, Table::Quizzes, id).await
    }

    pub async fn create(&self, payload: CreateQuizPayload) -> Result<i32> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO quizzes (quiz_creator_id, quiz_title, quiz_description, intro_image, created_at, is_public)
            VALUES ($1, $2, $3, $4, COALESCE($5, NOW()), $6)
            RETURNING id
            "#,
        )
        .bind(payload.quiz_creator_id)
        .bind(&payload.quiz_title)
        .bind(&payload.quiz_description)
        .bind(payload.intro_image)
        .bind(payload.created_at)
        .bind(payload.is_public)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| Error::from_db(e, &WRITE))?;

        tracing::info!(quiz_id = id, "Quiz created");
        Ok(id)
    }

    pub async fn replace(&self, id: i32, payload: UpdateQuizPayload) -> Result<Quiz> {
        let sql = format!(
            r#"
            UPDATE quizzes
            SET quiz_creator_id = $1, quiz_title = $2, quiz_description = $3, intro_image = $4,
                is_public = $5, updated_at = NOW()
            WHERE id = $6
            RETURNING {}
            "#,
            Table::Quizzes.select_list()
        );
        let quiz = sqlx::query_as::<_, Quiz>(&sql)
            .bind(payload.quiz_creator_id)
            .bind(&payload.quiz_title)
            .bind(&payload.quiz_description)
            .bind(payload.intro_image)
            .bind(payload.is_public)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| Error::from_db(e, &WRITE))?
            .ok_or_else(|| rows::not_found(Table::Quizzes))?;

        tracing::info!(quiz_id = id, "Quiz replaced");
        Ok(quiz)
    }

    pub async fn patch(&self, id: i32, payload: PatchQuizPayload) -> Result<Quiz> {
        rows::patch(&self.pool, payload.into_update()?, id, &WRITE).await
    }

    pub async fn delete(&self, id: i32) -> Result<i32> {
        rows::delete(&self.pool, Table::Quizzes, id, &DELETE).await
    }
}
