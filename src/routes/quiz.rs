use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::{
        common::{IdResponse, ListQuery},
        question_dto::QuestionResponse,
        quiz_dto::{
            CreateQuizPayload, PatchQuizPayload, QuizResponse, UpdateQuizPayload,
        },
    },
    error::Result,
    utils::{
        extract::{Path, Query},
        validation::ValidatedJson,
    },
    AppState,
};

#[utoipa::path(
    get,
    path = "/quizzes",
    params(ListQuery),
    responses(
        (status = 200, description = "Quizs ordered by id", body = [QuizResponse])
    )
)]
#[axum::debug_handler]
pub async fn list_quizzes(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse> {
    let rows = state
        .quiz_service
        .list(query.limit_or(state.list_limit))
        .await?;
    Ok(Json(rows.into_iter().map(QuizResponse::from).collect::<Vec<_>>()))
}

#[utoipa::path(
    get,
    path = "/quizzes/{id}",
    params(
        ("id" = i32, Path, description = "Quiz ID")
    ),
    responses(
        (status = 200, description = "Quiz found", body = QuizResponse),
        (status = 404, description = "Quiz not found")
    )
)]
#[axum::debug_handler]
pub async fn get_quiz(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let row = state.quiz_service.get_by_id(id).await?;
    Ok(Json(QuizResponse::from(row)))
}

/// Questions of a quiz in play order.
#[utoipa::path(
    get,
    path = "/quizzes/{id}/questions",
    params(
        ("id" = i32, Path, description = "Quiz ID")
    ),
    responses(
        (status = 200, description = "Questions of the quiz, possibly empty", body = [QuestionResponse]),
        (status = 404, description = "Quiz not found")
    )
)]
#[axum::debug_handler]
pub async fn list_quiz_questions(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let questions = state.question_service.list_for_quiz(id).await?;
    Ok(Json(
        questions
            .into_iter()
            .map(QuestionResponse::from)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    post,
    path = "/quizzes",
    request_body = CreateQuizPayload,
    responses(
        (status = 201, description = "Quiz created", body = IdResponse),
        (status = 400, description = "Invalid payload or reference")
    )
)]
#[axum::debug_handler]
pub async fn create_quiz(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateQuizPayload>,
) -> Result<impl IntoResponse> {
    let id = state.quiz_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(IdResponse::from(id))))
}

#[utoipa::path(
    put,
    path = "/quizzes/{id}",
    params(
        ("id" = i32, Path, description = "Quiz ID")
    ),
    request_body = UpdateQuizPayload,
    responses(
        (status = 200, description = "Quiz replaced", body = QuizResponse),
        (status = 400, description = "Invalid payload or reference"),
        (status = 404, description = "Quiz not found")
    )
)]
#[axum::debug_handler]
pub async fn replace_quiz(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateQuizPayload>,
) -> Result<impl IntoResponse> {
    let row = state.quiz_service.replace(id, payload).await?;
    Ok(Json(QuizResponse::from(row)))
}

#[utoipa::path(
    patch,
    path = "/quizzes/{id}",
    params(
        ("id" = i32, Path, description = "Quiz ID")
    ),
    request_body = PatchQuizPayload,
    responses(
        (status = 200, description = "Quiz updated", body = QuizResponse),
        (status = 400, description = "Invalid payload or no field to update"),
        (status = 404, description = "Quiz not found")
    )
)]
#[axum::debug_handler]
pub async fn patch_quiz(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<PatchQuizPayload>,
) -> Result<impl IntoResponse> {
    let row = state.quiz_service.patch(id, payload).await?;
    Ok(Json(QuizResponse::from(row)))
}

#[utoipa::path(
    delete,
    path = "/quizzes/{id}",
    params(
        ("id" = i32, Path, description = "Quiz ID")
    ),
    responses(
        (status = 200, description = "Quiz deleted", body = IdResponse),
        (status = 400, description = "Quiz still has questions or sessions"),
        (status = 404, description = "Quiz not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_quiz(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let id = state.quiz_service.delete(id).await?;
    Ok(Json(IdResponse::from(id)))
}
