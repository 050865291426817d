use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::{
        common::{IdResponse, ListQuery},
        answer_alternative_dto::AnswerAlternativeResponse,
        question_dto::{
            CreateQuestionPayload, PatchQuestionPayload, QuestionResponse, UpdateQuestionPayload,
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
    path = "/questions",
    params(ListQuery),
    responses(
        (status = 200, description = "Questions ordered by id", body = [QuestionResponse])
    )
)]
#[axum::debug_handler]
pub async fn list_questions(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse> {
    let rows = state
        .question_service
        .list(query.limit_or(state.list_limit))
        .await?;
    Ok(Json(rows.into_iter().map(QuestionResponse::from).collect::<Vec<_>>()))
}

#[utoipa::path(
    get,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question found", body = QuestionResponse),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let row = state.question_service.get_by_id(id).await?;
    Ok(Json(QuestionResponse::from(row)))
}

#[utoipa::path(
    get,
    path = "/questions/{id}/answer_alternatives",
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Answer alternatives of the question", body = [AnswerAlternativeResponse]),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn list_question_answer_alternatives(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let alternatives = state
        .answer_alternative_service
        .list_for_question(id)
        .await?;
    Ok(Json(
        alternatives
            .into_iter()
            .map(AnswerAlternativeResponse::from)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    post,
    path = "/questions",
    request_body = CreateQuestionPayload,
    responses(
        (status = 201, description = "Question created", body = IdResponse),
        (status = 400, description = "Invalid payload or reference")
    )
)]
#[axum::debug_handler]
pub async fn create_question(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateQuestionPayload>,
) -> Result<impl IntoResponse> {
    let id = state.question_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(IdResponse::from(id))))
}

#[utoipa::path(
    put,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    request_body = UpdateQuestionPayload,
    responses(
        (status = 200, description = "Question replaced", body = QuestionResponse),
        (status = 400, description = "Invalid payload or reference"),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn replace_question(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateQuestionPayload>,
) -> Result<impl IntoResponse> {
    let row = state.question_service.replace(id, payload).await?;
    Ok(Json(QuestionResponse::from(row)))
}

#[utoipa::path(
    patch,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    request_body = PatchQuestionPayload,
    responses(
        (status = 200, description = "Question updated", body = QuestionResponse),
        (status = 400, description = "Invalid payload or no field to update"),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn patch_question(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<PatchQuestionPayload>,
) -> Result<impl IntoResponse> {
    let row = state.question_service.patch(id, payload).await?;
    Ok(Json(QuestionResponse::from(row)))
}

#[utoipa::path(
    delete,
    path = "/questions/{id}",
    params(
        ("id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted", body = IdResponse),
        (status = 400, description = "Question is still referenced"),
        (status = 404, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let id = state.question_service.delete(id).await?;
    Ok(Json(IdResponse::from(id)))
}
