use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::{
        common::{IdResponse, ListQuery},
        answer_alternative_dto::{
            CreateAnswerAlternativePayload, PatchAnswerAlternativePayload,
            AnswerAlternativeResponse, UpdateAnswerAlternativePayload,
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
    path = "/answer_alternatives",
    params(ListQuery),
    responses(
        (status = 200, description = "Answer alternatives ordered by id", body = [AnswerAlternativeResponse])
    )
)]
#[axum::debug_handler]
pub async fn list_answer_alternatives(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse> {
    let rows = state
        .answer_alternative_service
        .list(query.limit_or(state.list_limit))
        .await?;
    Ok(Json(rows.into_iter().map(AnswerAlternativeResponse::from).collect::<Vec<_>>()))
}

#[utoipa::path(
    get,
    path = "/answer_alternatives/{id}",
    params(
        ("id" = i32, Path, description = "Answer alternative ID")
    ),
    responses(
        (status = 200, description = "Answer alternative found", body = AnswerAlternativeResponse),
        (status = 404, description = "Answer alternative not found")
    )
)]
#[axum::debug_handler]
pub async fn get_answer_alternative(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let row = state.answer_alternative_service.get_by_id(id).await?;
    Ok(Json(AnswerAlternativeResponse::from(row)))
}

#[utoipa::path(
    post,
    path = "/answer_alternatives",
    request_body = CreateAnswerAlternativePayload,
    responses(
        (status = 201, description = "Answer alternative created", body = IdResponse),
        (status = 400, description = "Invalid payload or reference")
    )
)]
#[axum::debug_handler]
pub async fn create_answer_alternative(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateAnswerAlternativePayload>,
) -> Result<impl IntoResponse> {
    let id = state.answer_alternative_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(IdResponse::from(id))))
}

#[utoipa::path(
    put,
    path = "/answer_alternatives/{id}",
    params(
        ("id" = i32, Path, description = "Answer alternative ID")
    ),
    request_body = UpdateAnswerAlternativePayload,
    responses(
        (status = 200, description = "Answer alternative replaced", body = AnswerAlternativeResponse),
        (status = 400, description = "Invalid payload or reference"),
        (status = 404, description = "Answer alternative not found")
    )
)]
#[axum::debug_handler]
pub async fn replace_answer_alternative(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateAnswerAlternativePayload>,
) -> Result<impl IntoResponse> {
    let row = state.answer_alternative_service.replace(id, payload).await?;
    Ok(Json(AnswerAlternativeResponse::from(row)))
}

#[utoipa::path(
    patch,
    path = "/answer_alternatives/{id}",
    params(
        ("id" = i32, Path, description = "Answer alternative ID")
    ),
    request_body = PatchAnswerAlternativePayload,
    responses(
        (status = 200, description = "Answer alternative updated", body = AnswerAlternativeResponse),
        (status = 400, description = "Invalid payload or no field to update"),
        (status = 404, description = "Answer alternative not found")
    )
)]
#[axum::debug_handler]
pub async fn patch_answer_alternative(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<PatchAnswerAlternativePayload>,
) -> Result<impl IntoResponse> {
    let row = state.answer_alternative_service.patch(id, payload).await?;
    Ok(Json(AnswerAlternativeResponse::from(row)))
}

#[utoipa::path(
    delete,
    path = "/answer_alternatives/{id}",
    params(
        ("id" = i32, Path, description = "Answer alternative ID")
    ),
    responses(
        (status = 200, description = "Answer alternative deleted", body = IdResponse),
        (status = 400, description = "Answer alternative is still referenced"),
        (status = 404, description = "Answer alternative not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_answer_alternative(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let id = state.answer_alternative_service.delete(id).await?;
    Ok(Json(IdResponse::from(id)))
}
