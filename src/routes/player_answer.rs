use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::{
        common::{IdResponse, ListQuery},
        player_answer_dto::{
            CreatePlayerAnswerPayload, PatchPlayerAnswerPayload, PlayerAnswerResponse,
            UpdatePlayerAnswerPayload,
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
    path = "/player_answers",
    params(ListQuery),
    responses(
        (status = 200, description = "Player answers ordered by id", body = [PlayerAnswerResponse])
    )
)]
#[axum::debug_handler]
pub async fn list_player_answers(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse> {
    let rows = state
        .player_answer_service
        .list(query.limit_or(state.list_limit))
        .await?;
    Ok(Json(rows.into_iter().map(PlayerAnswerResponse::from).collect::<Vec<_>>()))
}

#[utoipa::path(
    get,
    path = "/player_answers/{id}",
    params(
        ("id" = i32, Path, description = "Player answer ID")
    ),
    responses(
        (status = 200, description = "Player answer found", body = PlayerAnswerResponse),
        (status = 404, description = "Player answer not found")
    )
)]
#[axum::debug_handler]
pub async fn get_player_answer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let row = state.player_answer_service.get_by_id(id).await?;
    Ok(Json(PlayerAnswerResponse::from(row)))
}

#[utoipa::path(
    post,
    path = "/player_answers",
    request_body = CreatePlayerAnswerPayload,
    responses(
        (status = 201, description = "Player answer created", body = IdResponse),
        (status = 400, description = "Invalid payload or reference"),
        (status = 409, description = "Player has already answered this question")
    )
)]
#[axum::debug_handler]
pub async fn create_player_answer(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePlayerAnswerPayload>,
) -> Result<impl IntoResponse> {
    let id = state.player_answer_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(IdResponse::from(id))))
}

#[utoipa::path(
    put,
    path = "/player_answers/{id}",
    params(
        ("id" = i32, Path, description = "Player answer ID")
    ),
    request_body = UpdatePlayerAnswerPayload,
    responses(
        (status = 200, description = "Player answer replaced", body = PlayerAnswerResponse),
        (status = 400, description = "Invalid payload or reference"),
        (status = 404, description = "Player answer not found"),
        (status = 409, description = "Player has already answered this question")
    )
)]
#[axum::debug_handler]
pub async fn replace_player_answer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdatePlayerAnswerPayload>,
) -> Result<impl IntoResponse> {
    let row = state.player_answer_service.replace(id, payload).await?;
    Ok(Json(PlayerAnswerResponse::from(row)))
}

#[utoipa::path(
    patch,
    path = "/player_answers/{id}",
    params(
        ("id" = i32, Path, description = "Player answer ID")
    ),
    request_body = PatchPlayerAnswerPayload,
    responses(
        (status = 200, description = "Player answer updated", body = PlayerAnswerResponse),
        (status = 400, description = "Invalid payload or no field to update"),
        (status = 404, description = "Player answer not found"),
        (status = 409, description = "Player has already answered this question")
    )
)]
#[axum::debug_handler]
pub async fn patch_player_answer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<PatchPlayerAnswerPayload>,
) -> Result<impl IntoResponse> {
    let row = state.player_answer_service.patch(id, payload).await?;
    Ok(Json(PlayerAnswerResponse::from(row)))
}

#[utoipa::path(
    delete,
    path = "/player_answers/{id}",
    params(
        ("id" = i32, Path, description = "Player answer ID")
    ),
    responses(
        (status = 200, description = "Player answer deleted", body = IdResponse),
        (status = 400, description = "Player answer is still referenced"),
        (status = 404, description = "Player answer not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_player_answer(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let id = state.player_answer_service.delete(id).await?;
    Ok(Json(IdResponse::from(id)))
}
