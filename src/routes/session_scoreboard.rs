use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::{
        common::{IdResponse, ListQuery},
        session_scoreboard_dto::{
            CreateSessionScoreboardPayload, PatchSessionScoreboardPayload,
            SessionScoreboardResponse, UpdateSessionScoreboardPayload,
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
    path = "/session_scoreboards",
    params(ListQuery),
    responses(
        (status = 200, description = "Scoreboard entries ordered by id", body = [SessionScoreboardResponse])
    )
)]
#[axum::debug_handler]
pub async fn list_session_scoreboards(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse> {
    let rows = state
        .session_scoreboard_service
        .list(query.limit_or(state.list_limit))
        .await?;
    Ok(Json(rows.into_iter().map(SessionScoreboardResponse::from).collect::<Vec<_>>()))
}

#[utoipa::path(
    get,
    path = "/session_scoreboards/{id}",
    params(
        ("id" = i32, Path, description = "Scoreboard entry ID")
    ),
    responses(
        (status = 200, description = "Scoreboard entry found", body = SessionScoreboardResponse),
        (status = 404, description = "Scoreboard entry not found")
    )
)]
#[axum::debug_handler]
pub async fn get_session_scoreboard(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let row = state.session_scoreboard_service.get_by_id(id).await?;
    Ok(Json(SessionScoreboardResponse::from(row)))
}

#[utoipa::path(
    post,
    path = "/session_scoreboards",
    request_body = CreateSessionScoreboardPayload,
    responses(
        (status = 201, description = "Scoreboard entry created", body = IdResponse),
        (status = 400, description = "Invalid payload or reference"),
        (status = 409, description = "Player already has a scoreboard entry in this session")
    )
)]
#[axum::debug_handler]
pub async fn create_session_scoreboard(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateSessionScoreboardPayload>,
) -> Result<impl IntoResponse> {
    let id = state.session_scoreboard_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(IdResponse::from(id))))
}

#[utoipa::path(
    put,
    path = "/session_scoreboards/{id}",
    params(
        ("id" = i32, Path, description = "Scoreboard entry ID")
    ),
    request_body = UpdateSessionScoreboardPayload,
    responses(
        (status = 200, description = "Scoreboard entry replaced", body = SessionScoreboardResponse),
        (status = 400, description = "Invalid payload or reference"),
        (status = 404, description = "Scoreboard entry not found"),
        (status = 409, description = "Player already has a scoreboard entry in this session")
    )
)]
#[axum::debug_handler]
pub async fn replace_session_scoreboard(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateSessionScoreboardPayload>,
) -> Result<impl IntoResponse> {
    let row = state.session_scoreboard_service.replace(id, payload).await?;
    Ok(Json(SessionScoreboardResponse::from(row)))
}

#[utoipa::path(
    patch,
    path = "/session_scoreboards/{id}",
    params(
        ("id" = i32, Path, description = "Scoreboard entry ID")
    ),
    request_body = PatchSessionScoreboardPayload,
    responses(
        (status = 200, description = "Scoreboard entry updated", body = SessionScoreboardResponse),
        (status = 400, description = "Invalid payload or no field to update"),
        (status = 404, description = "Scoreboard entry not found"),
        (status = 409, description = "Player already has a scoreboard entry in this session")
    )
)]
#[axum::debug_handler]
pub async fn patch_session_scoreboard(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<PatchSessionScoreboardPayload>,
) -> Result<impl IntoResponse> {
    let row = state.session_scoreboard_service.patch(id, payload).await?;
    Ok(Json(SessionScoreboardResponse::from(row)))
}

#[utoipa::path(
    delete,
    path = "/session_scoreboards/{id}",
    params(
        ("id" = i32, Path, description = "Scoreboard entry ID")
    ),
    responses(
        (status = 200, description = "Scoreboard entry deleted", body = IdResponse),
        (status = 400, description = "Scoreboard entry is still referenced"),
        (status = 404, description = "Scoreboard entry not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_session_scoreboard(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let id = state.session_scoreboard_service.delete(id).await?;
    Ok(Json(IdResponse::from(id)))
}
