use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::{
        common::{IdResponse, ListQuery},
        session_dto::{
            CreateSessionPayload, PatchSessionPayload, SessionResponse, UpdateSessionPayload,
        },
        session_player_dto::SessionPlayerResponse,
        session_scoreboard_dto::SessionScoreboardResponse,
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
    path = "/sessions",
    params(ListQuery),
    responses(
        (status = 200, description = "Sessions ordered by id", body = [SessionResponse])
    )
)]
#[axum::debug_handler]
pub async fn list_sessions(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse> {
    let rows = state
        .session_service
        .list(query.limit_or(state.list_limit))
        .await?;
    Ok(Json(rows.into_iter().map(SessionResponse::from).collect::<Vec<_>>()))
}

#[utoipa::path(
    get,
    path = "/sessions/{id}",
    params(
        ("id" = i32, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Session found", body = SessionResponse),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let row = state.session_service.get_by_id(id).await?;
    Ok(Json(SessionResponse::from(row)))
}

/// Resolves the join code a player types in.
#[utoipa::path(
    get,
    path = "/sessions/code/{code}",
    params(
        ("code" = i32, Path, description = "Session join code")
    ),
    responses(
        (status = 200, description = "Session found", body = SessionResponse),
        (status = 404, description = "No session uses this code")
    )
)]
#[axum::debug_handler]
pub async fn get_session_by_code(
    State(state): State<AppState>,
    Path(code): Path<i32>,
) -> Result<impl IntoResponse> {
    let session = state.session_service.get_by_code(code).await?;
    Ok(Json(SessionResponse::from(session)))
}

#[utoipa::path(
    get,
    path = "/sessions/{id}/players",
    params(
        ("id" = i32, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Players in join order", body = [SessionPlayerResponse]),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn list_players_in_session(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let players = state.session_player_service.list_for_session(id).await?;
    Ok(Json(
        players
            .into_iter()
            .map(SessionPlayerResponse::from)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/sessions/{id}/scoreboard",
    params(
        ("id" = i32, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Standings, ranked entries first", body = [SessionScoreboardResponse]),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn get_scoreboard_for_session(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let standings = state.session_scoreboard_service.list_for_session(id).await?;
    Ok(Json(
        standings
            .into_iter()
            .map(SessionScoreboardResponse::from)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    post,
    path = "/sessions",
    request_body = CreateSessionPayload,
    responses(
        (status = 201, description = "Session created", body = IdResponse),
        (status = 400, description = "Invalid payload or reference"),
        (status = 409, description = "Session code already in use")
    )
)]
#[axum::debug_handler]
pub async fn create_session(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateSessionPayload>,
) -> Result<impl IntoResponse> {
    let id = state.session_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(IdResponse::from(id))))
}

#[utoipa::path(
    put,
    path = "/sessions/{id}",
    params(
        ("id" = i32, Path, description = "Session ID")
    ),
    request_body = UpdateSessionPayload,
    responses(
        (status = 200, description = "Session replaced", body = SessionResponse),
        (status = 400, description = "Invalid payload or reference"),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Session code already in use")
    )
)]
#[axum::debug_handler]
pub async fn replace_session(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateSessionPayload>,
) -> Result<impl IntoResponse> {
    let row = state.session_service.replace(id, payload).await?;
    Ok(Json(SessionResponse::from(row)))
}

#[utoipa::path(
    patch,
    path = "/sessions/{id}",
    params(
        ("id" = i32, Path, description = "Session ID")
    ),
    request_body = PatchSessionPayload,
    responses(
        (status = 200, description = "Session updated", body = SessionResponse),
        (status = 400, description = "Invalid payload or no field to update"),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Session code already in use")
    )
)]
#[axum::debug_handler]
pub async fn patch_session(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<PatchSessionPayload>,
) -> Result<impl IntoResponse> {
    let row = state.session_service.patch(id, payload).await?;
    Ok(Json(SessionResponse::from(row)))
}

#[utoipa::path(
    delete,
    path = "/sessions/{id}",
    params(
        ("id" = i32, Path, description = "Session ID")
    ),
    responses(
        (status = 200, description = "Session deleted", body = IdResponse),
        (status = 400, description = "Session still has players, answers or scoreboards"),
        (status = 404, description = "Session not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let id = state.session_service.delete(id).await?;
    Ok(Json(IdResponse::from(id)))
}
