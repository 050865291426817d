use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};

use crate::{
    dto::{
        common::{IdResponse, ListQuery},
        player_answer_dto::PlayerAnswerResponse,
        session_player_dto::{
            CreateSessionPlayerPayload, PatchSessionPlayerPayload, SessionPlayerResponse,
            UpdateSessionPlayerPayload,
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
    path = "/session_players",
    params(ListQuery),
    responses(
        (status = 200, description = "Players ordered by id", body = [SessionPlayerResponse])
    )
)]
#[axum::debug_handler]
pub async fn list_session_players(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Result<impl IntoResponse> {
    let rows = state
        .session_player_service
        .list(query.limit_or(state.list_limit))
        .await?;
    Ok(Json(rows.into_iter().map(SessionPlayerResponse::from).collect::<Vec<_>>()))
}

#[utoipa::path(
    get,
    path = "/session_players/{id}",
    params(
        ("id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Player found", body = SessionPlayerResponse),
        (status = 404, description = "Player not found")
    )
)]
#[axum::debug_handler]
pub async fn get_session_player(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let row = state.session_player_service.get_by_id(id).await?;
    Ok(Json(SessionPlayerResponse::from(row)))
}

#[utoipa::path(
    get,
    path = "/session_players/{id}/answers",
    params(
        ("id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Answers given by the player", body = [PlayerAnswerResponse]),
        (status = 404, description = "Player not found")
    )
)]
#[axum::debug_handler]
pub async fn list_player_answers_by_player(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let answers = state.player_answer_service.list_for_player(id).await?;
    Ok(Json(
        answers
            .into_iter()
            .map(PlayerAnswerResponse::from)
            .collect::<Vec<_>>(),
    ))
}

#[utoipa::path(
    get,
    path = "/session_players/{id}/answers/{question_id}",
    params(
        ("id" = i32, Path, description = "Player ID"),
        ("question_id" = i32, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "The player's answer to the question", body = PlayerAnswerResponse),
        (status = 404, description = "Player has not answered this question")
    )
)]
#[axum::debug_handler]
pub async fn get_player_answer_for_question(
    State(state): State<AppState>,
    Path((id, question_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse> {
    let answer = state
        .player_answer_service
        .get_for_question(id, question_id)
        .await?;
    Ok(Json(PlayerAnswerResponse::from(answer)))
}

#[utoipa::path(
    post,
    path = "/session_players",
    request_body = CreateSessionPlayerPayload,
    responses(
        (status = 201, description = "Player created", body = IdResponse),
        (status = 400, description = "Invalid payload or reference"),
        (status = 409, description = "Display name already taken in this session")
    )
)]
#[axum::debug_handler]
pub async fn create_session_player(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateSessionPlayerPayload>,
) -> Result<impl IntoResponse> {
    let id = state.session_player_service.create(payload).await?;
    Ok((StatusCode::CREATED, Json(IdResponse::from(id))))
}

#[utoipa::path(
    put,
    path = "/session_players/{id}",
    params(
        ("id" = i32, Path, description = "Player ID")
    ),
    request_body = UpdateSessionPlayerPayload,
    responses(
        (status = 200, description = "Player replaced", body = SessionPlayerResponse),
        (status = 400, description = "Invalid payload or reference"),
        (status = 404, description = "Player not found"),
        (status = 409, description = "Display name already taken in this session")
    )
)]
#[axum::debug_handler]
pub async fn replace_session_player(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateSessionPlayerPayload>,
) -> Result<impl IntoResponse> {
    let row = state.session_player_service.replace(id, payload).await?;
    Ok(Json(SessionPlayerResponse::from(row)))
}

#[utoipa::path(
    patch,
    path = "/session_players/{id}",
    params(
        ("id" = i32, Path, description = "Player ID")
    ),
    request_body = PatchSessionPlayerPayload,
    responses(
        (status = 200, description = "Player updated", body = SessionPlayerResponse),
        (status = 400, description = "Invalid payload or no field to update"),
        (status = 404, description = "Player not found"),
        (status = 409, description = "Display name already taken in this session")
    )
)]
#[axum::debug_handler]
pub async fn patch_session_player(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<PatchSessionPlayerPayload>,
) -> Result<impl IntoResponse> {
    let row = state.session_player_service.patch(id, payload).await?;
    Ok(Json(SessionPlayerResponse::from(row)))
}

#[utoipa::path(
    delete,
    path = "/session_players/{id}",
    params(
        ("id" = i32, Path, description = "Player ID")
    ),
    responses(
        (status = 200, description = "Player deleted", body = IdResponse),
        (status = 400, description = "Player is still referenced"),
        (status = 404, description = "Player not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_session_player(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse> {
    let id = state.session_player_service.delete(id).await?;
    Ok(Json(IdResponse::from(id)))
}
