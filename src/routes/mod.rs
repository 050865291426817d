pub mod answer_alternative;
pub mod health;
pub mod player_answer;
pub mod question;
pub mod quiz;
pub mod session;
pub mod session_player;
pub mod session_scoreboard;
pub mod user;

use axum::{response::IntoResponse, routing::get, Json, Router};
use utoipa::OpenApi;

use crate::AppState;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        user::list_users,
        user::get_user,
        user::create_user,
        user::replace_user,
        user::patch_user,
        user::delete_user,
        quiz::list_quizzes,
        quiz::get_quiz,
        quiz::list_quiz_questions,
        quiz::create_quiz,
        quiz::replace_quiz,
        quiz::patch_quiz,
        quiz::delete_quiz,
        question::list_questions,
        question::get_question,
        question::list_question_answer_alternatives,
        question::create_question,
        question::replace_question,
        question::patch_question,
        question::delete_question,
        answer_alternative::list_answer_alternatives,
        answer_alternative::get_answer_alternative,
        answer_alternative::create_answer_alternative,
        answer_alternative::replace_answer_alternative,
        answer_alternative::patch_answer_alternative,
        answer_alternative::delete_answer_alternative,
        session::list_sessions,
        session::get_session,
        session::get_session_by_code,
        session::list_players_in_session,
        session::get_scoreboard_for_session,
        session::create_session,
        session::replace_session,
        session::patch_session,
        session::delete_session,
        session_player::list_session_players,
        session_player::get_session_player,
        session_player::list_player_answers_by_player,
        session_player::get_player_answer_for_question,
        session_player::create_session_player,
        session_player::replace_session_player,
        session_player::patch_session_player,
        session_player::delete_session_player,
        player_answer::list_player_answers,
        player_answer::get_player_answer,
        player_answer::create_player_answer,
        player_answer::replace_player_answer,
        player_answer::patch_player_answer,
        player_answer::delete_player_answer,
        session_scoreboard::list_session_scoreboards,
        session_scoreboard::get_session_scoreboard,
        session_scoreboard::create_session_scoreboard,
        session_scoreboard::replace_session_scoreboard,
        session_scoreboard::patch_session_scoreboard,
        session_scoreboard::delete_session_scoreboard,
    ),
    tags((name = "quiz-backend", description = "Quiz platform CRUD API"))
)]
pub struct ApiDoc;

pub async fn openapi_json() -> impl IntoResponse {
    Json(ApiDoc::openapi())
}

/// Every resource route, still waiting for its state.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .route("/users", get(user::list_users).post(user::create_user))
        .route(
            "/users/:id",
            get(user::get_user)
                .put(user::replace_user)
                .patch(user::patch_user)
                .delete(user::delete_user),
        )
        .route("/quizzes", get(quiz::list_quizzes).post(quiz::create_quiz))
        .route(
            "/quizzes/:id",
            get(quiz::get_quiz)
                .put(quiz::replace_quiz)
                .patch(quiz::patch_quiz)
                .delete(quiz::delete_quiz),
        )
        .route("/quizzes/:id/questions", get(quiz::list_quiz_questions))
        .route(
            "/questions",
            get(question::list_questions).post(question::create_question),
        )
        .route(
            "/questions/:id",
            get(question::get_question)
                .put(question::replace_question)
                .patch(question::patch_question)
                .delete(question::delete_question),
        )
        .route(
            "/questions/:id/answer_alternatives",
            get(question::list_question_answer_alternatives),
        )
        .route(
            "/answer_alternatives",
            get(answer_alternative::list_answer_alternatives)
                .post(answer_alternative::create_answer_alternative),
        )
        .route(
            "/answer_alternatives/:id",
            get(answer_alternative::get_answer_alternative)
                .put(answer_alternative::replace_answer_alternative)
                .patch(answer_alternative::patch_answer_alternative)
                .delete(answer_alternative::delete_answer_alternative),
        )
        .route(
            "/sessions",
            get(session::list_sessions).post(session::create_session),
        )
        .route(
            "/sessions/:id",
            get(session::get_session)
                .put(session::replace_session)
                .patch(session::patch_session)
                .delete(session::delete_session),
        )
        .route("/sessions/code/:code", get(session::get_session_by_code))
        .route(
            "/sessions/:id/players",
            get(session::list_players_in_session),
        )
        .route(
            "/sessions/:id/scoreboard",
            get(session::get_scoreboard_for_session),
        )
        .route(
            "/session_players",
            get(session_player::list_session_players).post(session_player::create_session_player),
        )
        .route(
            "/session_players/:id",
            get(session_player::get_session_player)
                .put(session_player::replace_session_player)
                .patch(session_player::patch_session_player)
                .delete(session_player::delete_session_player),
        )
        .route(
            "/session_players/:id/answers",
            get(session_player::list_player_answers_by_player),
        )
        .route(
            "/session_players/:id/answers/:question_id",
            get(session_player::get_player_answer_for_question),
        )
        .route(
            "/player_answers",
            get(player_answer::list_player_answers).post(player_answer::create_player_answer),
        )
        .route(
            "/player_answers/:id",
            get(player_answer::get_player_answer)
                .put(player_answer::replace_player_answer)
                .patch(player_answer::patch_player_answer)
                .delete(player_answer::delete_player_answer),
        )
        .route(
            "/session_scoreboards",
            get(session_scoreboard::list_session_scoreboards)
                .post(session_scoreboard::create_session_scoreboard),
        )
        .route(
            "/session_scoreboards/:id",
            get(session_scoreboard::get_session_scoreboard)
                .put(session_scoreboard::replace_session_scoreboard)
                .patch(session_scoreboard::patch_session_scoreboard)
                .delete(session_scoreboard::delete_session_scoreboard),
        )
}

/// The full application with state and HTTP layers applied.
pub fn app(state: AppState) -> Router {
    router()
        .with_state(state)
        .layer(tower_http::cors::CorsLayer::permissive())
        .layer(tower_http::trace::TraceLayer::new_for_http())
}
