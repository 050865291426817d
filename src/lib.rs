pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod utils;

use crate::services::{
    answer_alternative_service::AnswerAlternativeService,
    player_answer_service::PlayerAnswerService, question_service::QuestionService,
    quiz_service::QuizService, session_player_service::SessionPlayerService,
    session_scoreboard_service::SessionScoreboardService, session_service::SessionService,
    user_service::UserService,
};
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    /// Rows returned by a list endpoint when the request names no limit.
    pub list_limit: i64,
    pub user_service: UserService,
    pub quiz_service: QuizService,
    pub question_service: QuestionService,
    pub answer_alternative_service: AnswerAlternativeService,
    pub session_service: SessionService,
    pub session_player_service: SessionPlayerService,
    pub player_answer_service: PlayerAnswerService,
    pub session_scoreboard_service: SessionScoreboardService,
}

impl AppState {
    pub fn new(pool: PgPool, list_limit: i64) -> Self {
        Self {
            list_limit,
            user_service: UserService::new(pool.clone()),
            quiz_service: QuizService::new(pool.clone()),
            question_service: QuestionService::new(pool.clone()),
            answer_alternative_service: AnswerAlternativeService::new(pool.clone()),
            session_service: SessionService::new(pool.clone()),
            session_player_service: SessionPlayerService::new(pool.clone()),
            player_answer_service: PlayerAnswerService::new(pool.clone()),
            session_scoreboard_service: SessionScoreboardService::new(pool),
        }
    }

    /// Builds the state from the process-wide configuration.
    pub fn from_config(pool: PgPool) -> Self {
        Self::new(pool, crate::config::get_config().list_limit)
    }
}
