pub mod answer_alternative_service;
pub mod player_answer_service;
pub mod question_service;
pub mod quiz_service;
pub mod session_player_service;
pub mod session_scoreboard_service;
pub mod session_service;
pub mod user_service;
