pub mod answer_alternative;
pub mod player_answer;
pub mod question;
pub mod quiz;
pub mod session;
pub mod session_player;
pub mod session_scoreboard;
pub mod user;
