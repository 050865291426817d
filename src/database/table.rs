//! The closed set of tables the API reads and writes.
//!
//! Every identifier that ends up in SQL text comes from here; request data is
//! only ever bound as a parameter.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Users,
    Quizzes,
    Questions,
    AnswerAlternatives,
    Sessions,
    SessionPlayers,
    PlayerAnswers,
    SessionScoreboards,
}

impl Table {
    pub const ALL: [Table; 8] = [
        Table::Users,
        Table::Quizzes,
        Table::Questions,
        Table::AnswerAlternatives,
        Table::Sessions,
        Table::SessionPlayers,
        Table::PlayerAnswers,
        Table::SessionScoreboards,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Table::Users => "users",
            Table::Quizzes => "quizzes",
            Table::Questions => "questions",
            Table::AnswerAlternatives => "answer_alternatives",
            Table::Sessions => "sessions",
            Table::SessionPlayers => "session_players",
            Table::PlayerAnswers => "player_answers",
            Table::SessionScoreboards => "session_scoreboards",
        }
    }

    /// Human-readable singular used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Table::Users => "User",
            Table::Quizzes => "Quiz",
            Table::Questions => "Question",
            Table::AnswerAlternatives => "Answer alternative",
            Table::Sessions => "Session",
            Table::SessionPlayers => "Session player",
            Table::PlayerAnswers => "Player answer",
            Table::SessionScoreboards => "Session scoreboard",
        }
    }

    pub fn primary_key(self) -> &'static str {
        "id"
    }

    /// Columns returned by reads, in response order. Secrets are never listed.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            Table::Users => &[
                "id",
                "user_name",
                "email",
                "registration_date",
                "user_status",
                "birth_date",
            ],
            Table::Quizzes => &[
                "id",
                "quiz_creator_id",
                "quiz_title",
                "quiz_description",
                "intro_image",
                "created_at",
                "updated_at",
                "is_public",
            ],
            Table::Questions => &[
                "id",
                "quiz_id",
                "question_text",
                "question_order",
                "time_limit",
                "points",
                "question_type",
                "image",
            ],
            Table::AnswerAlternatives => &[
                "id",
                "question_id",
                "answer_text",
                "is_correct",
                "answer_icon",
                "answer_order",
            ],
            Table::Sessions => &[
                "id",
                "session_name",
                "host_user_id",
                "active_quiz",
                "qr_code_id",
                "session_status",
                "started_at",
                "ended_at",
                "current_question_id",
                "session_code",
            ],
            Table::SessionPlayers => &[
                "id",
                "session_id",
                "display_name",
                "user_id",
                "joined_at",
                "player_points",
            ],
            Table::PlayerAnswers => &[
                "id",
                "player_id",
                "session_id",
                "question_id",
                "answer_id",
                "response_time",
                "points_earned",
                "is_correct",
            ],
            Table::SessionScoreboards => &[
                "id",
                "session_id",
                "player_id",
                "total_score",
                "correct_answers",
                "rank",
            ],
        }
    }

    /// Columns a partial update may assign.
    pub fn is_writable(self, column: &str) -> bool {
        if column == self.primary_key() {
            return false;
        }
        match self {
            Table::Users if column == "password_hash" => true,
            _ => self.columns().contains(&column),
        }
    }

    pub fn quoted_name(self) -> String {
        quote_ident(self.name())
    }

    pub fn select_list(self) -> String {
        self.columns()
            .iter()
            .map(|c| quote_ident(c))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

pub fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}
