use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use rand::Rng;
use serde_json::{json, Value as JsonValue};
use tower::ServiceExt;

use quiz_backend::{
    config::Config,
    database::pool::{connect, run_migrations},
    routes, AppState,
};

async fn setup_app() -> (Router, sqlx::PgPool) {
    dotenvy::dotenv().ok();
    let config = Config::from_env().expect("DATABASE_NAME and DATABASE_PASSWORD must be set");
    let pool = connect(&config).await.expect("pool");
    run_migrations(&pool).await.expect("migrations");

    let app = routes::app(AppState::new(pool.clone(), config.list_limit));
    (app, pool)
}

/// Short random suffix keeping unique columns apart between runs.
fn suffix() -> String {
    format!("{:08x}", rand::thread_rng().gen::<u32>())
}

/// Eight-digit join code unlikely to collide with generated six-digit ones.
fn random_session_code() -> i32 {
    rand::thread_rng().gen_range(10_000_000..=99_999_999)
}

async fn call(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<JsonValue>,
) -> (StatusCode, JsonValue) {
    let builder = Request::builder().method(method).uri(uri);
    let req = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), 1024 * 1024).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null);
    (status, body)
}

async fn post_created(app: &Router, uri: &str, body: JsonValue) -> i64 {
    let (status, created) = call(app, "POST", uri, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "POST {} returned {}", uri, created);
    created["id"].as_i64().unwrap()
}

async fn get_ok(app: &Router, uri: &str) -> JsonValue {
    let (status, body) = call(app, "GET", uri, None).await;
    assert_eq!(status, StatusCode::OK, "GET {} returned {}", uri, body);
    body
}

/// Every key of `expected` is present in `actual` with the same value.
fn assert_stored(actual: &JsonValue, expected: &JsonValue) {
    for (key, value) in expected.as_object().unwrap() {
        assert_eq!(&actual[key], value, "field {} of {}", key, actual);
    }
}

async fn lookup_id(pool: &sqlx::PgPool, sql: &str, name: &str) -> i32 {
    sqlx::query_scalar::<_, i32>(sql)
        .bind(name)
        .fetch_one(pool)
        .await
        .expect("seeded lookup row")
}

async fn user_status(pool: &sqlx::PgPool, name: &str) -> i32 {
    lookup_id(pool, "SELECT id FROM user_statuses WHERE user_status = $1", name).await
}

async fn session_status(pool: &sqlx::PgPool, name: &str) -> i32 {
    lookup_id(pool, "SELECT id FROM session_statuses WHERE status_type = $1", name).await
}

async fn question_type(pool: &sqlx::PgPool, name: &str) -> i32 {
    lookup_id(pool, "SELECT id FROM question_types WHERE question_type = $1", name).await
}

fn user_payload(name: &str, status: i32) -> JsonValue {
    json!({
        "user_name": name,
        "email": format!("{}@example.com", name),
        "password": "correct horse battery",
        "registration_date": "2026-01-15",
        "user_status": status,
        "birth_date": "1990-04-01"
    })
}

async fn create_user(app: &Router, pool: &sqlx::PgPool, name: &str) -> i64 {
    let active = user_status(pool, "active").await;
    post_created(app, "/users", user_payload(name, active)).await
}

async fn create_quiz(app: &Router, pool: &sqlx::PgPool, owner: i64, name: &str) -> i64 {
    let creator_id = seed_creator(pool, owner, name).await;
    post_created(
        app,
        "/quizzes",
        json!({ "quiz_creator_id": creator_id, "quiz_title": "Capitals of Europe" }),
    )
    .await
}

async fn seed_creator(pool: &sqlx::PgPool, owner: i64, name: &str) -> i32 {
    sqlx::query_scalar::<_, i32>(
        "INSERT INTO creators (name, user_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(name)
    .bind(owner as i32)
    .fetch_one(pool)
    .await
    .expect("seed creator")
}

async fn create_question(app: &Router, pool: &sqlx::PgPool, quiz_id: i64, order: i32) -> i64 {
    let multiple_choice = question_type(pool, "multiple_choice").await;
    post_created(
        app,
        "/questions",
        json!({
            "quiz_id": quiz_id,
            "question_text": format!("Question {}", order),
            "question_order": order,
            "time_limit": 20,
            "question_type": multiple_choice
        }),
    )
    .await
}

async fn create_session(app: &Router, pool: &sqlx::PgPool, host: i64) -> i64 {
    let waiting = session_status(pool, "waiting").await;
    post_created(
        app,
        "/sessions",
        json!({
            "session_name": "Friday quiz",
            "host_user_id": host,
            "session_status": waiting
        }),
    )
    .await
}

#[tokio::test]
#[ignore = "requires database"]
async fn user_lifecycle_end_to_end() {
    let (app, pool) = setup_app().await;
    let name = format!("alice_{}", suffix());
    let active = user_status(&pool, "active").await;
    let submitted = user_payload(&name, active);
    let id = post_created(&app, "/users", submitted.clone()).await;

    let before = get_ok(&app, &format!("/users/{}", id)).await;
    assert_eq!(before["id"], id);
    assert_stored(
        &before,
        &json!({
            "user_name": submitted["user_name"],
            "email": submitted["email"],
            "registration_date": submitted["registration_date"],
            "user_status": submitted["user_status"],
            "birth_date": submitted["birth_date"]
        }),
    );
    assert!(before.get("password").is_none());
    assert!(before.get("password_hash").is_none());

    let new_email = format!("{}@example.org", name);
    let (status, _) = call(
        &app,
        "PATCH",
        &format!("/users/{}", id),
        Some(json!({ "email": new_email })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let after = get_ok(&app, &format!("/users/{}", id)).await;
    let mut expected = before.clone();
    expected["email"] = json!(new_email);
    assert_eq!(after, expected);

    let (status, body) = call(&app, "DELETE", &format!("/users/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": id }));

    let (status, body) = call(&app, "GET", &format!("/users/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");

    let (status, _) = call(&app, "DELETE", &format!("/users/{}", id), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn replacing_a_user_rewrites_every_field() {
    let (app, pool) = setup_app().await;
    let id = create_user(&app, &pool, &format!("ivan_{}", suffix())).await;
    let inactive = user_status(&pool, "inactive").await;

    let name = format!("ivan_renamed_{}", suffix());
    let replacement = json!({
        "user_name": name,
        "email": format!("{}@example.net", name),
        "password": "another long secret",
        "registration_date": "2025-12-24",
        "user_status": inactive,
        "birth_date": "1985-07-30"
    });
    let (status, body) =
        call(&app, "PUT", &format!("/users/{}", id), Some(replacement.clone())).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);

    let stored = get_ok(&app, &format!("/users/{}", id)).await;
    let mut expected = replacement;
    expected.as_object_mut().unwrap().remove("password");
    assert_stored(&stored, &expected);
    assert!(stored.get("password_hash").is_none());

    let (status, body) = call(
        &app,
        "PUT",
        &format!("/users/{}", i32::MAX),
        Some(user_payload(&format!("nobody_{}", suffix()), inactive)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
#[ignore = "requires database"]
async fn duplicate_user_is_rejected_without_creating_a_row() {
    let (app, pool) = setup_app().await;
    let name = format!("bob_{}", suffix());
    create_user(&app, &pool, &name).await;

    let active = user_status(&pool, "active").await;
    let mut duplicate = user_payload(&name, active);
    duplicate["email"] = json!(format!("other_{}@example.com", suffix()));
    let (status, body) = call(&app, "POST", "/users", Some(duplicate.clone())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "User name or email already taken");

    let count = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM users WHERE user_name = $1 OR email = $2",
    )
    .bind(&name)
    .bind(duplicate["email"].as_str().unwrap())
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn unknown_reference_is_a_bad_request() {
    let (app, _pool) = setup_app().await;
    let (status, body) = call(
        &app,
        "POST",
        "/users",
        Some(user_payload(&format!("carol_{}", suffix()), i32::MAX)),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid user status reference");
}

#[tokio::test]
#[ignore = "requires database"]
async fn quiz_questions_and_referential_delete() {
    let (app, pool) = setup_app().await;
    let tag = suffix();
    let owner = create_user(&app, &pool, &format!("dave_{}", tag)).await;
    let quiz_id = create_quiz(&app, &pool, owner, &format!("dave_{}", tag)).await;

    let body = get_ok(&app, &format!("/quizzes/{}/questions", quiz_id)).await;
    assert_eq!(body, json!([]));

    let (status, body) = call(&app, "GET", &format!("/quizzes/{}/questions", i32::MAX), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Quiz not found");

    let second = create_question(&app, &pool, quiz_id, 2).await;
    let first = create_question(&app, &pool, quiz_id, 1).await;

    let question = get_ok(&app, &format!("/questions/{}", first)).await;
    assert_stored(
        &question,
        &json!({
            "quiz_id": quiz_id,
            "question_text": "Question 1",
            "question_order": 1,
            "time_limit": 20,
            "points": 100,
            "image": null
        }),
    );

    let listed = get_ok(&app, &format!("/quizzes/{}/questions", quiz_id)).await;
    let ids: Vec<i64> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![first, second]);

    let (status, body) = call(&app, "DELETE", &format!("/quizzes/{}", quiz_id), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Cannot delete quiz: it still has questions or sessions");

    let (status, body) = call(
        &app,
        "PATCH",
        &format!("/quizzes/{}", quiz_id),
        Some(json!({ "quiz_description": "Northern capitals", "is_public": true })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["is_public"], true);
    assert!(body["updated_at"].is_string());

    let (status, _) = call(
        &app,
        "PATCH",
        &format!("/quizzes/{}", quiz_id),
        Some(json!({ "quiz_description": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let stored = get_ok(&app, &format!("/quizzes/{}", quiz_id)).await;
    assert!(stored["quiz_description"].is_null());
    assert_eq!(stored["quiz_title"], "Capitals of Europe");
}

#[tokio::test]
#[ignore = "requires database"]
async fn replacing_quizzes_and_questions() {
    let (app, pool) = setup_app().await;
    let tag = suffix();
    let owner = create_user(&app, &pool, &format!("hana_{}", tag)).await;
    let quiz_id = create_quiz(&app, &pool, owner, &format!("hana_{}", tag)).await;
    let other_creator = seed_creator(&pool, owner, &format!("hana_alt_{}", tag)).await;

    let quiz = json!({
        "quiz_creator_id": other_creator,
        "quiz_title": "Rivers of Africa",
        "quiz_description": "Longest first",
        "intro_image": null,
        "is_public": true
    });
    let (status, _) = call(&app, "PUT", &format!("/quizzes/{}", quiz_id), Some(quiz.clone())).await;
    assert_eq!(status, StatusCode::OK);
    let stored = get_ok(&app, &format!("/quizzes/{}", quiz_id)).await;
    assert_stored(&stored, &quiz);
    assert!(stored["updated_at"].is_string());

    let (status, _) = call(&app, "PUT", &format!("/quizzes/{}", i32::MAX), Some(quiz)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let question_id = create_question(&app, &pool, quiz_id, 1).await;
    let true_false = question_type(&pool, "true_false").await;
    let question = json!({
        "quiz_id": quiz_id,
        "question_text": "The Nile is the longest river.",
        "question_order": 3,
        "time_limit": 15,
        "points": 250,
        "question_type": true_false,
        "image": null
    });
    let (status, _) = call(
        &app,
        "PUT",
        &format!("/questions/{}", question_id),
        Some(question.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let stored = get_ok(&app, &format!("/questions/{}", question_id)).await;
    assert_stored(&stored, &question);

    let (status, body) =
        call(&app, "PUT", &format!("/questions/{}", i32::MAX), Some(question)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Question not found");
}

#[tokio::test]
#[ignore = "requires database"]
async fn answer_alternative_lifecycle() {
    let (app, pool) = setup_app().await;
    let tag = suffix();
    let owner = create_user(&app, &pool, &format!("jon_{}", tag)).await;
    let quiz_id = create_quiz(&app, &pool, owner, &format!("jon_{}", tag)).await;
    let question_id = create_question(&app, &pool, quiz_id, 1).await;

    let body = get_ok(&app, &format!("/questions/{}/answer_alternatives", question_id)).await;
    assert_eq!(body, json!([]));
    let (status, body) = call(
        &app,
        "GET",
        &format!("/questions/{}/answer_alternatives", i32::MAX),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Question not found");

    let oslo = json!({
        "question_id": question_id,
        "answer_text": "Oslo",
        "is_correct": true,
        "answer_icon": null,
        "answer_order": 1
    });
    let oslo_id = post_created(&app, "/answer_alternatives", oslo.clone()).await;
    let bergen_id = post_created(
        &app,
        "/answer_alternatives",
        json!({ "question_id": question_id, "answer_text": "Bergen", "is_correct": false }),
    )
    .await;

    let stored = get_ok(&app, &format!("/answer_alternatives/{}", oslo_id)).await;
    assert_stored(&stored, &oslo);

    let listed = get_ok(&app, &format!("/questions/{}/answer_alternatives", question_id)).await;
    assert_eq!(listed.as_array().unwrap().len(), 2);

    let replacement = json!({
        "question_id": question_id,
        "answer_text": "Trondheim",
        "is_correct": false,
        "answer_icon": null,
        "answer_order": 2
    });
    let (status, _) = call(
        &app,
        "PUT",
        &format!("/answer_alternatives/{}", bergen_id),
        Some(replacement.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let stored = get_ok(&app, &format!("/answer_alternatives/{}", bergen_id)).await;
    assert_stored(&stored, &replacement);

    let (status, _) = call(
        &app,
        "PUT",
        &format!("/answer_alternatives/{}", i32::MAX),
        Some(replacement),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(
        &app,
        "PATCH",
        &format!("/answer_alternatives/{}", bergen_id),
        Some(json!({ "answer_order": null })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let stored = get_ok(&app, &format!("/answer_alternatives/{}", bergen_id)).await;
    assert!(stored["answer_order"].is_null());
    assert_eq!(stored["answer_text"], "Trondheim");

    let (status, body) = call(
        &app,
        "DELETE",
        &format!("/answer_alternatives/{}", bergen_id),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": bergen_id }));

    let listed = get_ok(&app, &format!("/questions/{}/answer_alternatives", question_id)).await;
    assert_eq!(listed[0]["id"], oslo_id);
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn session_join_flow() {
    let (app, pool) = setup_app().await;
    let host = create_user(&app, &pool, &format!("erin_{}", suffix())).await;
    let session_id = create_session(&app, &pool, host).await;

    let session = get_ok(&app, &format!("/sessions/{}", session_id)).await;
    let code = session["session_code"].as_i64().unwrap();
    assert!((100_000..=999_999).contains(&code));
    assert_eq!(session["session_name"], "Friday quiz");
    assert_eq!(session["host_user_id"], host);

    let body = get_ok(&app, &format!("/sessions/code/{}", code)).await;
    assert_eq!(body["id"], session_id);

    let body = get_ok(&app, &format!("/sessions/{}/players", session_id)).await;
    assert_eq!(body, json!([]));

    let join = json!({ "session_id": session_id, "display_name": "frank" });
    let player_id = post_created(&app, "/session_players", join.clone()).await;

    let (status, body) = call(&app, "POST", "/session_players", Some(join)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Display name already taken in this session");

    let player = get_ok(&app, &format!("/session_players/{}", player_id)).await;
    assert_eq!(player["player_points"], 0);
    assert_eq!(player["display_name"], "frank");
    assert!(player["joined_at"].is_string());

    let body = get_ok(&app, &format!("/session_players/{}/answers", player_id)).await;
    assert_eq!(body, json!([]));

    let (status, body) = call(&app, "DELETE", &format!("/sessions/{}", session_id), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Cannot delete session: it still has players, answers or scoreboards"
    );
}

#[tokio::test]
#[ignore = "requires database"]
async fn replacing_sessions_and_players() {
    let (app, pool) = setup_app().await;
    let tag = suffix();
    let host = create_user(&app, &pool, &format!("kim_{}", tag)).await;
    let guest = create_user(&app, &pool, &format!("kim_guest_{}", tag)).await;
    let quiz_id = create_quiz(&app, &pool, host, &format!("kim_{}", tag)).await;
    let question_id = create_question(&app, &pool, quiz_id, 1).await;
    let session_id = create_session(&app, &pool, host).await;
    let running = session_status(&pool, "running").await;

    let session = json!({
        "session_name": "Saturday final",
        "host_user_id": host,
        "active_quiz": quiz_id,
        "qr_code_id": null,
        "session_status": running,
        "started_at": "2026-10-17T18:00:00Z",
        "ended_at": null,
        "current_question_id": question_id,
        "session_code": random_session_code()
    });
    let (status, _) = call(
        &app,
        "PUT",
        &format!("/sessions/{}", session_id),
        Some(session.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let stored = get_ok(&app, &format!("/sessions/{}", session_id)).await;
    assert_stored(&stored, &session);

    let (status, body) = call(&app, "PUT", &format!("/sessions/{}", i32::MAX), Some(session)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Session not found");

    let player_id = post_created(
        &app,
        "/session_players",
        json!({ "session_id": session_id, "display_name": "lena" }),
    )
    .await;
    let player = json!({
        "session_id": session_id,
        "display_name": "lena_k",
        "user_id": guest,
        "joined_at": "2026-10-17T18:01:30Z",
        "player_points": 700
    });
    let (status, _) = call(
        &app,
        "PUT",
        &format!("/session_players/{}", player_id),
        Some(player.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let stored = get_ok(&app, &format!("/session_players/{}", player_id)).await;
    assert_stored(&stored, &player);

    let (status, _) = call(
        &app,
        "PUT",
        &format!("/session_players/{}", i32::MAX),
        Some(player),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn scoreboard_standings_and_updates() {
    let (app, pool) = setup_app().await;
    let host = create_user(&app, &pool, &format!("mia_{}", suffix())).await;
    let session_id = create_session(&app, &pool, host).await;

    let (status, body) =
        call(&app, "GET", &format!("/sessions/{}/scoreboard", i32::MAX), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Session not found");

    let first = post_created(
        &app,
        "/session_players",
        json!({ "session_id": session_id, "display_name": "nils" }),
    )
    .await;
    let second = post_created(
        &app,
        "/session_players",
        json!({ "session_id": session_id, "display_name": "olga" }),
    )
    .await;

    let unranked = post_created(
        &app,
        "/session_scoreboards",
        json!({ "session_id": session_id, "player_id": first, "total_score": 900 }),
    )
    .await;
    let ranked = post_created(
        &app,
        "/session_scoreboards",
        json!({ "session_id": session_id, "player_id": second, "rank": 1 }),
    )
    .await;

    let (status, body) = call(
        &app,
        "POST",
        "/session_scoreboards",
        Some(json!({ "session_id": session_id, "player_id": second })),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(
        body["error"],
        "Player already has a scoreboard entry in this session"
    );

    let standings = get_ok(&app, &format!("/sessions/{}/scoreboard", session_id)).await;
    assert_eq!(standings[0]["id"], ranked);
    assert_eq!(standings[0]["total_score"], 0);
    assert_eq!(standings[0]["correct_answers"], 0);
    assert_eq!(standings[1]["id"], unranked);

    let entry = json!({
        "session_id": session_id,
        "player_id": first,
        "total_score": 1200,
        "correct_answers": 4,
        "rank": 2
    });
    let (status, _) = call(
        &app,
        "PUT",
        &format!("/session_scoreboards/{}", unranked),
        Some(entry.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let stored = get_ok(&app, &format!("/session_scoreboards/{}", unranked)).await;
    assert_stored(&stored, &entry);

    let (status, _) = call(
        &app,
        "PUT",
        &format!("/session_scoreboards/{}", i32::MAX),
        Some(entry),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(
        &app,
        "PATCH",
        &format!("/session_scoreboards/{}", ranked),
        Some(json!({ "rank": null, "total_score": 300 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let stored = get_ok(&app, &format!("/session_scoreboards/{}", ranked)).await;
    assert!(stored["rank"].is_null());
    assert_eq!(stored["total_score"], 300);
    assert_eq!(stored["player_id"], second);

    let standings = get_ok(&app, &format!("/sessions/{}/scoreboard", session_id)).await;
    assert_eq!(standings[0]["id"], unranked);
    assert_eq!(standings[1]["id"], ranked);

    let (status, _) = call(&app, "DELETE", &format!("/session_scoreboards/{}", ranked), None).await;
    assert_eq!(status, StatusCode::OK);
    let standings = get_ok(&app, &format!("/sessions/{}/scoreboard", session_id)).await;
    assert_eq!(standings.as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn player_answer_lifecycle() {
    let (app, pool) = setup_app().await;
    let tag = suffix();
    let host = create_user(&app, &pool, &format!("per_{}", tag)).await;
    let quiz_id = create_quiz(&app, &pool, host, &format!("per_{}", tag)).await;
    let first_question = create_question(&app, &pool, quiz_id, 1).await;
    let second_question = create_question(&app, &pool, quiz_id, 2).await;
    let chosen = post_created(
        &app,
        "/answer_alternatives",
        json!({ "question_id": first_question, "answer_text": "Oslo", "is_correct": true }),
    )
    .await;
    let other = post_created(
        &app,
        "/answer_alternatives",
        json!({ "question_id": first_question, "answer_text": "Bergen", "is_correct": false }),
    )
    .await;
    let session_id = create_session(&app, &pool, host).await;
    let player_id = post_created(
        &app,
        "/session_players",
        json!({ "session_id": session_id, "display_name": "quinn" }),
    )
    .await;

    let answer = json!({
        "player_id": player_id,
        "session_id": session_id,
        "question_id": first_question,
        "answer_id": chosen,
        "response_time": 4200,
        "is_correct": true
    });
    let answer_id = post_created(&app, "/player_answers", answer.clone()).await;

    let stored = get_ok(&app, &format!("/player_answers/{}", answer_id)).await;
    assert_stored(&stored, &answer);
    assert_eq!(stored["points_earned"], 0);

    let body = get_ok(
        &app,
        &format!("/session_players/{}/answers/{}", player_id, first_question),
    )
    .await;
    assert_eq!(body["id"], answer_id);

    let (status, body) = call(
        &app,
        "GET",
        &format!("/session_players/{}/answers/{}", player_id, second_question),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Player answer not found");

    let listed = get_ok(&app, &format!("/session_players/{}/answers", player_id)).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
    let (status, body) = call(
        &app,
        "GET",
        &format!("/session_players/{}/answers", i32::MAX),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Session player not found");

    let (status, body) = call(&app, "POST", "/player_answers", Some(answer)).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"], "Player has already answered this question");

    let replacement = json!({
        "player_id": player_id,
        "session_id": session_id,
        "question_id": first_question,
        "answer_id": other,
        "response_time": 9100,
        "points_earned": 0,
        "is_correct": false
    });
    let (status, _) = call(
        &app,
        "PUT",
        &format!("/player_answers/{}", answer_id),
        Some(replacement.clone()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let stored = get_ok(&app, &format!("/player_answers/{}", answer_id)).await;
    assert_stored(&stored, &replacement);

    let (status, _) = call(
        &app,
        "PUT",
        &format!("/player_answers/{}", i32::MAX),
        Some(replacement),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(
        &app,
        "PATCH",
        &format!("/player_answers/{}", answer_id),
        Some(json!({ "is_correct": null, "points_earned": 50 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let stored = get_ok(&app, &format!("/player_answers/{}", answer_id)).await;
    assert!(stored["is_correct"].is_null());
    assert_eq!(stored["points_earned"], 50);
    assert_eq!(stored["response_time"], 9100);

    let (status, body) =
        call(&app, "DELETE", &format!("/answer_alternatives/{}", other), None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Cannot delete answer alternative: players have chosen it"
    );

    let (status, body) =
        call(&app, "DELETE", &format!("/player_answers/{}", answer_id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": answer_id }));

    let listed = get_ok(&app, &format!("/session_players/{}/answers", player_id)).await;
    assert_eq!(listed, json!([]));
}

#[tokio::test]
#[ignore = "requires database"]
async fn list_honours_limit() {
    let (app, pool) = setup_app().await;
    for _ in 0..3 {
        create_user(&app, &pool, &format!("gina_{}", suffix())).await;
    }

    let body = get_ok(&app, "/users?limit=2").await;
    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    assert!(users[0]["id"].as_i64() < users[1]["id"].as_i64());
}
