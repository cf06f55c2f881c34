mod common;

use axum::http::StatusCode;
use common::{get, post_json, seeded_app};
use serde_json::json;

#[tokio::test]
async fn quiz_in_category() {
    let app = seeded_app().await;
    let request = json!({
        "previous_questions": [2, 3],
        "quiz_category": {"id": 5, "type": "Entertainment"}
    });
    let (status, body) = post_json(&app, "/quizzes", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    let id = body["question"]["id"].as_i64().unwrap();
    assert!(id == 4 || id == 22, "unexpected question {id}");
    assert_eq!(body["question"]["category"], 5);
}

#[tokio::test]
async fn quiz_across_all_categories() {
    let app = seeded_app().await;
    let previous: Vec<i64> = (1..=21).collect();
    let request = json!({
        "previous_questions": previous,
        "quiz_category": {"id": 0, "type": "click"}
    });
    let (status, body) = post_json(&app, "/quizzes", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["id"], 22);
}

#[tokio::test]
async fn quiz_exhausted_category() {
    let app = seeded_app().await;
    let request = json!({
        "previous_questions": [16, 17, 18, 20],
        "quiz_category": {"id": 1, "type": "Science"}
    });
    let (status, body) = post_json(&app, "/quizzes", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert!(body["question"].is_null());
}

#[tokio::test]
async fn quiz_unknown_category_as_string() {
    let app = seeded_app().await;
    let request = json!({
        "previous_questions": [6],
        "quiz_category": {"type": "2022", "id": "100000000"}
    });
    let (status, body) = post_json(&app, "/quizzes", request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn quiz_without_category() {
    let app = seeded_app().await;
    let (status, body) = post_json(&app, "/quizzes", json!({"previous_questions": []})).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "Unprocessable");
}

#[tokio::test]
async fn quiz_draws_are_counted_in_metrics() {
    let app = seeded_app().await;
    let request = json!({"previous_questions": [], "quiz_category": {"id": 3}});
    let (status, _) = post_json(&app, "/quizzes", request).await;
    assert_eq!(status, StatusCode::OK);

    let (status, text) = common::get_text(&app, "/metrics").await;
    assert_eq!(status, StatusCode::OK);
    assert!(text.contains("trivia_quiz_draws_total{category=\"3\"}"));
}

#[tokio::test]
async fn quizzes_wrong_method() {
    let app = seeded_app().await;
    let (status, body) = get(&app, "/quizzes").await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn quiz_with_long_history() {
    let app = seeded_app().await;
    let mut previous: Vec<i64> = (1000..40000).collect();
    previous.extend(1..=21);
    let request = json!({
        "previous_questions": previous,
        "quiz_category": {"id": 0, "type": "click"}
    });
    let (status, body) = post_json(&app, "/quizzes", request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["question"]["id"], 22);
}
