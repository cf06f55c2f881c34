use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_aux::field_attributes::deserialize_number_from_string;
use sqlx::SqlitePool;

use crate::{
    db::{queries::categories::get_category, Question},
    quiz::{self, ALL_CATEGORIES},
    server::{
        app::AppState,
        error::{ApiJson, ApiResponse},
    },
    telemetry::QUIZ_DRAWS,
};

#[derive(Deserialize)]
struct QuizCategory {
    // some clients send the id as a string
    #[serde(deserialize_with = "deserialize_number_from_string")]
    id: i64,
}

#[derive(Deserialize)]
struct QuizRequest {
    #[serde(default)]
    previous_questions: Vec<i64>,
    quiz_category: QuizCategory,
}

#[derive(Serialize)]
struct QuizBody {
    success: bool,
    question: Option<Question>,
}

async fn play_quiz(
    State(pool): State<SqlitePool>,
    ApiJson(body): ApiJson<QuizRequest>,
) -> ApiResponse<Json<QuizBody>> {
    let category = body.quiz_category.id;
    if category != ALL_CATEGORIES {
        get_category(&pool, category).await?;
    }

    let question = quiz::next_question(&pool, category, &body.previous_questions).await?;
    match &question {
        Some(q) => {
            QUIZ_DRAWS
                .with_label_values(&[category.to_string().as_str()])
                .inc();
            tracing::debug!(id = q.id, category, "Drew quiz question");
        }
        None => tracing::debug!(category, "No quiz questions left"),
    }

    Ok(Json(QuizBody {
        success: true,
        question,
    }))
}

pub fn quizzes_router() -> Router<AppState> {
    Router::new().route("/quizzes", post(play_quiz))
}
