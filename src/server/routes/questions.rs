use axum::{
    extract::State,
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use std::collections::BTreeMap;

use crate::{
    db::{
        queries::{
            categories::{get_all_categories, get_category},
            questions::{self, count_questions, get_questions_page},
        },
        NewQuestion, Question, QuestionFilter,
    },
    server::{
        app::AppState,
        deserializers::deserialize_non_blank,
        error::{ApiError, ApiJson, ApiPath, ApiQuery, ApiResponse},
    },
    telemetry::{QUESTIONS_CREATED, QUESTIONS_DELETED},
};

use super::{category_map, PageQuery};

const DIFFICULTIES: std::ops::RangeInclusive<i64> = 1..=5;

#[derive(Deserialize)]
struct CreateQuestion {
    #[serde(default, deserialize_with = "deserialize_non_blank")]
    question: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_blank")]
    answer: Option<String>,
    difficulty: Option<i64>,
    category: Option<i64>,
}

#[derive(Deserialize)]
struct SearchRequest {
    #[serde(default, alias = "searchTerm", deserialize_with = "deserialize_non_blank")]
    search: Option<String>,
}

#[derive(Serialize)]
struct QuestionsBody {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    categories: BTreeMap<i64, String>,
    current_category: Option<String>,
}

#[derive(Serialize)]
struct SearchBody {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    current_category: Option<String>,
}

#[derive(Serialize)]
struct CreatedBody {
    success: bool,
    created: i64,
    total_questions: i64,
}

#[derive(Serialize)]
struct DeletedBody {
    success: bool,
    deleted: i64,
    total_questions: i64,
}

async fn list_questions(
    State(pool): State<SqlitePool>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> ApiResponse<Json<QuestionsBody>> {
    let page = query.page()?;
    let filter = QuestionFilter::All;
    let total_questions = count_questions(&pool, &filter).await?;
    if !page.exists_for(total_questions) {
        tracing::debug!(page = page.number(), total_questions, "Page out of range");
        return Err(ApiError::BadRequest);
    }

    Ok(Json(QuestionsBody {
        success: true,
        questions: get_questions_page(&pool, &filter, page).await?,
        total_questions,
        categories: category_map(get_all_categories(&pool).await?),
        current_category: None,
    }))
}

async fn create_question(
    State(pool): State<SqlitePool>,
    ApiJson(body): ApiJson<CreateQuestion>,
) -> ApiResponse<Json<CreatedBody>> {
    let (Some(question), Some(answer), Some(difficulty), Some(category)) =
        (body.question, body.answer, body.difficulty, body.category)
    else {
        return Err(ApiError::Unprocessable);
    };
    if !DIFFICULTIES.contains(&difficulty) {
        return Err(ApiError::Unprocessable);
    }
    match get_category(&pool, category).await {
        Ok(_) => {}
        Err(sqlx::Error::RowNotFound) => return Err(ApiError::Unprocessable),
        Err(e) => return Err(e.into()),
    }

    let id = questions::create_question(
        &pool,
        NewQuestion {
            question: &question,
            answer: &answer,
            category,
            difficulty,
        },
    )
    .await?;
    QUESTIONS_CREATED.inc();
    tracing::info!(id, category, "Created question");

    Ok(Json(CreatedBody {
        success: true,
        created: id,
        total_questions: count_questions(&pool, &QuestionFilter::All).await?,
    }))
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    ApiPath(id): ApiPath<i64>,
) -> ApiResponse<Json<DeletedBody>> {
    questions::delete_question(&pool, id).await?;
    QUESTIONS_DELETED.inc();
    tracing::info!(id, "Deleted question");

    Ok(Json(DeletedBody {
        success: true,
        deleted: id,
        total_questions: count_questions(&pool, &QuestionFilter::All).await?,
    }))
}

async fn search_questions(
    State(pool): State<SqlitePool>,
    ApiQuery(query): ApiQuery<PageQuery>,
    ApiJson(body): ApiJson<SearchRequest>,
) -> ApiResponse<Json<SearchBody>> {
    let page = query.page()?;
    let term = body.search.ok_or(ApiError::Unprocessable)?;
    let filter = QuestionFilter::Search(term);

    let total_questions = count_questions(&pool, &filter).await?;
    if total_questions == 0 {
        return Err(ApiError::NotFound);
    }
    if !page.exists_for(total_questions) {
        return Err(ApiError::BadRequest);
    }

    Ok(Json(SearchBody {
        success: true,
        questions: get_questions_page(&pool, &filter, page).await?,
        total_questions,
        current_category: None,
    }))
}

pub fn questions_router() -> Router<AppState> {
    Router::new()
        .route("/questions", get(list_questions).post(create_question))
        .route("/questions/{id}", delete(delete_question))
        .route("/questions/search", post(search_questions))
}
