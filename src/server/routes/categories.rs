use axum::{
    extract::State,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;
use std::collections::BTreeMap;

use crate::{
    db::{
        queries::{
            categories::{get_all_categories, get_category},
            questions::{count_questions, get_questions_page},
        },
        Question, QuestionFilter,
    },
    server::{
        app::AppState,
        error::{ApiError, ApiPath, ApiQuery, ApiResponse},
    },
};

use super::{category_map, PageQuery};

#[derive(Serialize)]
struct CategoriesBody {
    success: bool,
    categories: BTreeMap<i64, String>,
    total_categories: usize,
}

#[derive(Serialize)]
struct CategoryQuestionsBody {
    success: bool,
    questions: Vec<Question>,
    total_questions: i64,
    current_category: String,
}

async fn get_categories(State(pool): State<SqlitePool>) -> ApiResponse<Json<CategoriesBody>> {
    let categories = get_all_categories(&pool).await?;
    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(Json(CategoriesBody {
        success: true,
        total_categories: categories.len(),
        categories: category_map(categories),
    }))
}

async fn questions_in_category(
    State(pool): State<SqlitePool>,
    ApiPath(id): ApiPath<i64>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> ApiResponse<Json<CategoryQuestionsBody>> {
    let page = query.page()?;
    let category = get_category(&pool, id).await?;

    let filter = QuestionFilter::Category(category.id);
    let total_questions = count_questions(&pool, &filter).await?;
    if !page.exists_for(total_questions) {
        return Err(ApiError::BadRequest);
    }
    let questions = get_questions_page(&pool, &filter, page).await?;

    Ok(Json(CategoryQuestionsBody {
        success: true,
        questions,
        total_questions,
        current_category: category.kind,
    }))
}

pub fn category_router() -> Router<AppState> {
    Router::new()
        .route("/categories", get(get_categories))
        .route("/categories/{id}/questions", get(questions_in_category))
}
