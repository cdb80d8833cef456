use std::collections::BTreeMap;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use sqlx::SqlitePool;

use super::{categories_by_id, requested_page, success, ApiResponse, Success};
use crate::{
    db::{
        queries::{categories, questions},
        Category, Question, StoreError,
    },
    pagination::{paginate, PageQuery},
    server::{
        app::AppState,
        error::ApiError,
        extract::{Path, Query},
    },
};

#[derive(Serialize)]
struct CategoriesList {
    categories: BTreeMap<i64, String>,
    total_categories: usize,
}

#[derive(Serialize)]
struct CategoryDetail {
    category: Category,
}

#[derive(Serialize)]
struct CategoryQuestions {
    questions: Vec<Question>,
    total_questions: usize,
    current_category: i64,
}

async fn get_categories(
    State(pool): State<SqlitePool>,
) -> ApiResponse<Json<Success<CategoriesList>>> {
    let categories = categories_by_id(categories::get_all_categories(&pool).await?);
    Ok(success(CategoriesList {
        total_categories: categories.len(),
        categories,
    }))
}

async fn category(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
) -> ApiResponse<Json<Success<CategoryDetail>>> {
    let category = categories::get_category(&pool, id).await?;
    Ok(success(CategoryDetail { category }))
}

async fn category_questions(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> ApiResponse<Json<Success<CategoryQuestions>>> {
    let page = requested_page(&query)?;
    // any store failure on this listing is reported as a missing resource
    categories::get_category(&pool, id)
        .await
        .map_err(not_found)?;
    let selection = questions::get_questions_for_category(&pool, id)
        .await
        .map_err(|e| not_found(StoreError::from(e)))?;

    Ok(success(CategoryQuestions {
        questions: paginate(&selection, page),
        total_questions: selection.len(),
        current_category: id,
    }))
}

fn not_found(error: StoreError) -> ApiError {
    if !matches!(error, StoreError::NotFound) {
        tracing::error!("Failed to list category questions: {error}");
    }
    ApiError::NotFound
}

pub fn category_router(state: AppState) -> Router {
    Router::new()
        .route("/api/categories", get(get_categories))
        .route("/api/categories/{id}", get(category))
        .route("/api/categories/{id}/questions", get(category_questions))
        .with_state(state)
}
