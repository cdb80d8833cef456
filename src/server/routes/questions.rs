use std::collections::BTreeMap;

use axum::{
    extract::State,
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;
use sqlx::SqlitePool;

use super::{categories_by_id, requested_page, success, ApiResponse, Success};
use crate::{
    db::{
        queries::{categories, questions},
        NewQuestion, Question,
    },
    pagination::{paginate, Page, PageQuery},
    server::{
        app::AppState,
        deserializers::QuestionsBody,
        error::ApiError,
        extract::{Json as JsonBody, Path, Query},
    },
    telemetry::{QUESTIONS_CREATED, QUESTIONS_DELETED},
};

#[derive(Serialize)]
struct QuestionsPage {
    questions: Vec<Question>,
    total_questions: usize,
    current_category: Option<i64>,
    categories: BTreeMap<i64, String>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum QuestionsPost {
    Search {
        questions: Vec<Question>,
        total_questions: usize,
        current_category: Option<i64>,
    },
    Created {
        created: i64,
        questions: Vec<Question>,
        total_questions: usize,
    },
}

#[derive(Serialize)]
struct Deleted {
    deleted: i64,
    questions: Vec<Question>,
    total_questions: usize,
}

async fn get_questions(
    State(pool): State<SqlitePool>,
    Query(query): Query<PageQuery>,
) -> ApiResponse<Json<Success<QuestionsPage>>> {
    let page = requested_page(&query)?;
    let selection = questions::get_all_questions(&pool).await?;
    let current = paginate(&selection, page);
    if current.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(success(QuestionsPage {
        questions: current,
        total_questions: selection.len(),
        current_category: None,
        categories: categories_by_id(categories::get_all_categories(&pool).await?),
    }))
}

async fn create_or_search(
    State(pool): State<SqlitePool>,
    Query(query): Query<PageQuery>,
    JsonBody(body): JsonBody<QuestionsBody>,
) -> ApiResponse<Json<Success<QuestionsPost>>> {
    let page = requested_page(&query)?;
    let post = match body.search_term() {
        Some(term) => search(&pool, term, page).await?,
        None => create(&pool, &body, page).await?,
    };
    Ok(success(post))
}

async fn search(pool: &SqlitePool, term: &str, page: Page) -> ApiResponse<QuestionsPost> {
    let found = questions::search_questions(pool, term)
        .await
        .map_err(ApiError::unprocessable)?;
    tracing::debug!(term, matches = found.len(), "Searched questions");
    Ok(QuestionsPost::Search {
        questions: paginate(&found, page),
        total_questions: found.len(),
        current_category: None,
    })
}

async fn create(pool: &SqlitePool, body: &QuestionsBody, page: Page) -> ApiResponse<QuestionsPost> {
    let difficulty = body
        .difficulty
        .ok_or_else(|| ApiError::Unprocessable("difficulty is required".to_owned()))?;
    // insert and re-list commit together
    let mut tx = pool
        .begin()
        .await
        .map_err(ApiError::unprocessable)?;
    let id = questions::create_question(
        &mut *tx,
        NewQuestion {
            question: body.question.as_deref().unwrap_or_default(),
            answer: body.answer.as_deref().unwrap_or_default(),
            category: body.category,
            difficulty,
        },
    )
    .await
    .map_err(ApiError::unprocessable)?;
    let selection = questions::get_all_questions(&mut *tx)
        .await
        .map_err(ApiError::unprocessable)?;
    tx.commit()
        .await
        .map_err(ApiError::unprocessable)?;
    QUESTIONS_CREATED.inc();
    tracing::info!(id, "Created question");

    Ok(QuestionsPost::Created {
        created: id,
        questions: paginate(&selection, page),
        total_questions: selection.len(),
    })
}

async fn delete_question(
    State(pool): State<SqlitePool>,
    Path(id): Path<i64>,
    Query(query): Query<PageQuery>,
) -> ApiResponse<Json<Success<Deleted>>> {
    let page = requested_page(&query)?;
    let mut tx = pool
        .begin()
        .await
        .map_err(ApiError::unprocessable)?;
    questions::delete_question(&mut *tx, id)
        .await
        .map_err(ApiError::unprocessable)?;
    let selection = questions::get_all_questions(&mut *tx)
        .await
        .map_err(ApiError::unprocessable)?;
    tx.commit()
        .await
        .map_err(ApiError::unprocessable)?;
    QUESTIONS_DELETED.inc();
    tracing::info!(id, "Deleted question");

    Ok(success(Deleted {
        deleted: id,
        questions: paginate(&selection, page),
        total_questions: selection.len(),
    }))
}

pub fn questions_router(state: AppState) -> Router {
    Router::new()
        .route("/api/questions", get(get_questions).post(create_or_search))
        .route("/api/questions/{id}", delete(delete_question))
        .with_state(state)
}
