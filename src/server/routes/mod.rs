mod categories;
mod questions;
mod quizzes;

use std::collections::BTreeMap;

use axum::Json;
use serde::Serialize;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

pub use super::error::ApiResponse;
use super::error::ApiError;
use crate::db::Category;
use crate::pagination::{Page, PageQuery};

#[derive(Serialize)]
pub struct Success<T> {
    success: bool,
    #[serde(flatten)]
    body: T,
}

pub fn success<T: Serialize>(body: T) -> Json<Success<T>> {
    Json(Success {
        success: true,
        body,
    })
}

fn requested_page(query: &PageQuery) -> ApiResponse<Page> {
    query
        .page()
        .ok_or_else(|| ApiError::BadRequest("page must be a positive integer".to_owned()))
}

fn categories_by_id(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.label)).collect()
}
