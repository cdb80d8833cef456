use std::collections::HashSet;

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;
use sqlx::SqlitePool;

use super::{success, ApiResponse, Success};
use crate::{
    db::Question,
    quiz::{next_question, CategorySelector},
    server::{
        app::AppState,
        deserializers::{QuizBody, QuizCategory},
        error::ApiError,
        extract::Json as JsonBody,
    },
    telemetry::QUIZ_QUESTIONS_SERVED,
};

#[derive(Serialize)]
struct NextQuestion {
    #[serde(skip_serializing_if = "Option::is_none")]
    question: Option<Question>,
    total_questions: usize,
}

impl TryFrom<Option<QuizCategory>> for CategorySelector {
    type Error = ApiError;

    fn try_from(category: Option<QuizCategory>) -> Result<Self, Self::Error> {
        match category.map(|c| c.id.0) {
            None | Some(0) => Ok(CategorySelector::All),
            Some(id) if id > 0 => Ok(CategorySelector::Category(id)),
            Some(id) => Err(ApiError::BadRequest(format!("invalid quiz category {id}"))),
        }
    }
}

async fn play(
    State(pool): State<SqlitePool>,
    JsonBody(body): JsonBody<QuizBody>,
) -> ApiResponse<Json<Success<NextQuestion>>> {
    let selector = CategorySelector::try_from(body.quiz_category)?;
    let previous: HashSet<i64> = body.previous_questions.iter().map(|id| id.0).collect();

    let pick = next_question(&pool, selector, &previous).await?;
    if pick.question.is_some() {
        QUIZ_QUESTIONS_SERVED
            .with_label_values(&[selector.to_string().as_str()])
            .inc();
    }
    tracing::debug!(%selector, remaining = pick.remaining, "Picked quiz question");

    Ok(success(NextQuestion {
        question: pick.question,
        total_questions: pick.remaining,
    }))
}

pub fn quizzes_router(state: AppState) -> Router {
    Router::new()
        .route("/api/quizzes", post(play))
        .with_state(state)
}
