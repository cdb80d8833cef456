use serde::{Deserialize, Serialize};
use sqlx::{FromRow, SqliteExecutor, SqlitePool};

use crate::db::{StoreError, StoreResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: Option<i64>,
    pub difficulty: i64,
}

#[derive(Debug, Clone, Copy)]
pub struct NewQuestion<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub category: Option<i64>,
    pub difficulty: i64,
}

pub async fn get_all_questions<'e>(
    executor: impl SqliteExecutor<'e>,
) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
SELECT id, question, answer, category, difficulty
FROM questions
ORDER BY id
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_questions_for_category(
    pool: &SqlitePool,
    category: i64,
) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
SELECT id, question, answer, category, difficulty
FROM questions
WHERE questions.category = ?1
ORDER BY id
        "#,
    )
    .bind(category)
    .fetch_all(pool)
    .await
}

/// Case-insensitive substring match on the question text, folding every
/// Unicode letter rather than only the ASCII ones SQLite's `LIKE` folds.
pub async fn search_questions(pool: &SqlitePool, term: &str) -> sqlx::Result<Vec<Question>> {
    let needle = term.to_lowercase();
    let mut found = get_all_questions(pool).await?;
    found.retain(|q| q.question.to_lowercase().contains(&needle));
    Ok(found)
}

pub async fn get_question_by_id(pool: &SqlitePool, id: i64) -> StoreResult<Question> {
    sqlx::query_as::<_, Question>(
        r#"
SELECT id, question, answer, category, difficulty
FROM questions
WHERE questions.id = ?1
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(StoreError::NotFound)
}

pub async fn create_question<'e>(
    executor: impl SqliteExecutor<'e>,
    new: NewQuestion<'_>,
) -> StoreResult<i64> {
    if new.question.trim().is_empty() {
        return Err(StoreError::EmptyField("question"));
    }
    if new.answer.trim().is_empty() {
        return Err(StoreError::EmptyField("answer"));
    }

    let id = sqlx::query(
        r#"
INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(new.question)
    .bind(new.answer)
    .bind(new.category)
    .bind(new.difficulty)
    .execute(executor)
    .await?
    .last_insert_rowid();

    Ok(id)
}

pub async fn delete_question<'e>(executor: impl SqliteExecutor<'e>, id: i64) -> StoreResult<()> {
    let deleted = sqlx::query(
        r#"
DELETE FROM questions WHERE questions.id = ?1
        "#,
    )
    .bind(id)
    .execute(executor)
    .await?
    .rows_affected();

    if deleted == 0 {
        return Err(StoreError::NotFound);
    }
    Ok(())
}

pub async fn import_questions(pool: &SqlitePool, questions: Vec<Question>) -> sqlx::Result<()> {
    let mut tx = pool.begin().await?;
    for question in questions {
        sqlx::query(
            r#"
INSERT INTO questions (id, question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4, ?5)
ON CONFLICT (id) DO UPDATE SET
    question = excluded.question,
    answer = excluded.answer,
    category = excluded.category,
    difficulty = excluded.difficulty
            "#,
        )
        .bind(question.id)
        .bind(question.question)
        .bind(question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await
}
