//! Picks the next quiz question out of a candidate pool.

use std::collections::HashSet;
use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use sqlx::SqlitePool;

use crate::db::queries::questions::{get_all_questions, get_questions_for_category};
use crate::db::Question;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategorySelector {
    All,
    Category(i64),
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySelector::All => write!(f, "all"),
            CategorySelector::Category(id) => write!(f, "{id}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizPick {
    pub question: Option<Question>,
    /// Candidates left after removing previous questions, before picking.
    pub remaining: usize,
}

pub fn pick_question<R: Rng + ?Sized>(
    pool: Vec<Question>,
    previous: &HashSet<i64>,
    rng: &mut R,
) -> QuizPick {
    let candidates: Vec<Question> = pool
        .into_iter()
        .filter(|q| !previous.contains(&q.id))
        .collect();
    QuizPick {
        remaining: candidates.len(),
        question: candidates.choose(rng).cloned(),
    }
}

pub async fn next_question(
    pool: &SqlitePool,
    selector: CategorySelector,
    previous: &HashSet<i64>,
) -> sqlx::Result<QuizPick> {
    let candidates = match selector {
        CategorySelector::All => get_all_questions(pool).await?,
        CategorySelector::Category(id) => get_questions_for_category(pool, id).await?,
    };
    Ok(pick_question(candidates, previous, &mut rand::thread_rng()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn questions(ids: &[i64]) -> Vec<Question> {
        ids.iter()
            .map(|id| Question {
                id: *id,
                question: format!("question {id}"),
                answer: format!("answer {id}"),
                category: Some(1),
                difficulty: 1,
            })
            .collect()
    }

    #[test]
    fn returns_the_only_unseen_question() {
        let mut rng = StdRng::seed_from_u64(7);
        let previous = HashSet::from([20, 22]);
        let pick = pick_question(questions(&[20, 21, 22]), &previous, &mut rng);
        assert_eq!(pick.remaining, 1);
        assert_eq!(pick.question.map(|q| q.id), Some(21));
    }

    #[test]
    fn exhausted_pool_is_empty_pick() {
        let mut rng = StdRng::seed_from_u64(7);
        let previous = HashSet::from([20, 21, 22]);
        let pick = pick_question(questions(&[20, 21, 22]), &previous, &mut rng);
        assert_eq!(pick.remaining, 0);
        assert!(pick.question.is_none());
    }

    #[test]
    fn never_returns_previous_questions() {
        let mut rng = StdRng::seed_from_u64(42);
        let previous = HashSet::from([1, 3, 5, 7, 9]);
        for _ in 0..200 {
            let pick = pick_question(questions(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]), &previous, &mut rng);
            assert_eq!(pick.remaining, 5);
            let id = pick.question.unwrap().id;
            assert!(!previous.contains(&id));
        }
    }

    #[test]
    fn every_candidate_can_be_drawn() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut drawn = HashSet::new();
        for _ in 0..500 {
            let pick = pick_question(questions(&[1, 2, 3, 4]), &HashSet::new(), &mut rng);
            drawn.insert(pick.question.unwrap().id);
        }
        assert_eq!(drawn, HashSet::from([1, 2, 3, 4]));
    }

    #[test]
    fn selector_labels() {
        assert_eq!(CategorySelector::All.to_string(), "all");
        assert_eq!(CategorySelector::Category(3).to_string(), "3");
    }
}
