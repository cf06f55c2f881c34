//! Quiz play: drawing the next unseen question.

use rand::seq::IteratorRandom;
use rand::Rng;
use sqlx::SqlitePool;

use crate::db::queries::questions::quiz_candidates;
use crate::db::Question;

/// Category id a client sends to play across every category.
pub const ALL_CATEGORIES: i64 = 0;

/// Picks one of `candidates` uniformly at random.
pub fn draw<R: Rng + ?Sized>(candidates: Vec<Question>, rng: &mut R) -> Option<Question> {
    candidates.into_iter().choose(rng)
}

/// Draws a question from `category` that is not in `previous`.
///
/// Returns `Ok(None)` once every eligible question has been asked.
pub async fn next_question(
    pool: &SqlitePool,
    category: i64,
    previous: &[i64],
) -> sqlx::Result<Option<Question>> {
    let category = (category != ALL_CATEGORIES).then_some(category);
    let candidates = quiz_candidates(pool, category, previous).await?;
    tracing::debug!(
        candidates = candidates.len(),
        previous = previous.len(),
        "Drawing quiz question"
    );
    Ok(draw(candidates, &mut rand::thread_rng()))
}
