use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

pub const QUESTIONS_PER_PAGE: i64 = 10;

#[derive(Serialize, Deserialize, sqlx::FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: i64,
    pub difficulty: i64,
}

pub struct NewQuestion<'a> {
    pub question: &'a str,
    pub answer: &'a str,
    pub category: i64,
    pub difficulty: i64,
}

/// Which questions a listing covers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionFilter {
    All,
    Category(i64),
    /// Case-insensitive substring of the question text.
    Search(String),
}

/// 1-based page number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(i64);

impl Page {
    pub fn new(number: i64) -> Option<Self> {
        (number >= 1).then_some(Page(number))
    }

    pub fn number(self) -> i64 {
        self.0
    }

    /// Row offset of the page, `None` when it does not fit in an `i64`.
    pub fn offset(self) -> Option<i64> {
        (self.0 - 1).checked_mul(QUESTIONS_PER_PAGE)
    }

    /// Whether the page holds at least one of `total` rows.
    /// The first page always exists, even when empty.
    pub fn exists_for(self, total: i64) -> bool {
        self.0 == 1 || self.offset().is_some_and(|offset| offset < total)
    }
}

impl Default for Page {
    fn default() -> Self {
        Page(1)
    }
}

/// Escapes `LIKE` wildcards so the term matches literally.
fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

fn push_filter(builder: &mut QueryBuilder<'_, Sqlite>, filter: &QuestionFilter) {
    match filter {
        QuestionFilter::All => {}
        QuestionFilter::Category(id) => {
            builder.push(" WHERE category = ").push_bind(*id);
        }
        QuestionFilter::Search(term) => {
            builder
                .push(" WHERE question LIKE ")
                .push_bind(like_pattern(term))
                .push(r" ESCAPE '\'");
        }
    }
}

pub async fn count_questions(pool: &SqlitePool, filter: &QuestionFilter) -> sqlx::Result<i64> {
    let mut builder = QueryBuilder::<Sqlite>::new("SELECT COUNT(*) FROM questions");
    push_filter(&mut builder, filter);
    builder.build_query_scalar::<i64>().fetch_one(pool).await
}

pub async fn get_questions_page(
    pool: &SqlitePool,
    filter: &QuestionFilter,
    page: Page,
) -> sqlx::Result<Vec<Question>> {
    let Some(offset) = page.offset() else {
        return Ok(Vec::new());
    };
    let mut builder = QueryBuilder::<Sqlite>::new(
        "SELECT id, question, answer, category, difficulty FROM questions",
    );
    push_filter(&mut builder, filter);
    builder
        .push(" ORDER BY id LIMIT ")
        .push_bind(QUESTIONS_PER_PAGE)
        .push(" OFFSET ")
        .push_bind(offset);
    builder.build_query_as::<Question>().fetch_all(pool).await
}

pub async fn get_all_questions(pool: &SqlitePool) -> sqlx::Result<Vec<Question>> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions ORDER BY id
        "#,
    )
    .fetch_all(pool)
    .await
}

pub async fn get_question(pool: &SqlitePool, id: i64) -> sqlx::Result<Question> {
    sqlx::query_as::<_, Question>(
        r#"
        SELECT id, question, answer, category, difficulty FROM questions WHERE questions.id = ?1
        "#,
    )
    .bind(id)
    .fetch_one(pool)
    .await
}

pub async fn create_question(pool: &SqlitePool, question: NewQuestion<'_>) -> sqlx::Result<i64> {
    let id = sqlx::query(
        r#"
        INSERT INTO questions (question, answer, category, difficulty) VALUES (?1, ?2, ?3, ?4)
        "#,
    )
    .bind(question.question)
    .bind(question.answer)
    .bind(question.category)
    .bind(question.difficulty)
    .execute(pool)
    .await?
    .last_insert_rowid();

    Ok(id)
}

/// Fails with [`sqlx::Error::RowNotFound`] when no question has this id.
pub async fn delete_question(pool: &SqlitePool, id: i64) -> sqlx::Result<()> {
    let deleted = sqlx::query(
        r#"
        DELETE FROM questions WHERE questions.id = ?1
        "#,
    )
    .bind(id)
    .execute(pool)
    .await?
    .rows_affected();

    if deleted == 0 {
        return Err(sqlx::Error::RowNotFound);
    }
    Ok(())
}

/// Questions eligible for a quiz draw, ordered by id.
///
/// `category` of `None` means every category. Exclusions are applied here
/// rather than in SQL so the list length is not bounded by bind limits.
pub async fn quiz_candidates(
    pool: &SqlitePool,
    category: Option<i64>,
    exclude: &[i64],
) -> sqlx::Result<Vec<Question>> {
    let mut builder = QueryBuilder::<Sqlite>::new(
        "SELECT id, question, answer, category, difficulty FROM questions",
    );
    if let Some(category) = category {
        builder.push(" WHERE category = ").push_bind(category);
    }
    builder.push(" ORDER BY id");
    let mut candidates = builder.build_query_as::<Question>().fetch_all(pool).await?;

    let exclude: HashSet<i64> = exclude.iter().copied().collect();
    candidates.retain(|q| !exclude.contains(&q.id));
    Ok(candidates)
}

/// Makes the stored questions match `questions` exactly.
pub async fn import_questions(pool: &SqlitePool, questions: Vec<Question>) -> sqlx::Result<()> {
    let existing_ids: HashSet<i64> = get_all_questions(pool)
        .await?
        .iter()
        .map(|q| q.id)
        .collect();
    let new_ids: HashSet<i64> = questions.iter().map(|q| q.id).collect();

    let mut tx = pool.begin().await?;
    for id in existing_ids.difference(&new_ids) {
        sqlx::query("DELETE FROM questions WHERE questions.id = ?1")
            .bind(*id)
            .execute(&mut *tx)
            .await?;
    }
    for question in questions {
        sqlx::query(
            r#"
            INSERT INTO questions (id, question, answer, category, difficulty)
            VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT (id) DO UPDATE SET
                question = excluded.question,
                answer = excluded.answer,
                category = excluded.category,
                difficulty = excluded.difficulty
            "#,
        )
        .bind(question.id)
        .bind(&question.question)
        .bind(&question.answer)
        .bind(question.category)
        .bind(question.difficulty)
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await
}
