mod categories;
mod questions;
mod quizzes;

use std::collections::BTreeMap;

use serde::Deserialize;

pub use categories::category_router;
pub use questions::questions_router;
pub use quizzes::quizzes_router;

use crate::db::{Category, Page};
use crate::server::error::ApiError;

#[derive(Deserialize, Default)]
struct PageQuery {
    page: Option<i64>,
}

impl PageQuery {
    fn page(&self) -> Result<Page, ApiError> {
        match self.page {
            None => Ok(Page::default()),
            Some(n) => Page::new(n).ok_or(ApiError::BadRequest),
        }
    }
}

/// `{"<id>": "<type>"}`, the shape clients use to label categories.
fn category_map(categories: Vec<Category>) -> BTreeMap<i64, String> {
    categories.into_iter().map(|c| (c.id, c.kind)).collect()
}
