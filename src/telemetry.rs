use prometheus::{register_int_counter, register_int_counter_vec, IntCounter, IntCounterVec};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use lazy_static::lazy_static;

lazy_static! {
    pub static ref QUESTIONS_CREATED: IntCounter = register_int_counter!(
        "trivia_questions_created_total",
        "Number of questions created through the API"
    )
    .unwrap();
    pub static ref QUESTIONS_DELETED: IntCounter = register_int_counter!(
        "trivia_questions_deleted_total",
        "Number of questions deleted through the API"
    )
    .unwrap();
    pub static ref QUIZ_DRAWS: IntCounterVec = register_int_counter_vec!(
        "trivia_quiz_draws_total",
        "Number of quiz questions drawn",
        &["category"]
    )
    .unwrap();
}

/// Filter used when `LOG_LEVEL` is unset or invalid; sqlx logs every
/// statement at info.
const DEFAULT_FILTER: &str = "info,sqlx=warn";

fn filter_from_env() -> EnvFilter {
    EnvFilter::try_from_env("LOG_LEVEL").unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn span_events_enabled() -> bool {
    std::env::var("INCLUDE_SPAN_EVENTS").is_ok_and(|value| value.eq_ignore_ascii_case("true"))
}

pub fn init_tracing() {
    let span_events = if span_events_enabled() {
        FmtSpan::ENTER | FmtSpan::EXIT
    } else {
        FmtSpan::NONE
    };

    tracing_subscriber::registry()
        .with(filter_from_env())
        .with(fmt::layer().with_span_events(span_events))
        .init();
}
