use prometheus::{register_counter_vec, register_int_counter};
use prometheus::{CounterVec, IntCounter};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use lazy_static::lazy_static;

lazy_static! {
    pub static ref QUESTIONS_CREATED: IntCounter =
        register_int_counter!("questions_created_total", "Number of created questions").unwrap();
    pub static ref QUESTIONS_DELETED: IntCounter =
        register_int_counter!("questions_deleted_total", "Number of deleted questions").unwrap();
    pub static ref QUIZ_QUESTIONS_SERVED: CounterVec = register_counter_vec!(
        "quiz_questions_served_total",
        "Number of questions handed out by the quiz endpoint",
        &["category"]
    )
    .unwrap();
}

/// Builds the log filter from a `LOG_LEVEL` value, keeping `info` for anything it cannot parse.
fn log_filter(level: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(level.unwrap_or_default())
}

pub fn init_tracing() {
    let span_events = std::env::var("INCLUDE_SPAN_EVENTS")
        .is_ok_and(|value| value.eq_ignore_ascii_case("true"));
    let fmt_layer = fmt::layer().with_span_events(if span_events {
        FmtSpan::ENTER | FmtSpan::EXIT
    } else {
        FmtSpan::NONE
    });
    let level = std::env::var("LOG_LEVEL").ok();

    tracing_subscriber::registry()
        .with(log_filter(level.as_deref()))
        .with(fmt_layer)
        .init();
}
