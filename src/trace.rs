use tracing::{level_filters::LevelFilter, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Reads the log level from `LOG_LEVEL`, falling back to `INFO`
/// when it is unset or not a level name.
fn level() -> Level {
	std::env::var("LOG_LEVEL")
		.ok()
		.and_then(|level| level.parse().ok())
		.unwrap_or(Level::INFO)
}

/// Initializes the global tracing subscriber, printing events to stdout.
pub fn init_tracing_subscriber() {
	tracing_subscriber::registry()
		.with(LevelFilter::from_level(level()))
		.with(tracing_subscriber::fmt::layer().with_ansi(true))
		.init();
}
