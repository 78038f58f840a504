use std::collections::VecDeque;
use std::str::FromStr;
use std::sync::Once;
use tracing::Level;

static INIT: Once = Once::new();

/// Variable naming the tracing level (`error`, `warn`, `info`, `debug`, `trace`).
pub const LOG_LEVEL_VAR: &str = "PAGEDIGEST_LOG";

#[derive(Debug, Clone, Default)]
pub struct Logger {
    prefixes: VecDeque<String>,
}

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefixes.push_back(prefix.into());
        self
    }

    fn prefixed(&self, message: &str) -> String {
        let prefix = self.prefixes.iter().map(|p| format!("{} ", p)).collect::<String>();
        format!("{}{}", prefix, message)
    }

    pub fn info(&self, message: &str) {
        tracing::info!("{}", self.prefixed(message));
    }

    pub fn error(&self, message: &str) {
        tracing::error!("{}", self.prefixed(message));
    }

    pub fn debug(&self, message: &str) {
        tracing::debug!("{}", self.prefixed(message));
    }
}

/// Parses a level name, falling back to WARN. Stdout carries the run trace,
/// so tracing stays quiet unless asked.
pub fn level_from(value: Option<&str>) -> Level {
    value
        .and_then(|v| Level::from_str(v.trim()).ok())
        .unwrap_or(Level::WARN)
}

/// Installs a stderr fmt subscriber once and returns a root logger.
pub fn init_logging() -> Logger {
    if !tracing::dispatcher::has_been_set() {
        INIT.call_once(|| {
            let level = level_from(std::env::var(LOG_LEVEL_VAR).ok().as_deref());
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .init();
        });
    }
    Logger::new()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from() {
        assert_eq!(level_from(Some("debug")), Level::DEBUG);
        assert_eq!(level_from(Some(" INFO ")), Level::INFO);
        assert_eq!(level_from(Some("chatty")), Level::WARN);
        assert_eq!(level_from(None), Level::WARN);
    }

    #[test]
    fn test_prefixes_are_joined_in_order() {
        let logger = Logger::new().with_prefix("[fetch]").with_prefix("https://example.com");
        assert_eq!(logger.prefixed("done"), "[fetch] https://example.com done");
    }
}
