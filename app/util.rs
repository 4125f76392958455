use config::ConfigError;
use tracing_subscriber::filter::LevelFilter;

use crate::errors::{AppError, AppResult};

/// Maps a configured level name to the default filter of the logger, `off` silences it.
pub(crate) fn parse_log_level(level: &str) -> AppResult<LevelFilter> {
    level.trim().parse::<LevelFilter>().map_err(|_| {
        AppError::ConfigError(ConfigError::Message(format!(
            "got unexpected log level: {}",
            level
        )))
    })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_parse_log_level() {
        assert_eq!(parse_log_level("INFO").unwrap(), LevelFilter::INFO);
        assert_eq!(parse_log_level("trace").unwrap(), LevelFilter::TRACE);
        assert_eq!(parse_log_level("off").unwrap(), LevelFilter::OFF);
        assert!(parse_log_level("verbose").is_err());
    }
}
