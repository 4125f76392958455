use std::{env, path::PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::{
    AppCli,
    errors::{AppError, AppResult},
    util::parse_log_level,
};

#[derive(Debug, Deserialize)]
pub(crate) struct Logger {
    pub(crate) level: String,
    /// Logs go to stderr unless a directory is configured.
    #[serde(default)]
    pub(crate) dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DumpOptions {
    pub(crate) verify_round_trip: bool,
    pub(crate) show_payload: bool,
    /// 0 prints the whole payload.
    pub(crate) max_payload_bytes: usize,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AppConfig {
    pub(crate) logger: Logger,
    pub(crate) dump: DumpOptions,
}

impl AppConfig {
    pub(crate) fn new(config_path: Option<PathBuf>) -> AppResult<Self> {
        let config_path_composed =
            config_path.or_else(|| env::var("RTP_DUMP_CONFIG").ok().map(PathBuf::from));

        let mut builder = Config::builder()
            .set_default("logger.level", "info")?
            .set_default("dump.verify_round_trip", true)?
            .set_default("dump.show_payload", false)?
            .set_default("dump.max_payload_bytes", 64)?;
        if let Some(path) = config_path_composed {
            builder = builder.add_source(File::from(path).required(true));
        }
        let result = builder
            .add_source(Environment::with_prefix("rtp_dump").separator("__"))
            .build()?;
        let config = result.try_deserialize()?;
        Ok(config)
    }

    pub(crate) fn apply(&mut self, cli_args: &AppCli) -> AppResult<()> {
        if let Some(level) = &cli_args.log_level {
            self.logger.level = level.clone();
        }

        if cli_args.no_verify {
            self.dump.verify_round_trip = false;
        }

        if cli_args.show_payload {
            self.dump.show_payload = true;
        }

        Ok(())
    }

    pub(crate) fn validate(&self) -> AppResult<()> {
        let _ = parse_log_level(&self.logger.level)?;

        if let Some(dir) = &self.logger.dir
            && dir.as_os_str().is_empty()
        {
            return Err(AppError::ConfigError(ConfigError::Message(
                "the log dir config is empty".to_owned(),
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use clap::Parser;

    use super::*;

    #[test]
    fn test_defaults_and_cli_override() {
        let mut config = AppConfig::new(None).unwrap();
        assert!(config.dump.verify_round_trip);
        assert!(!config.dump.show_payload);
        assert!(config.validate().is_ok());

        let cli = AppCli::parse_from([
            "rtp-dump",
            "--log-level",
            "debug",
            "--no-verify",
            "--show-payload",
            "--hex",
            "80000001",
        ]);
        config.apply(&cli).unwrap();
        assert_eq!(config.logger.level, "debug");
        assert!(!config.dump.verify_round_trip);
        assert!(config.dump.show_payload);
        assert_eq!(cli.hex, vec!["80000001".to_owned()]);

        config.logger.level = "loud".to_owned();
        assert!(config.validate().is_err());
    }
}
