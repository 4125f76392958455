mod cli;
mod config;
mod dump;
mod errors;
mod util;

use std::{io, process::ExitCode};

use clap::Parser;
use time::macros::format_description;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    EnvFilter,
    fmt::{time::LocalTime, writer::BoxMakeWriter},
};

pub(crate) use cli::AppCli;

use crate::{
    config::{AppConfig, Logger},
    errors::AppResult,
    util::parse_log_level,
};

fn init_logger(logger: &Logger) -> AppResult<Option<WorkerGuard>> {
    let level = parse_log_level(&logger.level)?;
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .with_env_var("RTP_DUMP_LOG")
        .from_env_lossy();

    let (writer, guard) = match &logger.dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::never(dir, "rtp-dump.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (BoxMakeWriter::new(writer), Some(guard))
        }
        None => (BoxMakeWriter::new(io::stderr), None),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_timer(LocalTime::new(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        )))
        .compact()
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_writer(writer)
        .with_env_filter(filter)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(guard)
}

/// Returns how many inputs failed to decode.
fn run(cli_args: AppCli) -> AppResult<usize> {
    let mut config = AppConfig::new(cli_args.config.clone())?;
    config.apply(&cli_args)?;
    config.validate()?;
    let _guard = init_logger(&config.logger)?;

    tracing::info!(
        "rtp-dump is starting, {} inputs",
        cli_args.hex.len() + cli_args.files.len()
    );

    let hex_inputs = cli_args
        .hex
        .iter()
        .enumerate()
        .map(|(index, text)| (format!("hex#{}", index), dump::load_hex(text)));
    let file_inputs = cli_args
        .files
        .iter()
        .map(|path| (path.display().to_string(), dump::load_file(path)));

    let mut failed = 0;
    for (label, bytes) in hex_inputs.chain(file_inputs) {
        if let Err(err) = bytes.and_then(|bytes| dump::dump_packet(&label, &bytes, &config.dump)) {
            tracing::error!("{}: {}", label, err);
            failed += 1;
        }
    }
    Ok(failed)
}

fn main() -> ExitCode {
    match run(AppCli::parse()) {
        Ok(0) => ExitCode::SUCCESS,
        Ok(_) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("rtp-dump: {}", err);
            ExitCode::FAILURE
        }
    }
}
