use std::path::PathBuf;

use clap::Parser;

/// Decode RTP packets and print their header fields.
///
/// Every file holds one packet, raw bytes or hex text for `.hex`/`.txt` files.
#[derive(Parser)]
#[command(version, about, long_about)]
pub(crate) struct AppCli {
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub(crate) config: Option<PathBuf>,
    #[arg(long, value_name = "LOG_LEVEL")]
    pub(crate) log_level: Option<String>,
    /// A packet given as hex digits, may be repeated
    #[arg(long, value_name = "HEX")]
    pub(crate) hex: Vec<String>,
    /// Skip checking that re-encoding reproduces the input
    #[arg(long)]
    pub(crate) no_verify: bool,
    /// Print the payload bytes as hex
    #[arg(long)]
    pub(crate) show_payload: bool,
    #[arg(value_name = "FILE")]
    pub(crate) files: Vec<PathBuf>,
}
