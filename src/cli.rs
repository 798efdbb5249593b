use crate::nav::Destination;
use clap::Parser;
use std::path::PathBuf;

/// Coordinator-driven screen navigation in the terminal.
#[derive(Debug, Parser)]
#[command(name = "navstack", version, about)]
pub struct Cli {
    /// Config file to use instead of the default location.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Start destination; overrides the config file.
    #[arg(long, value_name = "DESTINATION")]
    pub destination: Option<Destination>,
}
