use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "tz")]
#[command(about = "Taskzilla command-line client")]
#[command(version)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Commands,

    /// API base URL (overrides configuration)
    #[arg(long, global = true)]
    pub(crate) server: Option<String>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub(crate) pretty: bool,
}
