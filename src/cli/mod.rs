//! CLI interface for halfkelly
//!
//! Provides subcommands for:
//! - `size`: Calculate position sizing for a trade
//! - `instruments`: List the built-in instrument registry

mod instruments;
mod size;

pub use instruments::InstrumentsArgs;
pub use size::SizeArgs;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "halfkelly")]
#[command(about = "Forex position sizing and risk exposure toolkit")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, default_value = "warn")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Calculate position sizing for a trade
    Size(SizeArgs),
    /// List the built-in instrument registry
    Instruments(InstrumentsArgs),
}
