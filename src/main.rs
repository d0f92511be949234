use clap::Parser;
use halfkelly::cli::{Cli, Commands};
use halfkelly::telemetry::{init_logging, LogFormat};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    init_logging(&cli.log_level, format)?;

    match cli.command {
        Commands::Size(args) => args.execute(),
        Commands::Instruments(args) => args.execute(),
    }
}
