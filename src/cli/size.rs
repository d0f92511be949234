//! Size command implementation

use clap::Args;
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::format::print_trade_summary;
use crate::instruments::{get_instrument, Instrument, InstrumentDef};
use crate::sizing::size_position;

#[derive(Args, Debug)]
pub struct SizeArgs {
    /// Instrument name from the registry (e.g. EURUSD, EUR/USD, GOLD)
    #[arg(short, long, required_unless_present = "definition", conflicts_with = "definition")]
    pub instrument: Option<String>,

    /// Path to a TOML file with a custom instrument definition
    #[arg(long)]
    pub definition: Option<PathBuf>,

    /// Display name for the trade summary
    #[arg(long)]
    pub name: Option<String>,

    /// Account balance in dollars
    #[arg(short, long)]
    pub balance: Decimal,

    /// Percentage of the account to risk (e.g. 2.0 for 2%)
    #[arg(short, long)]
    pub risk: Decimal,

    /// Entry price
    #[arg(short, long)]
    pub entry: Decimal,

    /// Stop loss price
    #[arg(short, long)]
    pub stop: Decimal,

    /// Take profit price, enables reward metrics
    #[arg(short, long)]
    pub target: Option<Decimal>,

    /// Emit the summary as JSON instead of the text block
    #[arg(long)]
    pub json: bool,
}

impl SizeArgs {
    pub fn execute(&self) -> anyhow::Result<()> {
        let (instrument, display_name) = self.resolve_instrument()?;
        tracing::debug!(name = %display_name, "sizing trade");

        let summary = size_position(
            &instrument,
            self.balance,
            self.risk,
            self.entry,
            self.stop,
            self.target,
            &display_name,
        )?;

        if self.json {
            println!("{}", serde_json::to_string_pretty(&summary)?);
        } else {
            print_trade_summary(&summary);
        }
        Ok(())
    }

    fn resolve_instrument(&self) -> anyhow::Result<(Instrument, String)> {
        if let Some(ref path) = self.definition {
            let instrument = InstrumentDef::load(path)?.build()?;
            let display_name = self
                .name
                .clone()
                .unwrap_or_else(|| "UNKNOWN".to_string());
            return Ok((instrument, display_name));
        }

        // clap guarantees one of the two sources is present
        let name = self.instrument.as_deref().unwrap_or_default();
        let instrument = get_instrument(name).ok_or_else(|| {
            anyhow::anyhow!("unknown instrument {name:?}; run `halfkelly instruments` to list them")
        })?;
        let display_name = self.name.clone().unwrap_or_else(|| name.to_string());
        Ok((instrument, display_name))
    }
}
