//! Instruments command implementation

use clap::Args;

use crate::instruments::{get_instrument, list_instruments};

#[derive(Args, Debug)]
pub struct InstrumentsArgs {
    /// Emit the registry as JSON
    #[arg(long)]
    pub json: bool,
}

impl InstrumentsArgs {
    pub fn execute(&self) -> anyhow::Result<()> {
        if self.json {
            let registry: serde_json::Map<String, serde_json::Value> = list_instruments()
                .into_iter()
                .filter_map(|symbol| {
                    let instrument = get_instrument(symbol)?;
                    Some((symbol.to_string(), serde_json::to_value(instrument).ok()?))
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&registry)?);
            return Ok(());
        }

        println!("Available instruments:");
        for symbol in list_instruments() {
            if let Some(instrument) = get_instrument(symbol) {
                println!(
                    "  {symbol}  pip_size={} pip_value={} lot_increment={}",
                    instrument.pip_size, instrument.pip_value, instrument.lot_increment
                );
            }
        }
        Ok(())
    }
}
