//! Built-in instrument registry
//!
//! A fixed table of canonical symbols with case- and separator-insensitive
//! lookup. Callers needing instruments outside the table construct their own
//! [`Instrument`] values and pass them to the calculator directly.

use rust_decimal_macros::dec;

use super::Instrument;

/// EUR/USD major pair
pub const EURUSD: Instrument = Instrument {
    pip_size: dec!(0.0001),
    pip_value: dec!(10.0),
    lot_increment: dec!(0.01),
};

/// GBP/USD major pair
pub const GBPUSD: Instrument = Instrument {
    pip_size: dec!(0.0001),
    pip_value: dec!(10.0),
    lot_increment: dec!(0.01),
};

/// USD/JPY pair; pip value approximate, varies with the USD/JPY rate
pub const USDJPY: Instrument = Instrument {
    pip_size: dec!(0.01),
    pip_value: dec!(6.67),
    lot_increment: dec!(0.01),
};

/// GBP/JPY cross; pip value approximate, varies with the USD/JPY rate
pub const GBPJPY: Instrument = Instrument {
    pip_size: dec!(0.01),
    pip_value: dec!(6.67),
    lot_increment: dec!(0.01),
};

/// Gold (XAU/USD); $1 per pip per lot of 100 oz
pub const XAUUSD: Instrument = Instrument {
    pip_size: dec!(0.01),
    pip_value: dec!(1.0),
    lot_increment: dec!(0.01),
};

const INSTRUMENTS: [(&str, Instrument); 5] = [
    ("EURUSD", EURUSD),
    ("GBPUSD", GBPUSD),
    ("USDJPY", USDJPY),
    ("GBPJPY", GBPJPY),
    ("XAUUSD", XAUUSD),
];

/// Marketing aliases resolved to canonical symbols
const ALIASES: [(&str, &str); 1] = [("GOLD", "XAUUSD")];

fn normalize(name: &str) -> String {
    name.to_ascii_uppercase().replace('/', "")
}

fn canonical(symbol: &str) -> Option<Instrument> {
    INSTRUMENTS
        .iter()
        .find(|(name, _)| *name == symbol)
        .map(|(_, instrument)| *instrument)
}

/// Look up an instrument by name
///
/// Lookup is case-insensitive and ignores a `/` separator, so `"EUR/USD"`,
/// `"eurusd"` and `"EURUSD"` all resolve to the same instrument. Aliases such
/// as `"GOLD"` resolve to their canonical entry. Returns `None` when the name
/// matches neither table; this is the normal not-found result, not an error.
pub fn get_instrument(name: &str) -> Option<Instrument> {
    let symbol = normalize(name);
    canonical(&symbol).or_else(|| {
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == symbol)
            .and_then(|(_, target)| canonical(target))
    })
}

/// List the canonical symbols in the registry, in table order
pub fn list_instruments() -> Vec<&'static str> {
    INSTRUMENTS.iter().map(|(name, _)| *name).collect()
}
