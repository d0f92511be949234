//! Instrument types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::sizing::SizingError;

/// An instrument's pip characteristics
///
/// Pip values are approximations for USD-denominated accounts; they vary with
/// the quote currency's exchange rate and should be refreshed for precise work.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Instrument {
    /// Minimum price movement (e.g. 0.0001 for EUR/USD, 0.01 for JPY pairs)
    pub pip_size: Decimal,
    /// Dollar value of one pip per standard lot (1.0 lot = 100,000 units)
    pub pip_value: Decimal,
    /// Minimum position size increment (typically 0.01 for micro lots)
    pub lot_increment: Decimal,
}

/// A possibly-incomplete instrument definition
///
/// This is the shape of an instrument as written in a TOML definition file or
/// assembled by hand. Unknown keys are tolerated; [`InstrumentDef::build`]
/// checks that every required field is present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InstrumentDef {
    pub pip_size: Option<Decimal>,
    pub pip_value: Option<Decimal>,
    pub lot_increment: Option<Decimal>,
}

impl InstrumentDef {
    /// Load an instrument definition from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let def: InstrumentDef = toml::from_str(&content)?;
        Ok(def)
    }

    /// Validate the definition and build a complete [`Instrument`]
    ///
    /// Fails with [`SizingError::InvalidInstrument`] naming every missing
    /// required field.
    pub fn build(&self) -> Result<Instrument, SizingError> {
        match (self.pip_size, self.pip_value, self.lot_increment) {
            (Some(pip_size), Some(pip_value), Some(lot_increment)) => Ok(Instrument {
                pip_size,
                pip_value,
                lot_increment,
            }),
            _ => {
                let mut missing = Vec::new();
                if self.pip_size.is_none() {
                    missing.push("pip_size");
                }
                if self.pip_value.is_none() {
                    missing.push("pip_value");
                }
                if self.lot_increment.is_none() {
                    missing.push("lot_increment");
                }
                Err(SizingError::InvalidInstrument { missing })
            }
        }
    }
}

impl From<Instrument> for InstrumentDef {
    fn from(instrument: Instrument) -> Self {
        Self {
            pip_size: Some(instrument.pip_size),
            pip_value: Some(instrument.pip_value),
            lot_increment: Some(instrument.lot_increment),
        }
    }
}
