//! Exposure tracking types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::sizing::{Direction, SizingError};

/// Exposure tracking errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExposureError {
    /// Instrument is not in the registry
    #[error("unknown instrument: {0}")]
    UnknownInstrument(String),
    /// Underlying sizing calculation failed
    #[error(transparent)]
    Sizing(#[from] SizingError),
}

/// A trading account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier for the account
    pub account_id: String,
    /// Human-readable name (e.g. "Main Trading")
    pub name: String,
    /// Balance in the account's currency
    pub balance: Decimal,
    /// ISO currency code (e.g. "USD", "EUR")
    pub currency: String,
}

impl Account {
    pub fn new(
        account_id: impl Into<String>,
        name: impl Into<String>,
        balance: Decimal,
        currency: &str,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            name: name.into(),
            balance,
            currency: currency.to_ascii_uppercase(),
        }
    }
}

/// An open trading position with its derived risk amount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Unique identifier for the position
    pub position_id: String,
    /// Account holding this position
    pub account_id: String,
    /// Canonical instrument symbol (e.g. "EURUSD")
    pub instrument: String,
    /// Trade direction
    pub direction: Direction,
    /// Position size in lots
    pub size: Decimal,
    /// Entry price
    pub entry_price: Decimal,
    /// Stop loss price
    pub stop_loss: Decimal,
    /// Dollar risk if the stop is hit
    pub risk_amount: Decimal,
}

/// Per-direction risk totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectionExposure {
    pub long: Decimal,
    pub short: Decimal,
}

impl DirectionExposure {
    pub fn for_direction(&self, direction: Direction) -> Decimal {
        match direction {
            Direction::Long => self.long,
            Direction::Short => self.short,
        }
    }
}

/// Summary of risk exposure for one account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExposureSummary {
    /// Sum of all position risks in the account currency
    pub total_risk_amount: Decimal,
    /// Total risk as a percentage of the account balance
    pub total_risk_percent: Decimal,
    /// Number of open positions
    pub position_count: usize,
    /// Risk totals keyed by instrument symbol
    pub risk_by_instrument: BTreeMap<String, Decimal>,
    /// Risk totals split by direction
    pub risk_by_direction: DirectionExposure,
    /// Position with the highest risk, if any are open
    pub largest_position: Option<Position>,
}

/// Currency symbol for an ISO code, or the code itself when unknown
pub fn currency_symbol(code: &str) -> &str {
    match code.to_ascii_uppercase().as_str() {
        "USD" => "$",
        "EUR" => "\u{20ac}",
        "GBP" => "\u{a3}",
        "JPY" => "\u{a5}",
        "CHF" => "CHF",
        "AUD" => "A$",
        "CAD" => "C$",
        "NZD" => "NZ$",
        _ => code,
    }
}
