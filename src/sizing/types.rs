//! Position sizing types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Position sizing errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SizingError {
    /// Instrument definition is missing one or more required fields
    #[error("instrument missing required fields: {}", .missing.join(", "))]
    InvalidInstrument { missing: Vec<&'static str> },
    /// A numeric precondition was violated
    #[error("invalid parameter: {0}")]
    InvalidParameter(&'static str),
}

/// Trade direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Long,
    Short,
}

impl Direction {
    /// Direction implied by the stop placement: a stop below entry is a long
    pub fn for_trade(entry_price: Decimal, stop_loss: Decimal) -> Self {
        if stop_loss < entry_price {
            Direction::Long
        } else {
            Direction::Short
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Long => write!(f, "LONG"),
            Direction::Short => write!(f, "SHORT"),
        }
    }
}

/// Result of one position sizing calculation
///
/// Stateless and never mutated after creation. The reward fields are present
/// only when a take-profit price was supplied to the calculation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TradeSummary {
    /// Display name of the instrument (e.g. "EUR/USD")
    pub instrument_name: String,
    /// Trade direction derived from the stop placement
    pub direction: Direction,
    /// Distance to the stop loss in pips
    pub stop_distance_pips: Decimal,
    /// Position size in lots, rounded down to the lot increment
    pub position_size: Decimal,
    /// Realized dollar risk after rounding down (never above the intended risk)
    pub actual_risk_amount: Decimal,
    /// Realized risk as a percentage of the account balance
    pub actual_risk_percent: Decimal,
    /// Reward-to-risk ratio
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reward_risk_ratio: Option<Decimal>,
    /// Potential profit in dollars at the take-profit price
    #[serde(skip_serializing_if = "Option::is_none")]
    pub potential_reward: Option<Decimal>,
}
