//! Position sizing module
//!
//! Pure calculation chain from account-risk parameters to a trade summary

mod calculator;
mod types;

pub use calculator::{
    calculate_position_size, calculate_reward_risk_ratio, calculate_risk_amount,
    calculate_risk_per_lot, calculate_stop_distance_pips, size_position,
};
pub use types::{Direction, SizingError, TradeSummary};
