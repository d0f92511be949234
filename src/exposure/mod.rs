//! Risk exposure module
//!
//! Accounts, open positions, and aggregated exposure across a portfolio

mod tracker;
mod types;

pub use tracker::ExposureTracker;
pub use types::{
    currency_symbol, Account, DirectionExposure, ExposureError, ExposureSummary, Position,
};
