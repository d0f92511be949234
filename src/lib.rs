//! halfkelly: forex position sizing and risk exposure toolkit
//!
//! This library provides the core components for:
//! - Built-in instrument registry with alias-aware lookup
//! - Account-risk position sizing with conservative lot rounding
//! - Multi-position exposure tracking across accounts
//! - Fixed-width trade and exposure report rendering

pub mod cli;
pub mod exposure;
pub mod format;
pub mod instruments;
pub mod sizing;
pub mod telemetry;
