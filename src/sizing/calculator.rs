//! Position sizing calculations
//!
//! The core risk management formula:
//!
//! ```text
//! position size = risk amount / risk per lot
//! ```
//!
//! where risk amount = balance * risk% and risk per lot = stop pips * pip value.
//! Sizes are always rounded DOWN to the lot increment so that realized risk
//! never exceeds the intended risk.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::instruments::Instrument;

use super::{Direction, SizingError, TradeSummary};

/// Distance between entry and stop loss in pips, always non-negative
pub fn calculate_stop_distance_pips(
    entry_price: Decimal,
    stop_loss: Decimal,
    pip_size: Decimal,
) -> Result<Decimal, SizingError> {
    if pip_size <= Decimal::ZERO {
        return Err(SizingError::InvalidParameter("pip size must be positive"));
    }
    Ok((entry_price - stop_loss).abs() / pip_size)
}

/// Dollar amount to risk for a given balance and risk percentage
pub fn calculate_risk_amount(
    account_balance: Decimal,
    risk_percent: Decimal,
) -> Result<Decimal, SizingError> {
    if account_balance < Decimal::ZERO {
        return Err(SizingError::InvalidParameter(
            "account balance must not be negative",
        ));
    }
    if risk_percent < Decimal::ZERO {
        return Err(SizingError::InvalidParameter(
            "risk percent must not be negative",
        ));
    }
    Ok(account_balance * risk_percent / dec!(100))
}

/// Dollar risk per standard lot
///
/// Zero when entry equals stop; consumers must guard before dividing by it.
pub fn calculate_risk_per_lot(stop_pips: Decimal, pip_value: Decimal) -> Decimal {
    stop_pips * pip_value
}

/// Position size in lots, rounded down to the nearest lot increment
///
/// Rounding down is the risk-safety guarantee: the realized dollar risk is
/// never more than the intended risk amount.
pub fn calculate_position_size(
    risk_amount: Decimal,
    risk_per_lot: Decimal,
    lot_increment: Decimal,
) -> Result<Decimal, SizingError> {
    if risk_per_lot <= Decimal::ZERO {
        return Err(SizingError::InvalidParameter(
            "risk per lot must be positive",
        ));
    }
    if lot_increment <= Decimal::ZERO {
        return Err(SizingError::InvalidParameter(
            "lot increment must be positive",
        ));
    }
    let increments = (risk_amount / risk_per_lot / lot_increment).floor();
    Ok(increments * lot_increment)
}

/// Reward-to-risk ratio: target distance over stop distance, from entry
pub fn calculate_reward_risk_ratio(
    entry_price: Decimal,
    stop_loss: Decimal,
    take_profit: Decimal,
) -> Result<Decimal, SizingError> {
    if entry_price == stop_loss {
        return Err(SizingError::InvalidParameter(
            "entry price equals stop loss",
        ));
    }
    Ok((take_profit - entry_price).abs() / (entry_price - stop_loss).abs())
}

/// Calculate complete position sizing for a trade
///
/// Combines the individual calculations into one trade summary. Direction is
/// derived from the stop placement; reward metrics are included only when a
/// take-profit price is supplied. Presentation fields are rounded the way the
/// formatter displays them (pips to 1 dp, dollar amounts and percentages to 2).
pub fn size_position(
    instrument: &Instrument,
    account_balance: Decimal,
    risk_percent: Decimal,
    entry_price: Decimal,
    stop_loss: Decimal,
    take_profit: Option<Decimal>,
    instrument_name: &str,
) -> Result<TradeSummary, SizingError> {
    if account_balance <= Decimal::ZERO {
        return Err(SizingError::InvalidParameter(
            "account balance must be positive",
        ));
    }
    // Degenerate setup: zero stop distance makes risk per lot zero and the
    // size undefined.
    if entry_price == stop_loss {
        return Err(SizingError::InvalidParameter(
            "entry price equals stop loss",
        ));
    }

    let direction = Direction::for_trade(entry_price, stop_loss);

    let stop_distance_pips =
        calculate_stop_distance_pips(entry_price, stop_loss, instrument.pip_size)?;
    let risk_amount = calculate_risk_amount(account_balance, risk_percent)?;
    let risk_per_lot = calculate_risk_per_lot(stop_distance_pips, instrument.pip_value);
    let position_size =
        calculate_position_size(risk_amount, risk_per_lot, instrument.lot_increment)?;

    // Realized risk after rounding down, always <= the requested risk amount
    let actual_risk_amount = position_size * risk_per_lot;
    let actual_risk_percent = actual_risk_amount / account_balance * dec!(100);

    let (reward_risk_ratio, potential_reward) = match take_profit {
        Some(target) => {
            let ratio = calculate_reward_risk_ratio(entry_price, stop_loss, target)?;
            let reward = (target - entry_price).abs() / instrument.pip_size
                * instrument.pip_value
                * position_size;
            (Some(ratio.round_dp(2)), Some(reward.round_dp(2)))
        }
        None => (None, None),
    };

    Ok(TradeSummary {
        instrument_name: instrument_name.to_string(),
        direction,
        stop_distance_pips: stop_distance_pips.round_dp(1),
        position_size,
        actual_risk_amount: actual_risk_amount.round_dp(2),
        actual_risk_percent: actual_risk_percent.round_dp(2),
        reward_risk_ratio,
        potential_reward,
    })
}
