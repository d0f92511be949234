//! Multi-position exposure tracking
//!
//! Tracks open positions across accounts and aggregates risk by instrument
//! and direction. Risk amounts are derived through the sizing calculations
//! when a position is opened.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::instruments::get_instrument;
use crate::sizing::{calculate_risk_per_lot, calculate_stop_distance_pips, Direction};

use super::{Account, DirectionExposure, ExposureError, ExposureSummary, Position};

/// Tracks open positions and their risk exposure
#[derive(Debug, Default)]
pub struct ExposureTracker {
    positions: Vec<Position>,
}

impl ExposureTracker {
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
        }
    }

    /// Open a position, deriving its risk amount from the stop placement
    ///
    /// The instrument must be resolvable through the registry.
    pub fn open(
        &mut self,
        position_id: impl Into<String>,
        account: &Account,
        instrument_name: &str,
        direction: Direction,
        size: Decimal,
        entry_price: Decimal,
        stop_loss: Decimal,
    ) -> Result<Position, ExposureError> {
        let instrument = get_instrument(instrument_name)
            .ok_or_else(|| ExposureError::UnknownInstrument(instrument_name.to_string()))?;

        let stop_distance_pips =
            calculate_stop_distance_pips(entry_price, stop_loss, instrument.pip_size)?;
        let risk_per_lot = calculate_risk_per_lot(stop_distance_pips, instrument.pip_value);
        let risk_amount = (size * risk_per_lot).round_dp(2);

        let position = Position {
            position_id: position_id.into(),
            account_id: account.account_id.clone(),
            instrument: instrument_name.to_ascii_uppercase().replace('/', ""),
            direction,
            size,
            entry_price,
            stop_loss,
            risk_amount,
        };

        self.positions.push(position.clone());
        Ok(position)
    }

    /// Close a position by id, returning it if it was open
    pub fn close(&mut self, position_id: &str) -> Option<Position> {
        let index = self
            .positions
            .iter()
            .position(|p| p.position_id == position_id)?;
        Some(self.positions.remove(index))
    }

    /// All open positions
    pub fn positions(&self) -> &[Position] {
        &self.positions
    }

    /// Number of open positions across all accounts
    pub fn position_count(&self) -> usize {
        self.positions.len()
    }

    /// Open positions for an instrument (case-insensitive)
    pub fn positions_for_instrument(&self, instrument: &str) -> Vec<&Position> {
        let symbol = instrument.to_ascii_uppercase().replace('/', "");
        self.positions
            .iter()
            .filter(|p| p.instrument == symbol)
            .collect()
    }

    /// Open positions in a given direction
    pub fn positions_for_direction(&self, direction: Direction) -> Vec<&Position> {
        self.positions
            .iter()
            .filter(|p| p.direction == direction)
            .collect()
    }

    /// Aggregate exposure for one account's positions
    ///
    /// An account with no open positions gets an all-zero summary.
    pub fn exposure_for(&self, account: &Account) -> ExposureSummary {
        let account_positions: Vec<&Position> = self
            .positions
            .iter()
            .filter(|p| p.account_id == account.account_id)
            .collect();

        if account_positions.is_empty() {
            return ExposureSummary {
                total_risk_amount: Decimal::ZERO,
                total_risk_percent: Decimal::ZERO,
                position_count: 0,
                risk_by_instrument: Default::default(),
                risk_by_direction: DirectionExposure::default(),
                largest_position: None,
            };
        }

        let total_risk_amount: Decimal = account_positions.iter().map(|p| p.risk_amount).sum();
        let total_risk_percent = if account.balance > Decimal::ZERO {
            total_risk_amount / account.balance * dec!(100)
        } else {
            Decimal::ZERO
        };

        let mut risk_by_instrument = std::collections::BTreeMap::new();
        for position in &account_positions {
            *risk_by_instrument
                .entry(position.instrument.clone())
                .or_insert(Decimal::ZERO) += position.risk_amount;
        }

        let mut risk_by_direction = DirectionExposure::default();
        for position in &account_positions {
            match position.direction {
                Direction::Long => risk_by_direction.long += position.risk_amount,
                Direction::Short => risk_by_direction.short += position.risk_amount,
            }
        }

        let largest_position = account_positions
            .iter()
            .max_by_key(|p| p.risk_amount)
            .map(|p| (*p).clone());

        ExposureSummary {
            total_risk_amount: total_risk_amount.round_dp(2),
            total_risk_percent: total_risk_percent.round_dp(2),
            position_count: account_positions.len(),
            risk_by_instrument: risk_by_instrument
                .into_iter()
                .map(|(k, v)| (k, v.round_dp(2)))
                .collect(),
            risk_by_direction,
            largest_position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd_account() -> Account {
        Account::new("acc1", "Main Trading", dec!(10000), "USD")
    }

    #[test]
    fn test_open_derives_risk_amount() {
        let mut tracker = ExposureTracker::new();
        let account = usd_account();

        let position = tracker
            .open(
                "pos1",
                &account,
                "EURUSD",
                Direction::Short,
                dec!(0.08),
                dec!(1.17300),
                dec!(1.18218),
            )
            .unwrap();

        // 91.8 pips * $10/pip * 0.08 lots
        assert_eq!(position.risk_amount, dec!(73.44));
        assert_eq!(tracker.position_count(), 1);
    }

    #[test]
    fn test_open_normalizes_instrument_symbol() {
        let mut tracker = ExposureTracker::new();
        let account = usd_account();

        let position = tracker
            .open(
                "pos1",
                &account,
                "eur/usd",
                Direction::Long,
                dec!(0.10),
                dec!(1.08500),
                dec!(1.08000),
            )
            .unwrap();

        assert_eq!(position.instrument, "EURUSD");
    }

    #[test]
    fn test_open_unknown_instrument() {
        let mut tracker = ExposureTracker::new();
        let account = usd_account();

        let err = tracker
            .open(
                "pos1",
                &account,
                "BTCUSD",
                Direction::Long,
                dec!(0.10),
                dec!(50000),
                dec!(49000),
            )
            .unwrap_err();

        assert_eq!(err, ExposureError::UnknownInstrument("BTCUSD".to_string()));
        assert_eq!(tracker.position_count(), 0);
    }

    #[test]
    fn test_close_removes_matched_position() {
        let mut tracker = ExposureTracker::new();
        let account = usd_account();

        tracker
            .open(
                "pos1",
                &account,
                "EURUSD",
                Direction::Long,
                dec!(0.10),
                dec!(1.08500),
                dec!(1.08000),
            )
            .unwrap();
        tracker
            .open(
                "pos2",
                &account,
                "GBPUSD",
                Direction::Long,
                dec!(0.10),
                dec!(1.26500),
                dec!(1.26000),
            )
            .unwrap();

        let closed = tracker.close("pos1").unwrap();
        assert_eq!(closed.position_id, "pos1");
        assert_eq!(tracker.position_count(), 1);
        assert_eq!(tracker.positions()[0].position_id, "pos2");

        assert!(tracker.close("pos1").is_none());
    }

    #[test]
    fn test_filters_by_instrument_and_direction() {
        let mut tracker = ExposureTracker::new();
        let account = usd_account();

        tracker
            .open(
                "pos1",
                &account,
                "EURUSD",
                Direction::Long,
                dec!(0.10),
                dec!(1.08500),
                dec!(1.08000),
            )
            .unwrap();
        tracker
            .open(
                "pos2",
                &account,
                "GBPUSD",
                Direction::Long,
                dec!(0.10),
                dec!(1.26500),
                dec!(1.26000),
            )
            .unwrap();
        tracker
            .open(
                "pos3",
                &account,
                "EURUSD",
                Direction::Short,
                dec!(0.05),
                dec!(1.08500),
                dec!(1.09000),
            )
            .unwrap();

        assert_eq!(tracker.positions_for_instrument("EURUSD").len(), 2);
        assert_eq!(tracker.positions_for_instrument("eur/usd").len(), 2);
        assert_eq!(tracker.positions_for_direction(Direction::Long).len(), 2);
        assert_eq!(tracker.positions_for_direction(Direction::Short).len(), 1);
    }

    #[test]
    fn test_exposure_totals_for_account() {
        let mut tracker = ExposureTracker::new();
        let account = usd_account();

        for (id, size) in [("pos1", dec!(0.08)), ("pos2", dec!(0.05)), ("pos3", dec!(0.08))] {
            tracker
                .open(
                    id,
                    &account,
                    "EURUSD",
                    Direction::Short,
                    size,
                    dec!(1.17300),
                    dec!(1.18218),
                )
                .unwrap();
        }

        let exposure = tracker.exposure_for(&account);

        // 0.21 lots total * $918 per lot
        assert_eq!(exposure.total_risk_amount, dec!(192.78));
        assert_eq!(exposure.total_risk_percent, dec!(1.93));
        assert_eq!(exposure.position_count, 3);
        assert_eq!(exposure.risk_by_instrument["EURUSD"], dec!(192.78));
        assert_eq!(exposure.risk_by_direction.short, dec!(192.78));
        assert_eq!(exposure.risk_by_direction.long, Decimal::ZERO);

        let largest = exposure.largest_position.unwrap();
        assert_eq!(largest.risk_amount, dec!(73.44));
    }

    #[test]
    fn test_exposure_across_instruments_and_directions() {
        let mut tracker = ExposureTracker::new();
        let account = Account::new("acc2", "Swing Trading", dec!(10000), "USD");

        tracker
            .open(
                "pos4",
                &account,
                "EURUSD",
                Direction::Long,
                dec!(0.20),
                dec!(1.08500),
                dec!(1.08000),
            )
            .unwrap();
        tracker
            .open(
                "pos5",
                &account,
                "GBPUSD",
                Direction::Long,
                dec!(0.10),
                dec!(1.26500),
                dec!(1.26000),
            )
            .unwrap();
        tracker
            .open(
                "pos6",
                &account,
                "USDJPY",
                Direction::Short,
                dec!(0.15),
                dec!(150.500),
                dec!(151.500),
            )
            .unwrap();

        let exposure = tracker.exposure_for(&account);

        // EURUSD 0.20 * 500 = 100, GBPUSD 0.10 * 500 = 50, USDJPY 0.15 * 667 = 100.05
        assert_eq!(exposure.risk_by_instrument["EURUSD"], dec!(100.00));
        assert_eq!(exposure.risk_by_instrument["GBPUSD"], dec!(50.00));
        assert_eq!(exposure.risk_by_instrument["USDJPY"], dec!(100.05));
        assert_eq!(exposure.risk_by_direction.long, dec!(150.00));
        assert_eq!(exposure.risk_by_direction.short, dec!(100.05));
        assert_eq!(exposure.total_risk_amount, dec!(250.05));
    }

    #[test]
    fn test_exposure_empty_portfolio() {
        let tracker = ExposureTracker::new();
        let exposure = tracker.exposure_for(&usd_account());

        assert_eq!(exposure.total_risk_amount, Decimal::ZERO);
        assert_eq!(exposure.total_risk_percent, Decimal::ZERO);
        assert_eq!(exposure.position_count, 0);
        assert!(exposure.risk_by_instrument.is_empty());
        assert!(exposure.largest_position.is_none());
    }

    #[test]
    fn test_exposure_only_counts_own_account() {
        let mut tracker = ExposureTracker::new();
        let account1 = usd_account();
        let account2 = Account::new("acc2", "Second", dec!(5000), "EUR");

        tracker
            .open(
                "pos1",
                &account1,
                "EURUSD",
                Direction::Long,
                dec!(0.10),
                dec!(1.08500),
                dec!(1.08000),
            )
            .unwrap();
        tracker
            .open(
                "pos2",
                &account2,
                "EURUSD",
                Direction::Long,
                dec!(0.10),
                dec!(1.08500),
                dec!(1.08000),
            )
            .unwrap();

        assert_eq!(tracker.exposure_for(&account1).position_count, 1);
        assert_eq!(tracker.exposure_for(&account2).position_count, 1);
    }

    #[test]
    fn test_exposure_zero_balance_account() {
        let mut tracker = ExposureTracker::new();
        let account = Account::new("acc3", "Empty", Decimal::ZERO, "USD");

        tracker
            .open(
                "pos1",
                &account,
                "EURUSD",
                Direction::Long,
                dec!(0.10),
                dec!(1.08500),
                dec!(1.08000),
            )
            .unwrap();

        let exposure = tracker.exposure_for(&account);
        assert_eq!(exposure.total_risk_percent, Decimal::ZERO);
        assert_eq!(exposure.total_risk_amount, dec!(50.00));
    }
}
