use rust_decimal::Decimal;

use super::currency::CurrencyPair;

/// One immutable rate observation. A fresh observation is a new value;
/// snapshots are never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct RateSnapshot {
    pub pair: CurrencyPair,
    pub rate: Decimal,
    /// Unix timestamp in milliseconds.
    pub observed_at: i64,
}

impl RateSnapshot {
    pub fn new(pair: CurrencyPair, rate: Decimal, observed_at: i64) -> Self {
        RateSnapshot {
            pair,
            rate,
            observed_at,
        }
    }
}
