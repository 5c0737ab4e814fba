use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::HashMap;

use crate::application::ports::{RateError, RateProvider};
use crate::domain::CurrencyCode;

/// In-memory rate table anchored on USD.
///
/// Stores units-per-USD factors; cross rates are derived through the anchor:
/// rate(A, B) = per_usd(B) / per_usd(A). The table is built once at startup
/// and read-only afterwards, so lookups need no locking.
pub struct StaticRateTable {
    per_usd: HashMap<CurrencyCode, Decimal>,
}

impl StaticRateTable {
    /// Table seeded with the default remittance corridor currencies.
    pub fn with_defaults() -> Self {
        let mut per_usd = HashMap::new();
        let defaults: &[(&str, Decimal)] = &[
            ("USD", dec!(1)),
            ("MXN", dec!(17.08)),
            ("COP", dec!(4125.50)),
            ("EUR", dec!(0.92)),
            ("GTQ", dec!(7.78)),
            ("PEN", dec!(3.71)),
            ("DOP", dec!(59.35)),
            ("BRL", dec!(5.02)),
        ];
        for (code, factor) in defaults {
            // Codes in the literal table are non-empty by construction.
            if let Ok(code) = CurrencyCode::new(*code) {
                per_usd.insert(code, *factor);
            }
        }
        StaticRateTable { per_usd }
    }

    /// Overlay additional or replacement units-per-USD factors.
    pub fn with_seeds(mut self, seeds: impl IntoIterator<Item = (CurrencyCode, Decimal)>) -> Self {
        for (code, factor) in seeds {
            self.per_usd.insert(code, factor);
        }
        self
    }

    /// Codes currently quotable, sorted.
    pub fn known_currencies(&self) -> Vec<CurrencyCode> {
        let mut codes: Vec<CurrencyCode> = self.per_usd.keys().cloned().collect();
        codes.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        codes
    }

    fn factor(&self, code: &CurrencyCode) -> Result<Decimal, RateError> {
        self.per_usd
            .get(code)
            .copied()
            .ok_or_else(|| RateError::UnknownCurrency(code.to_string()))
    }

    fn cross_rate(&self, base: &CurrencyCode, target: &CurrencyCode) -> Result<Decimal, RateError> {
        let base_factor = self.factor(base)?;
        let target_factor = self.factor(target)?;
        target_factor
            .checked_div(base_factor)
            .ok_or_else(|| RateError::Internal(format!("cannot derive rate {base}-{target}")))
    }
}

#[async_trait]
impl RateProvider for StaticRateTable {
    async fn rate(
        &self,
        base: &CurrencyCode,
        target: &CurrencyCode,
    ) -> Result<Decimal, RateError> {
        self.cross_rate(base, target)
    }

    async fn all_rates(
        &self,
        base: &CurrencyCode,
    ) -> Result<Vec<(CurrencyCode, Decimal)>, RateError> {
        // Resolve the base first so an unknown base fails before any output.
        let base_factor = self.factor(base)?;

        let mut rates = Vec::with_capacity(self.per_usd.len().saturating_sub(1));
        for target in self.known_currencies() {
            if &target == base {
                continue;
            }
            let rate = self
                .factor(&target)?
                .checked_div(base_factor)
                .ok_or_else(|| RateError::Internal(format!("cannot derive rate {base}-{target}")))?;
            rates.push((target, rate));
        }
        Ok(rates)
    }
}
