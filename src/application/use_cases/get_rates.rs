use std::sync::Arc;
use thiserror::Error;

use crate::application::ports::{RateError, RateProvider};
use crate::domain::{CurrencyCode, CurrencyPair, RateSnapshot};

const DEFAULT_BASE: &str = "USD";

/// Single-shot rate query. `base` defaults to USD; a missing `target`
/// selects the all-rates path.
#[derive(Debug, Clone, Default)]
pub struct GetRatesQuery {
    pub base: Option<String>,
    pub target: Option<String>,
}

#[derive(Debug, Clone)]
pub enum RatesResult {
    Single(RateSnapshot),
    All {
        base: CurrencyCode,
        snapshots: Vec<RateSnapshot>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RatesError {
    #[error("invalid currency: {0}")]
    InvalidCurrency(&'static str),
    #[error(transparent)]
    Provider(#[from] RateError),
}

pub struct GetRatesUseCase<P: RateProvider> {
    provider: Arc<P>,
}

impl<P: RateProvider> GetRatesUseCase<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    pub async fn execute(
        &self,
        query: GetRatesQuery,
        observed_at: i64,
    ) -> Result<RatesResult, RatesError> {
        let base = CurrencyCode::new(query.base.unwrap_or_else(|| DEFAULT_BASE.to_string()))
            .map_err(RatesError::InvalidCurrency)?;

        match query.target {
            Some(target) => {
                let target = CurrencyCode::new(target).map_err(RatesError::InvalidCurrency)?;
                let rate = self.provider.rate(&base, &target).await?;
                Ok(RatesResult::Single(RateSnapshot::new(
                    CurrencyPair::new(base, target),
                    rate,
                    observed_at,
                )))
            }
            None => {
                let rates = self.provider.all_rates(&base).await?;
                let snapshots = rates
                    .into_iter()
                    .map(|(target, rate)| {
                        RateSnapshot::new(
                            CurrencyPair::new(base.clone(), target),
                            rate,
                            observed_at,
                        )
                    })
                    .collect();
                Ok(RatesResult::All { base, snapshots })
            }
        }
    }
}
