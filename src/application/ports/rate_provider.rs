use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::domain::CurrencyCode;

/// Failures surfaced by the rate collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RateError {
    #[error("unknown currency: {0}")]
    UnknownCurrency(String),
    #[error("rate provider failure: {0}")]
    Internal(String),
}

/// External collaborator exposing pure currency-rate lookups.
///
/// Implementations are read-only and side-effect free, so any number of
/// connections may query concurrently without coordination.
#[async_trait]
pub trait RateProvider: Send + Sync {
    /// Current rate for one (base, target) pair.
    async fn rate(
        &self,
        base: &CurrencyCode,
        target: &CurrencyCode,
    ) -> Result<Decimal, RateError>;

    /// All rates quoted from `base`, in a stable order, excluding the base
    /// itself.
    async fn all_rates(
        &self,
        base: &CurrencyCode,
    ) -> Result<Vec<(CurrencyCode, Decimal)>, RateError>;
}
