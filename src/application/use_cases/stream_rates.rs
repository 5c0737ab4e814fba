use std::sync::Arc;

use crate::application::ports::{RateError, RateProvider};
use crate::domain::{CurrencyPair, RateSnapshot};

/// Builds one snapshot batch per broadcaster tick.
///
/// All-or-nothing: if any pair fails to resolve, the whole batch fails and
/// the caller must treat the stream as terminal. A partial event is never
/// produced.
pub struct StreamRatesUseCase<P: RateProvider> {
    provider: Arc<P>,
}

impl<P: RateProvider> StreamRatesUseCase<P> {
    pub fn new(provider: Arc<P>) -> Self {
        Self { provider }
    }

    /// Resolve every pair at `observed_at`, preserving the requested order.
    pub async fn snapshot_batch(
        &self,
        pairs: &[CurrencyPair],
        observed_at: i64,
    ) -> Result<Vec<RateSnapshot>, RateError> {
        let mut snapshots = Vec::with_capacity(pairs.len());
        for pair in pairs {
            let rate = self.provider.rate(&pair.base, &pair.target).await?;
            snapshots.push(RateSnapshot::new(pair.clone(), rate, observed_at));
        }
        Ok(snapshots)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::StaticRateTable;

    fn pairs(csv: &str) -> Vec<CurrencyPair> {
        CurrencyPair::parse_list(csv).unwrap()
    }

    #[tokio::test]
    async fn batch_preserves_requested_order() {
        let provider = Arc::new(StaticRateTable::with_defaults());
        let use_case = StreamRatesUseCase::new(provider);

        let batch = use_case
            .snapshot_batch(&pairs("EUR-USD,USD-MXN,USD-COP"), 42)
            .await
            .unwrap();

        assert_eq!(batch.len(), 3);
        assert_eq!(batch[0].pair.to_string(), "EUR-USD");
        assert_eq!(batch[1].pair.to_string(), "USD-MXN");
        assert_eq!(batch[2].pair.to_string(), "USD-COP");
        assert!(batch.iter().all(|s| s.observed_at == 42));
    }

    #[tokio::test]
    async fn batch_fails_whole_when_one_pair_is_unknown() {
        let provider = Arc::new(StaticRateTable::with_defaults());
        let use_case = StreamRatesUseCase::new(provider);

        let result = use_case
            .snapshot_batch(&pairs("USD-MXN,USD-XYZ"), 42)
            .await;

        assert!(matches!(result, Err(RateError::UnknownCurrency(_))));
    }
}
