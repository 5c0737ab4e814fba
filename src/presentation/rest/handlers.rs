use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::application::{GetRatesQuery, GetRatesUseCase, RatesResult};
use crate::domain::Clock;
use crate::presentation::rest::{ApiError, dto::*};

use super::AppState;

/// GET /api/rates/health
pub async fn health() -> Json<PingResponse> {
    Json(PingResponse {})
}

/// GET /api/rates?base=USD&target=MXN
///
/// Single-shot: one lookup, one response, no retries. A missing `base`
/// defaults to USD; a missing `target` returns every rate quoted from the
/// base.
pub async fn get_rates<C: Clock>(
    Query(query): Query<RatesQuery>,
    State(state): State<Arc<AppState<C>>>,
) -> Result<Response, ApiError> {
    let now = state.clock.now_millis();

    let use_case = GetRatesUseCase::new(Arc::clone(&state.rate_provider));
    let result = use_case
        .execute(
            GetRatesQuery {
                base: query.base,
                target: query.target,
            },
            now,
        )
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, "rate lookup failed");
            ApiError::fetch_failed()
        })?;

    Ok(match result {
        RatesResult::Single(snapshot) => Json(SingleRateResponse {
            success: true,
            data: RateSnapshotDto::from(&snapshot),
            timestamp: now,
        })
        .into_response(),
        RatesResult::All { base, snapshots } => Json(AllRatesResponse {
            success: true,
            base: base.to_string(),
            data: snapshots.iter().map(RateSnapshotDto::from).collect(),
            timestamp: now,
        })
        .into_response(),
    })
}
