use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::RateSnapshot;

/// One rate observation on the wire.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateSnapshotDto {
    /// "FROM-TO" token, e.g. "USD-MXN"
    pub pair: String,
    pub rate: Decimal,
    pub observed_at: i64,
}

impl From<&RateSnapshot> for RateSnapshotDto {
    fn from(snapshot: &RateSnapshot) -> Self {
        RateSnapshotDto {
            pair: snapshot.pair.to_string(),
            rate: snapshot.rate,
            observed_at: snapshot.observed_at,
        }
    }
}

/// Envelope for a single-pair rate query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleRateResponse {
    pub success: bool,
    pub data: RateSnapshotDto,
    pub timestamp: i64,
}

/// Envelope for an all-rates query.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllRatesResponse {
    pub success: bool,
    pub base: String,
    pub data: Vec<RateSnapshotDto>,
    pub timestamp: i64,
}

/// Failure envelope shared by all rate endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        ErrorResponse {
            success: false,
            error: error.into(),
        }
    }
}

/// Body of one server-sent stream event.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamEventPayload {
    pub rates: Vec<RateSnapshotDto>,
    pub timestamp: i64,
}

/// Liveness probe body.
#[derive(Debug, Clone, Serialize)]
pub struct PingResponse {}

/// Query parameters for GET /api/rates.
#[derive(Debug, Clone, Deserialize)]
pub struct RatesQuery {
    #[serde(default)]
    pub base: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
}

/// Query parameters for GET /api/rates/stream.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamQuery {
    #[serde(default)]
    pub pairs: Option<String>,
}
