use axum::{
    extract::{Query, State},
    http::header,
    response::{
        IntoResponse, Response,
        sse::{Event, Sse},
    },
};
use std::{convert::Infallible, sync::Arc, time::Duration};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;
use tokio_stream::wrappers::ReceiverStream;

use crate::application::StreamRatesUseCase;
use crate::domain::{Clock, CurrencyPair, RateSnapshot};
use crate::presentation::rest::{
    ApiError, AppState,
    dto::{RateSnapshotDto, StreamEventPayload, StreamQuery},
};

use super::session::{CloseReason, StreamSession};

const DEFAULT_PAIRS: &[&str] = &["USD-MXN", "USD-COP", "EUR-USD"];

fn default_pairs() -> Vec<CurrencyPair> {
    DEFAULT_PAIRS
        .iter()
        .filter_map(|token| CurrencyPair::parse(token).ok())
        .collect()
}

/// GET /api/rates/stream?pairs=USD-MXN,USD-COP
///
/// Persistent server-sent event feed. The first event is pushed immediately
/// at connection open; after that one event per refresh period until the
/// first of: a lookup/encode failure, the lifetime cap, or client disconnect.
pub async fn stream_rates<C: Clock + 'static>(
    Query(query): Query<StreamQuery>,
    State(state): State<Arc<AppState<C>>>,
) -> Result<Response, ApiError> {
    let pairs = match query.pairs.as_deref() {
        Some(csv) => CurrencyPair::parse_list(csv)
            .map_err(|e| ApiError::bad_request(format!("invalid pairs parameter: {e}")))?,
        None => default_pairs(),
    };

    let session = StreamSession::new(pairs, state.clock.now_millis());
    let (tx, rx) = mpsc::channel::<Result<Event, Infallible>>(state.stream.channel_capacity);

    tokio::spawn(run_session(session, tx, Arc::clone(&state)));

    let sse = Sse::new(ReceiverStream::new(rx));
    Ok(([(header::CONNECTION, "keep-alive")], sse).into_response())
}

/// Drives one connection: tick timer and lifetime cap multiplexed on the
/// same task, so exactly one of the close paths can win and later wakeups
/// observe an already-closed session.
async fn run_session<C: Clock>(
    mut session: StreamSession,
    tx: mpsc::Sender<Result<Event, Infallible>>,
    state: Arc<AppState<C>>,
) {
    let use_case = StreamRatesUseCase::new(Arc::clone(&state.rate_provider));

    let mut ticker = tokio::time::interval(Duration::from_millis(state.stream.refresh_ms));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let deadline = tokio::time::sleep(Duration::from_millis(state.stream.max_lifetime_ms));
    tokio::pin!(deadline);

    tracing::debug!(pairs = session.pairs().len(), "rate stream opened");

    while session.is_open() {
        tokio::select! {
            _ = &mut deadline => {
                session.begin_close(CloseReason::LifetimeExpired);
            }
            _ = tx.closed() => {
                session.begin_close(CloseReason::Disconnect);
            }
            // First tick completes immediately, so the client gets data at
            // connection open rather than after a full refresh period.
            _ = ticker.tick() => {
                let observed_at = state.clock.now_millis();
                match use_case.snapshot_batch(session.pairs(), observed_at).await {
                    Ok(batch) => match encode_event(&batch, observed_at) {
                        Ok(event) => {
                            if tx.send(Ok(event)).await.is_err() {
                                session.begin_close(CloseReason::Disconnect);
                            }
                        }
                        Err(e) => {
                            tracing::warn!(error = %e, "rate stream encode failed");
                            session.begin_close(CloseReason::EncodeFailed);
                        }
                    },
                    Err(e) => {
                        tracing::warn!(error = %e, "rate stream tick failed");
                        session.begin_close(CloseReason::ProviderError);
                    }
                }
            }
        }
    }

    session.finish_close();
    tracing::debug!(reason = ?session.close_reason(), "rate stream closed");
    // Dropping tx ends the event stream; the transport closes with it.
}

/// Serialize one batch into a single SSE event. Either the whole event
/// encodes or nothing is sent.
fn encode_event(batch: &[RateSnapshot], timestamp: i64) -> Result<Event, serde_json::Error> {
    let payload = StreamEventPayload {
        rates: batch.iter().map(RateSnapshotDto::from).collect(),
        timestamp,
    };
    let json = serde_json::to_string(&payload)?;
    Ok(Event::default().data(json))
}
