use crate::domain::CurrencyPair;

/// Lifecycle states of one streaming connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Open,
    Closing,
    Closed,
}

/// Why a stream session ended. Disconnect and lifetime expiry are expected,
/// not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    ProviderError,
    EncodeFailed,
    Disconnect,
    LifetimeExpired,
}

/// Per-connection stream state. Only the connection's own task touches it,
/// so transitions are guarded by state checks rather than locks. Once a
/// session leaves `Open` it never returns; a new connection gets a new
/// session.
#[derive(Debug)]
pub struct StreamSession {
    pairs: Vec<CurrencyPair>,
    started_at: i64,
    state: SessionState,
    close_reason: Option<CloseReason>,
}

impl StreamSession {
    pub fn new(pairs: Vec<CurrencyPair>, started_at: i64) -> Self {
        StreamSession {
            pairs,
            started_at,
            state: SessionState::Open,
            close_reason: None,
        }
    }

    pub fn pairs(&self) -> &[CurrencyPair] {
        &self.pairs
    }

    pub fn started_at(&self) -> i64 {
        self.started_at
    }

    pub fn is_open(&self) -> bool {
        self.state == SessionState::Open
    }

    pub fn close_reason(&self) -> Option<CloseReason> {
        self.close_reason
    }

    /// First close wins; any later attempt is a no-op and reports `false`.
    pub fn begin_close(&mut self, reason: CloseReason) -> bool {
        if self.state != SessionState::Open {
            return false;
        }
        self.state = SessionState::Closing;
        self.close_reason = Some(reason);
        true
    }

    /// Complete the transition after the outbound channel is released.
    pub fn finish_close(&mut self) {
        if self.state == SessionState::Closing {
            self.state = SessionState::Closed;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> StreamSession {
        let pairs = CurrencyPair::parse_list("USD-MXN,USD-COP").unwrap();
        StreamSession::new(pairs, 1_000)
    }

    #[test]
    fn starts_open_with_requested_pairs() {
        let s = session();
        assert!(s.is_open());
        assert_eq!(s.pairs().len(), 2);
        assert_eq!(s.started_at(), 1_000);
        assert_eq!(s.close_reason(), None);
    }

    #[test]
    fn first_close_wins() {
        let mut s = session();
        assert!(s.begin_close(CloseReason::LifetimeExpired));
        assert!(!s.begin_close(CloseReason::Disconnect));
        assert_eq!(s.close_reason(), Some(CloseReason::LifetimeExpired));
    }

    #[test]
    fn closed_session_never_reopens() {
        let mut s = session();
        s.begin_close(CloseReason::Disconnect);
        s.finish_close();
        assert!(!s.is_open());
        assert!(!s.begin_close(CloseReason::ProviderError));
        assert_eq!(s.close_reason(), Some(CloseReason::Disconnect));
    }

    #[test]
    fn finish_close_requires_a_begun_close() {
        let mut s = session();
        s.finish_close();
        assert!(s.is_open());
    }
}
