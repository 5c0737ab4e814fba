/// Time source shared by handlers and the broadcaster, so tests can pin it.
pub trait Clock: Send + Sync {
    /// Current Unix timestamp in milliseconds.
    fn now_millis(&self) -> i64;
}
