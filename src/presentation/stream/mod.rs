pub mod broadcaster;
pub mod session;

pub use broadcaster::stream_rates;
pub use session::{CloseReason, SessionState, StreamSession};
