pub mod middleware;
pub mod rest;
pub mod stream;

pub use rest::{ApiError, AppState, create_router};
pub use stream::{CloseReason, SessionState, StreamSession};
