pub mod clock;
pub mod currency;
pub mod routing;
pub mod snapshot;

pub use clock::Clock;
pub use currency::{CurrencyCode, CurrencyPair};
pub use routing::{GateDecision, MatchKind, RouteClass, RoutePattern, classify, decide};
pub use snapshot::RateSnapshot;
