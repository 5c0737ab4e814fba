pub mod clock;
pub mod config;
pub mod rates;

pub use clock::{FixedClock, SystemClock};
pub use config::{
    ConfigError, GatekeeperConfig, GatewayConfig, RateSeedConfig, ServerConfig, StreamConfig,
};
pub use rates::StaticRateTable;
