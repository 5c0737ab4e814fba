pub mod get_rates;
pub mod stream_rates;

pub use get_rates::{GetRatesQuery, GetRatesUseCase, RatesError, RatesResult};
pub use stream_rates::StreamRatesUseCase;
