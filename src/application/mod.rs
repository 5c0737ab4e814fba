pub mod ports;
pub mod use_cases;

pub use ports::{RateError, RateProvider};
pub use use_cases::{GetRatesQuery, GetRatesUseCase, RatesError, RatesResult, StreamRatesUseCase};
