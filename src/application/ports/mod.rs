pub mod rate_provider;

pub use rate_provider::{RateError, RateProvider};
