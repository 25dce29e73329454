pub mod av;
pub mod av_dto;
pub mod error;
pub mod fmp;
pub mod fmp_dto;
pub mod marketstack;
pub mod marketstack_dto;
pub mod provider;
pub mod utils;
pub mod yahoo;

pub use error::FetchError;
pub use provider::{MarketData, PriceHistoryProvider};
