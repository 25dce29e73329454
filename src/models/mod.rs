pub mod api_provider;
pub mod change_result;
pub mod lookback;
pub mod price_point;
pub mod price_series;
pub mod report;
pub mod symbols;

pub use api_provider::ApiProvider;
pub use change_result::{ChangeComputation, ChangeResult};
pub use lookback::{Lookback, LookbackInput, parse_lookback};
pub use price_point::PricePoint;
pub use price_series::PriceSeries;
pub use report::{DashboardReport, DashboardRequest, SymbolReport};
pub use symbols::{DEFAULT_SYMBOLS, parse_symbols};
