use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::EnumIter;

#[derive(
    Clone, Copy, Debug, Default, Deserialize, EnumIter, Eq, PartialEq, Serialize, ValueEnum,
)]
pub enum ApiProvider {
    #[default]
    Yahoo,
    Fmp,
    AlphaVantage,
    Marketstack,
}

impl ApiProvider {
    pub fn to_str(&self) -> &str {
        match self {
            ApiProvider::Yahoo => "Yahoo Finance",
            ApiProvider::Fmp => "Financial Modeling Prep",
            ApiProvider::AlphaVantage => "Alpha Vantage",
            ApiProvider::Marketstack => "Marketstack",
        }
    }

    /// Environment variable holding the API key, if the provider needs one.
    pub fn api_key_var(&self) -> Option<&'static str> {
        match self {
            ApiProvider::Yahoo => None,
            ApiProvider::Fmp => Some("FMP_API_KEY"),
            ApiProvider::AlphaVantage => Some("ALPHA_VANTAGE_API_KEY"),
            ApiProvider::Marketstack => Some("MARKETSTACK_API_KEY"),
        }
    }
}
