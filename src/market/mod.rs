//! Market-data access: company profiles and daily closing prices.
//!
//! Providers implement the two `fetch_*` methods and report failures as
//! errors. Callers use the provided `get_*` methods, which never fail: a
//! missing profile becomes [`ProfileLookup::Unavailable`] and a failed history
//! request becomes an empty [`PriceSeries`].

pub mod yahoo;

pub use yahoo::{YahooClient, YahooClientBuilder};

use chrono::NaiveDate;

use crate::error::Result;
use crate::models::{CompanyProfile, PriceSeries, ProfileLookup};

pub trait MarketDataClient: Send + Sync {
    /// Fetch the company profile for `symbol`.
    fn fetch_profile(&self, symbol: &str) -> Result<CompanyProfile>;

    /// Fetch daily closes for `symbol` between `start` and `end`.
    fn fetch_history(&self, symbol: &str, start: NaiveDate, end: NaiveDate)
        -> Result<PriceSeries>;

    fn get_profile(&self, symbol: &str) -> ProfileLookup {
        match self.fetch_profile(symbol) {
            Ok(profile) => ProfileLookup::Found(profile),
            Err(e) => {
                log::warn!("[{symbol}] profile unavailable: {e}");
                ProfileLookup::Unavailable {
                    reason: e.to_string(),
                }
            }
        }
    }

    fn get_history(&self, symbol: &str, start: NaiveDate, end: NaiveDate) -> PriceSeries {
        match self.fetch_history(symbol, start, end) {
            Ok(series) => series,
            Err(e) => {
                log::warn!("[{symbol}] history {start}..{end} unavailable, using an empty series: {e}");
                PriceSeries::empty()
            }
        }
    }
}
