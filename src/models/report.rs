use chrono::NaiveDate;
use serde::Serialize;

use super::{CompanyProfile, MetricResult, PriceSeries, WindowReturn};
use crate::locale::Locale;

// ---------------------------------------------------------------------------
// Report — Everything the dashboard shows for one ticker
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub symbol: String,
    /// Last day of every lookback window.
    pub as_of: NaiveDate,
    /// Profile with the description already translated, or the original
    /// description when translation failed.
    pub profile: CompanyProfile,
    /// Whether the translation provider produced the description.
    pub translated: bool,
    /// Language of the page wording, matching the translation target.
    pub locale: Locale,
    /// Five-year closes, used for the chart and the volatility figure.
    pub history: PriceSeries,
    pub returns: Vec<WindowReturn>,
    pub volatility: MetricResult,
}

impl Report {
    /// CAGR for a given window length, if that window was computed.
    pub fn cagr(&self, years: u32) -> Option<MetricResult> {
        self.returns
            .iter()
            .find(|w| w.years == years)
            .map(|w| w.cagr)
    }
}
