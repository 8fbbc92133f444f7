//! Yahoo Finance implementation of [`MarketDataClient`].
//!
//! Prices come from the public v8 chart endpoint. Profiles come from the v10
//! `quoteSummary` endpoint, which additionally requires a session cookie and a
//! matching "crumb" token; both are obtained on the first profile request and
//! reused for the lifetime of the client.

use std::sync::Mutex;
use std::time::Duration;

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta, Utc};
use reqwest::blocking::{Client, Response};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::MarketDataClient;
use crate::config;
use crate::error::{DashboardError, Result};
use crate::locale::Locale;
use crate::models::{CompanyProfile, PricePoint, PriceSeries, RawProfile};

// ---------------------------------------------------------------------------
// YahooClientBuilder
// ---------------------------------------------------------------------------

/// Builder for [`YahooClient`]. Obtain one with [`YahooClient::builder()`].
pub struct YahooClientBuilder {
    base_url: String,
    cookie_url: String,
    user_agent: String,
    timeout: Duration,
    adjusted: bool,
    locale: Locale,
}

impl Default for YahooClientBuilder {
    fn default() -> Self {
        Self {
            base_url: config::YAHOO_BASE.to_string(),
            cookie_url: config::YAHOO_COOKIE_URL.to_string(),
            user_agent: config::DEFAULT_USER_AGENT.to_string(),
            timeout: config::DEFAULT_TIMEOUT,
            adjusted: true,
            locale: Locale::default(),
        }
    }
}

impl YahooClientBuilder {
    /// Override the API host, e.g. to point at a local mock server.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into().trim_end_matches('/').to_string();
        self
    }

    /// Override the URL requested to obtain the session cookie.
    pub fn cookie_url(mut self, url: impl Into<String>) -> Self {
        self.cookie_url = url.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the per-request timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use dividend/split adjusted closes when Yahoo provides them.
    ///
    /// Defaults to `true`. With `false` the raw closes are always used.
    pub fn adjusted(mut self, adjusted: bool) -> Self {
        self.adjusted = adjusted;
        self
    }

    /// Language of the placeholders used for missing profile fields.
    pub fn locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Build the underlying HTTP client. No request is sent until the first
    /// fetch.
    pub fn build(self) -> Result<YahooClient> {
        let client = Client::builder()
            .user_agent(self.user_agent)
            .timeout(self.timeout)
            .cookie_store(true)
            .gzip(true)
            .build()?;
        Ok(YahooClient {
            client,
            base_url: self.base_url,
            cookie_url: self.cookie_url,
            adjusted: self.adjusted,
            locale: self.locale,
            crumb: Mutex::new(None),
        })
    }
}

// ---------------------------------------------------------------------------
// YahooClient
// ---------------------------------------------------------------------------

pub struct YahooClient {
    client: Client,
    base_url: String,
    cookie_url: String,
    adjusted: bool,
    locale: Locale,
    crumb: Mutex<Option<String>>,
}

impl YahooClient {
    pub fn builder() -> YahooClientBuilder {
        YahooClientBuilder::default()
    }

    /// Client with default settings.
    pub fn new() -> Result<Self> {
        Self::builder().build()
    }

    /// Return the cached crumb, requesting a new one if there is none.
    fn crumb(&self) -> Result<String> {
        let mut cached = self
            .crumb
            .lock()
            .map_err(|_| DashboardError::Provider("crumb lock poisoned".into()))?;
        if let Some(crumb) = cached.as_ref() {
            return Ok(crumb.clone());
        }

        // Only the Set-Cookie header matters here; the page itself is a 404.
        if let Err(e) = self.client.get(&self.cookie_url).send() {
            log::debug!("cookie request to {} failed: {}", self.cookie_url, e);
        }

        let url = format!("{}/v1/test/getcrumb", self.base_url);
        log::debug!("GET {url}");
        let crumb = self
            .client
            .get(&url)
            .send()?
            .error_for_status()?
            .text()?
            .trim()
            .to_string();
        if crumb.is_empty() || crumb.contains('<') {
            return Err(DashboardError::Provider(
                "Yahoo did not return a usable crumb".into(),
            ));
        }

        *cached = Some(crumb.clone());
        Ok(crumb)
    }

    fn reset_crumb(&self) {
        if let Ok(mut cached) = self.crumb.lock() {
            *cached = None;
        }
    }

    fn send_quote_summary(&self, symbol: &str) -> Result<Response> {
        let crumb = self.crumb()?;
        let url = format!("{}/v10/finance/quoteSummary/{}", self.base_url, symbol);
        log::debug!("GET {url}");
        let resp = self
            .client
            .get(&url)
            .query(&[("modules", "assetProfile,price"), ("crumb", crumb.as_str())])
            .send()?;
        Ok(resp)
    }
}

impl MarketDataClient for YahooClient {
    fn fetch_profile(&self, symbol: &str) -> Result<CompanyProfile> {
        let symbol = validate_symbol(symbol)?;

        let mut resp = self.send_quote_summary(symbol)?;
        if resp.status() == StatusCode::UNAUTHORIZED {
            log::debug!("[{symbol}] crumb rejected, requesting a new one");
            self.reset_crumb();
            resp = self.send_quote_summary(symbol)?;
        }

        let envelope: SummaryEnvelope = decode(resp)?;
        let body = envelope.quote_summary;
        if let Some(err) = body.error {
            return Err(err.into_error(symbol));
        }

        let result = body
            .result
            .and_then(|r| r.into_iter().next())
            .filter(|r| r.asset_profile.is_some() || r.price.is_some())
            .ok_or_else(|| DashboardError::NotFound(format!("no profile data for {symbol}")))?;

        Ok(CompanyProfile::from_raw(
            result.into_raw(),
            self.locale.strings(),
        ))
    }

    fn fetch_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries> {
        let symbol = validate_symbol(symbol)?;
        if start >= end {
            return Err(DashboardError::InvalidArgument(format!(
                "history start {start} is not before end {end}"
            )));
        }

        let url = format!("{}/v8/finance/chart/{}", self.base_url, symbol);
        log::debug!("GET {url} ({start}..{end})");
        let resp = self
            .client
            .get(&url)
            .query(&[
                ("period1", unix_midnight(start).to_string()),
                ("period2", period_end(end, Utc::now()).to_string()),
                ("interval", "1d".to_string()),
                ("includeAdjustedClose", "true".to_string()),
                ("events", "div,split".to_string()),
            ])
            .send()?;

        let envelope: ChartEnvelope = decode(resp)?;
        let chart = envelope.chart;
        if let Some(err) = chart.error {
            return Err(err.into_error(symbol));
        }

        let result = chart
            .result
            .and_then(|r| r.into_iter().next())
            .ok_or_else(|| DashboardError::NotFound(format!("no chart data for {symbol}")))?;

        let series = result.into_series(self.adjusted);
        log::debug!("[{symbol}] {} closes between {start} and {end}", series.len());
        Ok(series)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn validate_symbol(symbol: &str) -> Result<&str> {
    let symbol = symbol.trim();
    if symbol.is_empty() {
        return Err(DashboardError::InvalidArgument("ticker symbol is empty".into()));
    }
    if symbol
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, '/' | '?' | '#' | '&'))
    {
        return Err(DashboardError::InvalidArgument(format!(
            "ticker symbol contains invalid characters: {symbol:?}"
        )));
    }
    Ok(symbol)
}

fn unix_midnight(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// Exclusive upper bound of a chart request: the end of `end` (so its own
/// session is included), capped at the current time.
fn period_end(end: NaiveDate, now: DateTime<Utc>) -> i64 {
    unix_midnight(end + TimeDelta::days(1)).min(now.timestamp())
}

/// Parse a JSON body, falling back to a status error when a failed request
/// did not return the expected envelope.
fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let status = resp.status();
    let body = resp.text()?;
    match serde_json::from_str(&body) {
        Ok(value) => Ok(value),
        Err(_) if !status.is_success() => {
            Err(DashboardError::Provider(format!("Yahoo responded with HTTP {status}")))
        }
        Err(e) => Err(e.into()),
    }
}

// ---------------------------------------------------------------------------
// Wire schema
// ---------------------------------------------------------------------------

#[derive(Deserialize, Debug)]
struct ApiError {
    code: String,
    description: Option<String>,
}

impl ApiError {
    fn into_error(self, symbol: &str) -> DashboardError {
        let detail = self.description.unwrap_or_default();
        if self.code.eq_ignore_ascii_case("not found") {
            DashboardError::NotFound(format!("{symbol}: {detail}"))
        } else {
            DashboardError::Provider(format!("{symbol}: {} {}", self.code, detail))
        }
    }
}

// `chart` schema
#[derive(Deserialize, Debug)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Deserialize, Debug)]
struct ChartBody {
    result: Option<Vec<ChartResult>>,
    error: Option<ApiError>,
}

#[derive(Deserialize, Debug)]
struct ChartResult {
    #[serde(default)]
    meta: ChartMeta,
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Deserialize, Debug, Default)]
struct ChartMeta {
    /// Exchange offset from UTC in seconds.
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Deserialize, Debug)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
    #[serde(default)]
    adjclose: Vec<AdjClose>,
}

#[derive(Deserialize, Debug)]
struct Quote {
    #[serde(default)]
    close: Vec<Option<f64>>,
}

#[derive(Deserialize, Debug)]
struct AdjClose {
    #[serde(default)]
    adjclose: Vec<Option<f64>>,
}

impl ChartResult {
    fn into_series(self, adjusted: bool) -> PriceSeries {
        let ChartResult {
            meta,
            timestamp,
            indicators,
        } = self;

        let raw = indicators
            .quote
            .into_iter()
            .next()
            .map(|q| q.close)
            .unwrap_or_default();
        let adj = indicators.adjclose.into_iter().next().map(|a| a.adjclose);
        let closes = match adj {
            Some(adj) if adjusted && !adj.is_empty() => adj,
            _ => raw,
        };

        timestamp
            .into_iter()
            .zip(closes)
            .filter_map(|(ts, close)| {
                // null closes mark halted or not-yet-settled sessions
                let close = close.filter(|c| c.is_finite())?;
                let date = DateTime::from_timestamp(ts + meta.gmtoffset, 0)?.date_naive();
                Some(PricePoint::new(date, close))
            })
            .collect()
    }
}

// `quoteSummary` schema
#[derive(Deserialize, Debug)]
struct SummaryEnvelope {
    #[serde(rename = "quoteSummary")]
    quote_summary: SummaryBody,
}

#[derive(Deserialize, Debug)]
struct SummaryBody {
    result: Option<Vec<SummaryResult>>,
    error: Option<ApiError>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct SummaryResult {
    asset_profile: Option<AssetProfile>,
    price: Option<PriceModule>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct AssetProfile {
    sector: Option<String>,
    long_business_summary: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
struct PriceModule {
    long_name: Option<String>,
    short_name: Option<String>,
}

impl SummaryResult {
    fn into_raw(self) -> RawProfile {
        let (sector, description) = match self.asset_profile {
            Some(p) => (p.sector, p.long_business_summary),
            None => (None, None),
        };
        let name = self
            .price
            .and_then(|p| p.long_name.filter(|n| !n.trim().is_empty()).or(p.short_name));
        RawProfile {
            name,
            sector,
            description,
        }
    }
}
