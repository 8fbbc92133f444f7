//! Shared test fixtures: in-memory market and translation providers plus
//! helpers for building price series.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use stock_dashboard::{
    CompanyProfile, Dashboard, DashboardError, MarketDataClient, PricePoint, PriceSeries,
    RawProfile, Result, TranslationClient,
};

pub const APPLE_SUMMARY: &str = "Apple Inc. designs, manufactures, and markets smartphones.";
pub const APPLE_SUMMARY_ES: &str = "Apple Inc. diseña, fabrica y comercializa teléfonos inteligentes.";

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Reference "today" used by pipeline tests.
pub fn today() -> NaiveDate {
    date(2024, 6, 28)
}

/// Series of consecutive calendar days starting 2020-01-01.
pub fn series(closes: &[f64]) -> PriceSeries {
    let start = date(2020, 1, 1);
    closes
        .iter()
        .enumerate()
        .map(|(i, &c)| PricePoint::new(start + chrono::TimeDelta::days(i as i64), c))
        .collect()
}

pub fn apple_profile() -> CompanyProfile {
    RawProfile {
        name: Some("Apple Inc.".into()),
        sector: Some("Technology".into()),
        description: Some(APPLE_SUMMARY.into()),
    }
    .into()
}

// ---------------------------------------------------------------------------
// StubMarket
// ---------------------------------------------------------------------------

/// Market provider with a fixed profile and per-window closes.
///
/// Windows are keyed by their length in years, derived from the requested
/// date range. A window without closes fails like a provider error.
pub struct StubMarket {
    pub profile: Option<CompanyProfile>,
    pub windows: HashMap<u32, Vec<f64>>,
    pub calls: Arc<Mutex<Vec<String>>>,
}

impl StubMarket {
    pub fn new(profile: Option<CompanyProfile>) -> Self {
        Self {
            profile,
            windows: HashMap::new(),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_window(mut self, years: u32, closes: &[f64]) -> Self {
        self.windows.insert(years, closes.to_vec());
        self
    }

    /// Standard fixture: Apple profile, every window doubling over its span.
    pub fn apple() -> Self {
        Self::new(Some(apple_profile()))
            .with_window(1, &[100.0, 150.0, 200.0])
            .with_window(3, &[100.0, 120.0, 800.0])
            .with_window(5, &[100.0, 101.0, 99.99, 100.9899, 3200.0])
    }

    /// Handle to the call log that stays valid after the stub is boxed.
    pub fn call_log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.calls)
    }
}

impl MarketDataClient for StubMarket {
    fn fetch_profile(&self, symbol: &str) -> Result<CompanyProfile> {
        self.calls.lock().unwrap().push(format!("profile:{symbol}"));
        self.profile
            .clone()
            .ok_or_else(|| DashboardError::NotFound(format!("{symbol}: No data found")))
    }

    fn fetch_history(
        &self,
        symbol: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<PriceSeries> {
        let years = ((end - start).num_days() / 365) as u32;
        self.calls
            .lock()
            .unwrap()
            .push(format!("history:{symbol}:{years}"));
        self.windows
            .get(&years)
            .map(|closes| series(closes))
            .ok_or_else(|| DashboardError::Provider("connection reset".into()))
    }
}

// ---------------------------------------------------------------------------
// StubTranslator
// ---------------------------------------------------------------------------

/// Translator returning a fixed translation, or failing when it has none.
pub struct StubTranslator {
    pub output: Option<String>,
    pub calls: Arc<Mutex<usize>>,
}

impl StubTranslator {
    pub fn ok(output: &str) -> Self {
        Self {
            output: Some(output.to_string()),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            output: None,
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn call_count(&self) -> Arc<Mutex<usize>> {
        Arc::clone(&self.calls)
    }
}

impl TranslationClient for StubTranslator {
    fn try_translate(&self, _text: &str, _source: &str, _target: &str) -> Result<String> {
        *self.calls.lock().unwrap() += 1;
        self.output
            .clone()
            .ok_or_else(|| DashboardError::Provider("quota exceeded".into()))
    }
}

pub fn dashboard(market: StubMarket, translator: StubTranslator) -> Dashboard {
    Dashboard::with_clients(Box::new(market), Box::new(translator))
}
