//! Single-ticker stock dashboard.
//!
//! Fetches a company profile and daily closes from Yahoo Finance, translates
//! the company description, and computes annualized returns over 1, 3 and 5
//! years plus the annualized volatility of the 5-year series.
//!
//! # Quick start
//!
//! ```no_run
//! use stock_dashboard::Dashboard;
//!
//! let dashboard = Dashboard::builder().build().unwrap();
//! let report = dashboard.analyze("AAPL").unwrap();
//!
//! for window in &report.returns {
//!     println!("{}: {}%", window.label(), window.cagr);
//! }
//! println!("volatility: {}%", report.volatility);
//! ```

pub mod config;
pub mod error;
pub mod locale;
pub mod market;
pub mod metrics;
pub mod models;
pub mod render;
#[cfg(feature = "server")]
pub mod server;
pub mod translate;

pub use error::{DashboardError, Result};
pub use locale::Locale;
pub use market::{MarketDataClient, YahooClient};
pub use models::{
    CompanyProfile, MetricResult, PricePoint, PriceSeries, ProfileLookup, RawProfile, Report,
    WindowReturn,
};
pub use translate::{GoogleTranslator, Translation, TranslationClient};

use std::fmt;
use std::sync::Once;
use std::time::Duration;

use chrono::{Local, NaiveDate, TimeDelta};

static INIT: Once = Once::new();

/// One-time process setup: loads `.env` and installs the `env_logger` logger
/// (default level `info`, overridable through `RUST_LOG`).
///
/// Safe to call any number of times; only the first call has an effect.
pub fn init() {
    INIT.call_once(|| {
        dotenv::dotenv().ok();
        let env = env_logger::Env::default().default_filter_or("info");
        let _ = env_logger::Builder::from_env(env).try_init();
    });
}

// ---------------------------------------------------------------------------
// DashboardBuilder
// ---------------------------------------------------------------------------

/// Builder for a [`Dashboard`] backed by Yahoo Finance and Google Translate.
///
/// Use [`Dashboard::builder()`] to obtain one. For custom providers use
/// [`Dashboard::with_clients`] instead.
pub struct DashboardBuilder {
    timeout: Duration,
    user_agent: String,
    target_lang: Option<String>,
    adjusted: bool,
    yahoo_base: String,
    yahoo_cookie_url: String,
    translate_base: String,
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self {
            timeout: config::DEFAULT_TIMEOUT,
            user_agent: config::DEFAULT_USER_AGENT.to_string(),
            target_lang: Some(config::DEFAULT_TARGET_LANG.to_string()),
            adjusted: true,
            yahoo_base: config::YAHOO_BASE.to_string(),
            yahoo_cookie_url: config::YAHOO_COOKIE_URL.to_string(),
            translate_base: config::GOOGLE_TRANSLATE_BASE.to_string(),
        }
    }
}

impl DashboardBuilder {
    /// Set the HTTP timeout for every provider request.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Language the company description is translated into.
    ///
    /// Defaults to `"es"`. `None` leaves the description untranslated.
    pub fn target_language(mut self, lang: Option<&str>) -> Self {
        self.target_lang = lang.map(str::to_string);
        self
    }

    /// Use adjusted closes (the default) or raw closes.
    pub fn adjusted(mut self, adjusted: bool) -> Self {
        self.adjusted = adjusted;
        self
    }

    pub fn yahoo_base_url(mut self, url: impl Into<String>) -> Self {
        self.yahoo_base = url.into();
        self
    }

    pub fn yahoo_cookie_url(mut self, url: impl Into<String>) -> Self {
        self.yahoo_cookie_url = url.into();
        self
    }

    pub fn translate_base_url(mut self, url: impl Into<String>) -> Self {
        self.translate_base = url.into();
        self
    }

    /// Build the HTTP clients. No request is made until the first analysis.
    pub fn build(self) -> Result<Dashboard> {
        let locale = Locale::for_language(self.target_lang.as_deref());
        let market = YahooClient::builder()
            .base_url(self.yahoo_base)
            .cookie_url(self.yahoo_cookie_url)
            .user_agent(self.user_agent.clone())
            .timeout(self.timeout)
            .adjusted(self.adjusted)
            .locale(locale)
            .build()?;
        let translator = GoogleTranslator::builder()
            .base_url(self.translate_base)
            .user_agent(self.user_agent)
            .timeout(self.timeout)
            .build()?;

        let mut dashboard = Dashboard::with_clients(Box::new(market), Box::new(translator));
        dashboard.set_target_language(self.target_lang.as_deref());
        Ok(dashboard)
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Runs the whole pipeline for one ticker: profile, translation, three price
/// windows, and the derived metrics.
///
/// Every call fetches everything again; nothing is kept between calls.
pub struct Dashboard {
    market: Box<dyn MarketDataClient>,
    translator: Box<dyn TranslationClient>,
    source_lang: String,
    target_lang: Option<String>,
    locale: Locale,
}

impl Dashboard {
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::default()
    }

    /// Assemble a dashboard from arbitrary providers. Translation targets the
    /// default language; change it with [`set_target_language`](Self::set_target_language).
    /// Placeholders for missing profile fields are the provider's own.
    pub fn with_clients(
        market: Box<dyn MarketDataClient>,
        translator: Box<dyn TranslationClient>,
    ) -> Self {
        Self {
            market,
            translator,
            source_lang: config::SOURCE_LANG_AUTO.to_string(),
            target_lang: Some(config::DEFAULT_TARGET_LANG.to_string()),
            locale: Locale::for_language(Some(config::DEFAULT_TARGET_LANG)),
        }
    }

    /// Change the translation target. The page wording follows it.
    pub fn set_target_language(&mut self, lang: Option<&str>) {
        self.target_lang = lang.map(str::to_string);
        self.locale = Locale::for_language(lang);
    }

    pub fn target_language(&self) -> Option<&str> {
        self.target_lang.as_deref()
    }

    /// Language of the page wording and of the profile error message.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Analyze `ticker` with windows ending today (local time).
    pub fn analyze(&self, ticker: &str) -> Result<Report> {
        self.analyze_as_of(ticker, Local::now().date_naive())
    }

    /// Analyze `ticker` with every window ending on `today`.
    ///
    /// Fails only when the ticker is blank or its profile cannot be fetched;
    /// translation and price failures degrade to the original text and
    /// unavailable metrics.
    pub fn analyze_as_of(&self, ticker: &str, today: NaiveDate) -> Result<Report> {
        let symbol = ticker.trim();
        if symbol.is_empty() {
            return Err(DashboardError::InvalidArgument("ticker symbol is empty".into()));
        }
        log::info!("[{symbol}] analyzing as of {today}");

        let profile = match self.market.get_profile(symbol) {
            ProfileLookup::Found(profile) => profile,
            ProfileLookup::Unavailable { reason } => {
                return Err(DashboardError::ProfileUnavailable {
                    symbol: symbol.to_string(),
                    reason,
                });
            }
        };

        let (profile, translated) = match self.target_lang.as_deref() {
            Some(target) => {
                let translation =
                    self.translator
                        .translate(&profile.description, &self.source_lang, target);
                let translated = translation.is_translated();
                (profile.with_description(translation.into_text()), translated)
            }
            None => (profile, false),
        };

        let mut returns = Vec::with_capacity(config::CAGR_WINDOWS.len());
        let mut history = PriceSeries::empty();
        for years in config::CAGR_WINDOWS {
            let series = self.window(symbol, years, today);
            returns.push(WindowReturn {
                years,
                cagr: metrics::compute_cagr(&series, f64::from(years)),
            });
            if years == config::VOLATILITY_WINDOW_YEARS {
                history = series;
            }
        }
        let volatility = metrics::compute_volatility(&history);

        log::info!(
            "[{symbol}] {} closes over {}y, volatility {}",
            history.len(),
            config::VOLATILITY_WINDOW_YEARS,
            volatility
        );
        Ok(Report {
            symbol: symbol.to_string(),
            as_of: today,
            profile,
            translated,
            locale: self.locale,
            history,
            returns,
            volatility,
        })
    }

    fn window(&self, symbol: &str, years: u32, today: NaiveDate) -> PriceSeries {
        let start = today - TimeDelta::days(i64::from(years) * config::DAYS_PER_YEAR);
        self.market.get_history(symbol, start, today)
    }
}

impl fmt::Display for Dashboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dashboard(source_lang={}, target_lang={})",
            self.source_lang,
            self.target_lang.as_deref().unwrap_or("none")
        )
    }
}
