use std::time::Duration;

pub const YAHOO_BASE: &str = "https://query2.finance.yahoo.com";
pub const YAHOO_COOKIE_URL: &str = "https://fc.yahoo.com";
pub const GOOGLE_TRANSLATE_BASE: &str = "https://translate.googleapis.com";

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0 Safari/537.36";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8501";

/// Language the company description is translated into unless overridden.
pub const DEFAULT_TARGET_LANG: &str = "es";
pub const SOURCE_LANG_AUTO: &str = "auto";
/// Longest input the Google endpoint accepts in one request.
pub const MAX_TRANSLATION_CHARS: usize = 5000;

/// Lookback windows, in years, for the annualized return table.
pub const CAGR_WINDOWS: [u32; 3] = [1, 3, 5];
/// Lookback used for the chart and the volatility figure.
pub const VOLATILITY_WINDOW_YEARS: u32 = 5;
pub const DAYS_PER_YEAR: i64 = 365;
