use std::fmt;

use serde::Serialize;

use crate::locale::Locale;

// ---------------------------------------------------------------------------
// MetricResult — A percentage or an explicit "no data" marker
// ---------------------------------------------------------------------------

/// A derived percentage, already rounded to two decimals, or `Unavailable`
/// when the input data could not support the computation.
///
/// Serializes as a JSON number or `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "Option<f64>")]
pub enum MetricResult {
    Value(f64),
    Unavailable,
}

impl MetricResult {
    /// Wrap a computed value, mapping NaN and infinities to `Unavailable`.
    pub fn from_finite(value: f64) -> Self {
        if value.is_finite() {
            MetricResult::Value(value)
        } else {
            MetricResult::Unavailable
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            MetricResult::Value(v) => Some(*v),
            MetricResult::Unavailable => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, MetricResult::Value(_))
    }
}

impl From<MetricResult> for Option<f64> {
    fn from(m: MetricResult) -> Self {
        m.value()
    }
}

impl fmt::Display for MetricResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetricResult::Value(v) => write!(f, "{:.2}", v),
            MetricResult::Unavailable => f.write_str("N/A"),
        }
    }
}

// ---------------------------------------------------------------------------
// WindowReturn — CAGR for one lookback window
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowReturn {
    pub years: u32,
    pub cagr: MetricResult,
}

impl WindowReturn {
    /// English table label, e.g. `"1 Year"` or `"5 Years"`.
    pub fn label(&self) -> String {
        Locale::English.strings().window_label(self.years)
    }
}
