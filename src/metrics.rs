//! Annualized return and volatility over a daily close series.
//!
//! Everything here is pure arithmetic. Inputs that cannot support a
//! computation (no data, a non-positive starting price, a result that is not a
//! finite number or exceeds [`MAX_REPORTABLE_PERCENT`]) produce
//! [`MetricResult::Unavailable`] instead of NaN.

use crate::models::{MetricResult, PriceSeries};

/// Trading days per year used to annualize daily volatility.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Largest magnitude, in percent, reported as a value. Anything beyond it
/// comes from a near-zero price in the series, not from market movement.
pub const MAX_REPORTABLE_PERCENT: f64 = 1.0e6;

/// Compound annual growth rate between the first and last close, in percent.
///
/// `years` is the length of the window the caller fetched; the series is not
/// required to span it exactly.
pub fn compute_cagr(series: &PriceSeries, years: f64) -> MetricResult {
    if !(years.is_finite() && years > 0.0) {
        return MetricResult::Unavailable;
    }
    let (first, last) = match (series.first(), series.last()) {
        (Some(first), Some(last)) => (first.close, last.close),
        _ => return MetricResult::Unavailable,
    };
    if first <= 0.0 || last < 0.0 {
        return MetricResult::Unavailable;
    }

    let growth = (last / first).powf(1.0 / years);
    reportable((growth - 1.0) * 100.0)
}

/// Annualized volatility of daily simple returns, in percent.
pub fn compute_volatility(series: &PriceSeries) -> MetricResult {
    annualized_volatility(&daily_returns(series))
}

/// Simple returns between consecutive closes. The first day has no prior close
/// and contributes nothing, so the result is one shorter than the series.
pub fn daily_returns(series: &PriceSeries) -> Vec<f64> {
    series
        .points()
        .windows(2)
        .map(|w| w[1].close / w[0].close - 1.0)
        .collect()
}

/// Population standard deviation of `returns`, scaled by the square root of
/// [`TRADING_DAYS_PER_YEAR`] and expressed in percent.
pub fn annualized_volatility(returns: &[f64]) -> MetricResult {
    if returns.is_empty() {
        return MetricResult::Unavailable;
    }
    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / n;
    let annualized = variance.sqrt() * TRADING_DAYS_PER_YEAR.sqrt() * 100.0;
    reportable(annualized)
}

fn reportable(percent: f64) -> MetricResult {
    if percent.abs() > MAX_REPORTABLE_PERCENT {
        return MetricResult::Unavailable;
    }
    MetricResult::from_finite(round2(percent))
}

/// Round half away from zero to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
