//! Presentation of a [`Report`](crate::Report) as terminal text or an HTML page.
//!
//! Both renderers show the same sections in the same order: profile, price
//! chart, annualized return table, volatility. A failed profile lookup is
//! rendered as a single error message and nothing else. Fixed wording comes
//! from the report's [`Locale`](crate::locale::Locale).

pub mod html;
pub mod text;

use crate::models::PricePoint;

/// Reduce `points` to at most `max` evenly spaced points, always keeping the
/// first and the last.
pub(crate) fn downsample(points: &[PricePoint], max: usize) -> Vec<PricePoint> {
    if max < 2 || points.len() <= max {
        return points.to_vec();
    }
    let step = (points.len() - 1) as f64 / (max - 1) as f64;
    (0..max)
        .map(|i| points[((i as f64) * step).round() as usize])
        .collect()
}
