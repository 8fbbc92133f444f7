use std::fmt::Write;

use super::downsample;
use crate::models::{PriceSeries, Report};

const SPARK_WIDTH: usize = 64;
const SPARK_LEVELS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Render a report for the terminal.
pub fn render(report: &Report) -> String {
    let mut out = String::new();
    // writes into a String cannot fail
    let _ = write_report(&mut out, report);
    out
}

/// Render the single message shown when no report could be produced.
pub fn render_error(message: &str) -> String {
    format!("error: {message}\n")
}

fn write_report(out: &mut String, report: &Report) -> std::fmt::Result {
    let s = report.locale.strings();
    writeln!(out, "{}", s.title)?;
    writeln!(out)?;
    writeln!(out, "{} ({})", report.profile.name, report.symbol)?;
    writeln!(out, "{}: {}", s.sector_label, report.profile.sector)?;
    writeln!(out)?;
    writeln!(out, "{}", report.profile.description)?;
    writeln!(out)?;

    writeln!(out, "{}", s.chart_heading)?;
    match sparkline(&report.history) {
        Some(line) => {
            writeln!(out, "{line}")?;
            if let (Some(first), Some(last), Some((lo, hi))) = (
                report.history.first(),
                report.history.last(),
                report.history.close_range(),
            ) {
                writeln!(
                    out,
                    "{} .. {}  {} {:.2}  {} {:.2}  {} {:.2}",
                    first.date, last.date, s.low, lo, s.high, hi, s.last, last.close
                )?;
            }
        }
        None => writeln!(out, "{}", s.no_prices)?,
    }
    writeln!(out)?;

    writeln!(out, "{}", s.returns_heading)?;
    writeln!(out, "{:<10} {:>10}", s.period_column, s.cagr_column)?;
    for window in &report.returns {
        writeln!(
            out,
            "{:<10} {:>10}",
            s.window_label(window.years),
            window.cagr.to_string()
        )?;
    }
    writeln!(out, "  {}", s.cagr_caption)?;
    writeln!(out)?;

    writeln!(out, "{}", s.volatility_heading)?;
    writeln!(out, "{}: {}%", s.risk_label, report.volatility)?;
    writeln!(out, "  {}", s.volatility_caption)?;
    Ok(())
}

/// One character per sampled close, scaled between the lowest and highest
/// close. `None` for an empty series.
fn sparkline(series: &PriceSeries) -> Option<String> {
    let (lo, hi) = series.close_range()?;
    let span = hi - lo;
    let top = (SPARK_LEVELS.len() - 1) as f64;
    let line = downsample(series.points(), SPARK_WIDTH)
        .iter()
        .map(|p| {
            let level = if span > 0.0 {
                ((p.close - lo) / span * top).round() as usize
            } else {
                0
            };
            SPARK_LEVELS[level.min(SPARK_LEVELS.len() - 1)]
        })
        .collect();
    Some(line)
}
