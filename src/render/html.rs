//! HTML page rendered from the Tera templates under `templates/`.
//!
//! Every value inserted into the page goes through Tera's HTML autoescaping.

use lazy_static::lazy_static;
use serde::Serialize;
use tera::{Context, Tera};

use super::downsample;
use crate::error::{DashboardError, Result};
use crate::locale::Locale;
use crate::models::{PriceSeries, Report};

const CHART_WIDTH: u32 = 900;
const CHART_HEIGHT: u32 = 260;
const CHART_PAD: f64 = 8.0;
const CHART_MAX_POINTS: usize = 600;

const PAGE: &str = "dashboard.html";

lazy_static! {
    /// Templates compiled into the binary, parsed on first render.
    static ref ENGINE: std::result::Result<Tera, String> = {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![".html"]);
        tera.add_raw_templates(vec![
            ("base.html", include_str!("../../templates/base.html.tera")),
            (PAGE, include_str!("../../templates/dashboard.html.tera")),
        ])
        .map(|()| tera)
        .map_err(|e| format!("{e:?}"))
    };
}

fn engine() -> Result<&'static Tera> {
    ENGINE
        .as_ref()
        .map_err(|e| DashboardError::from(tera::Error::msg(e)))
}

/// `cagr` is a formatted metric (`12.34` or `N/A`) and is inserted unescaped.
#[derive(Serialize)]
struct ReturnRow {
    label: String,
    cagr: String,
}

#[derive(Serialize)]
struct Chart {
    width: u32,
    height: u32,
    points: String,
    start: String,
    end: String,
    low: String,
    high: String,
    last: String,
}

fn base_context(locale: Locale, ticker: &str) -> Context {
    let mut context = Context::new();
    context.insert("lang", locale.code());
    context.insert("strings", locale.strings());
    context.insert("ticker", ticker);
    context.insert("error", &None::<String>);
    context.insert("report", &None::<Report>);
    context
}

/// Page with the ticker form only.
pub fn render_form(locale: Locale) -> Result<String> {
    let context = base_context(locale, "");
    Ok(engine()?.render(PAGE, &context)?)
}

/// Full dashboard page for a report.
pub fn render_report(report: &Report) -> Result<String> {
    let strings = report.locale.strings();
    let returns: Vec<ReturnRow> = report
        .returns
        .iter()
        .map(|w| ReturnRow {
            label: strings.window_label(w.years),
            cagr: w.cagr.to_string(),
        })
        .collect();

    let mut context = base_context(report.locale, &report.symbol);
    context.insert("report", report);
    context.insert("returns", &returns);
    context.insert("volatility", &report.volatility.to_string());
    context.insert("chart", &chart(&report.history));
    Ok(engine()?.render(PAGE, &context)?)
}

/// Page showing a single error message under the form.
pub fn render_error(locale: Locale, ticker: &str, message: &str) -> Result<String> {
    let mut context = base_context(locale, ticker);
    context.insert("error", message);
    Ok(engine()?.render(PAGE, &context)?)
}

/// Polyline coordinates of the closes plus the date and price range labels.
/// `None` for an empty series.
fn chart(series: &PriceSeries) -> Option<Chart> {
    let (lo, hi) = series.close_range()?;
    let first = series.first()?;
    let last = series.last()?;
    let points = downsample(series.points(), CHART_MAX_POINTS);

    let plot_w = f64::from(CHART_WIDTH) - 2.0 * CHART_PAD;
    let plot_h = f64::from(CHART_HEIGHT) - 2.0 * CHART_PAD;
    let span = hi - lo;
    let x_step = if points.len() > 1 {
        plot_w / (points.len() - 1) as f64
    } else {
        0.0
    };

    let coords: Vec<String> = points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = CHART_PAD + i as f64 * x_step;
            let y = if span > 0.0 {
                CHART_PAD + (hi - p.close) / span * plot_h
            } else {
                CHART_PAD + plot_h / 2.0
            };
            format!("{x:.1},{y:.1}")
        })
        .collect();

    Some(Chart {
        width: CHART_WIDTH,
        height: CHART_HEIGHT,
        points: coords.join(" "),
        start: first.date.to_string(),
        end: last.date.to_string(),
        low: format!("{lo:.2}"),
        high: format!("{hi:.2}"),
        last: format!("{:.2}", last.close),
    })
}
