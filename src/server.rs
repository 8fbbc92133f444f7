//! HTTP front end serving the dashboard as a single HTML page.
//!
//! `GET /` renders the ticker form; `GET /?ticker=AAPL` runs the pipeline and
//! renders the result. The pipeline uses blocking HTTP clients, so each
//! analysis runs on Tokio's blocking thread pool via
//! [`tokio::task::spawn_blocking`].

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use crate::error::{DashboardError, Result};
use crate::render::html;
use crate::Dashboard;

#[derive(Debug, Default, Deserialize)]
pub struct DashboardParams {
    pub ticker: Option<String>,
}

/// Router with the dashboard page mounted at `/`.
pub fn router(dashboard: Arc<Dashboard>) -> Router {
    Router::new()
        .route("/", get(dashboard_page))
        .with_state(dashboard)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(dashboard: Arc<Dashboard>, addr: &str) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    log::info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(dashboard)).await?;
    Ok(())
}

/// GET /?ticker=SYMBOL
async fn dashboard_page(
    State(dashboard): State<Arc<Dashboard>>,
    Query(params): Query<DashboardParams>,
) -> (StatusCode, Html<String>) {
    let locale = dashboard.locale();
    let ticker = params.ticker.unwrap_or_default().trim().to_string();
    if ticker.is_empty() {
        return page(StatusCode::OK, html::render_form(locale));
    }

    let symbol = ticker.clone();
    let outcome = tokio::task::spawn_blocking(move || dashboard.analyze(&symbol)).await;
    let strings = locale.strings();

    match outcome {
        Ok(Ok(report)) => page(StatusCode::OK, html::render_report(&report)),
        Ok(Err(DashboardError::ProfileUnavailable { .. })) => page(
            StatusCode::NOT_FOUND,
            html::render_error(locale, &ticker, strings.profile_error),
        ),
        Ok(Err(DashboardError::InvalidArgument(msg))) => page(
            StatusCode::BAD_REQUEST,
            html::render_error(locale, &ticker, &msg),
        ),
        Ok(Err(e)) => {
            log::error!("[{ticker}] analysis failed: {e}");
            page(
                StatusCode::INTERNAL_SERVER_ERROR,
                html::render_error(locale, &ticker, &e.to_string()),
            )
        }
        Err(e) => {
            log::error!("[{ticker}] analysis task failed: {e}");
            page(
                StatusCode::INTERNAL_SERVER_ERROR,
                html::render_error(locale, &ticker, strings.internal_error),
            )
        }
    }
}

fn page(status: StatusCode, rendered: Result<String>) -> (StatusCode, Html<String>) {
    match rendered {
        Ok(body) => (status, Html(body)),
        Err(e) => {
            log::error!("page rendering failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("<h1>500 Internal Server Error</h1>".to_string()),
            )
        }
    }
}
