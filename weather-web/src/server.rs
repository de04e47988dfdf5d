//! HTTP front end.
//!
//! - `GET /` serves the search page
//! - `POST /search` takes a `location` form field and answers with a JSON `WeatherResult`

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::{
    Form, Json, Router,
    extract::State,
    response::Html,
    routing::{get, post},
};
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::info;
use weather_core::{WeatherFailure, WeatherProvider, WeatherResult};

const INDEX_HTML: &str = include_str!("../static/index.html");

/// Shared, read-only state handed to every request.
#[derive(Debug, Clone)]
pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
}

impl AppState {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }
}

#[derive(Debug, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    location: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/search", post(search))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind weather dashboard to {addr}"))?;

    info!("Weather dashboard listening on http://{}/", listener.local_addr()?);

    axum::serve(listener, router(state)).await.context("Weather dashboard server error")?;

    Ok(())
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn search(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Json<WeatherResult> {
    let location = form.location.trim();

    if location.is_empty() {
        return Json(WeatherFailure::empty_location().into());
    }

    Json(state.provider.get_weather(location).await)
}
