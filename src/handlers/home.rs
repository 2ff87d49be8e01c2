//! # Home Page Handler
//!
//! Serves the marketing page. The brand is resolved per request from the
//! `Host` header and an optional `?site=` override, and the page is rendered
//! server-side with that brand's copy and head metadata.

use axum::{
    extract::Query,
    http::{HeaderMap, header},
    response::Html,
};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::models::Brand;
use crate::utils::html::render_home_page;

/// Query parameters recognized by the home page.
#[derive(Debug, Deserialize)]
pub struct HomeQuery {
    /// Explicit brand override, e.g. `?site=southend`.
    pub site: Option<String>,
}

/// Renders the home page for the brand resolved from the request.
#[instrument(skip(headers, query), fields(site = query.site.as_deref().unwrap_or("")))]
pub async fn home(headers: HeaderMap, Query(query): Query<HomeQuery>) -> Html<String> {
    let hostname = headers
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");

    let brand = Brand::resolve(hostname, query.site.as_deref());
    debug!(hostname, ?brand, "Resolved brand for home page");

    Html(render_home_page(brand.config()))
}
