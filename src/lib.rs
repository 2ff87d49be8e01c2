//! # Luxesite - Marketing Site & Contact Relay
//!
//! ## Modules
//!
//! - [`handlers`] - HTTP request handlers for the page and API endpoints
//! - [`models`] - Brand configuration, pricing tables and wire payloads
//! - [`services`] - Business logic services (email)
//! - [`utils`] - Rendering helpers and constants

pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod utils;

use std::env;
use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tracing::{error, info};

use crate::handlers::{health_check, home, submit_contact};
use crate::models::AppState;
use crate::services::email::{EmailService, LogEmailer, MisconfiguredEmailer, SmtpEmailer};

/// Creates an Axum router with default email service configuration.
///
/// This is a convenience function that calls [`app_with_email_service`] with no
/// custom email service, causing it to auto-detect the appropriate email
/// service based on the `APP_ENV` environment variable.
#[inline]
pub fn app() -> Router {
    app_with_email_service(None)
}

/// Creates an Axum router with application routes and state.
///
/// # Arguments
///
/// * `email_service` - Optional custom email service. If None, will auto-detect based on APP_ENV
///
/// # Environment Variables
///
/// - `APP_ENV` - "production" uses SmtpEmailer, otherwise uses LogEmailer (mock)
/// - `SMTP_HOST` - SMTP relay hostname (production)
/// - `SMTP_PORT` - SMTP relay port, defaults to 465 (production)
/// - `SMTP_USER` - SMTP username and sender address (production)
/// - `SMTP_PASS` - SMTP password (production)
///
/// Missing SMTP credentials do not abort startup; delivery fails at request
/// time and surfaces as the endpoint's 500 response.
///
/// # Returns
///
/// A configured Axum router with all application routes
pub fn app_with_email_service(email_service: Option<Arc<dyn EmailService>>) -> Router {
    let email_service: Arc<dyn EmailService> = if let Some(service) = email_service {
        service
    } else {
        let app_env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".into())
            .to_ascii_lowercase();

        if app_env == "production" {
            info!("Running in production mode with [SmtpEmailer]");
            match SmtpEmailer::from_env() {
                Ok(emailer) => Arc::new(emailer),
                Err(e) => {
                    // Serve the page regardless; submissions report the
                    // transport failure instead of a false success.
                    error!(error = %e, "SMTP transport misconfigured, enquiry delivery will fail");
                    Arc::new(MisconfiguredEmailer::new(&e))
                }
            }
        } else {
            info!("Running in development mode with [LogEmailer (Mock)]");
            Arc::new(LogEmailer)
        }
    };

    let state = Arc::new(AppState::new(email_service));

    Router::new()
        .route("/", get(home))
        .route("/health-check", get(health_check))
        .route("/api/contact", post(submit_contact))
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
}
