use std::sync::Arc;

use tracing::info;

use crate::services::email::EmailService;

/// Application state shared across requests. Needs to be thread-safe.
///
/// There is no persistence and no per-request bookkeeping; the only shared
/// resource is the email transport, whose connection lifecycle is owned by
/// the transport implementation itself.
pub struct AppState {
    /// The email service used to relay contact-form enquiries.
    pub email_service: Arc<dyn EmailService>,
}

impl AppState {
    /// Creates a new application state with the provided email service.
    pub fn new(email_service: Arc<dyn EmailService>) -> Self {
        info!("Initializing application state");
        Self { email_service }
    }
}
