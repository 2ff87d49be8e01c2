//! # Contact Relay Handler
//!
//! The single backend operation: accept a contact-form submission, check that
//! the required fields are present, and relay it to the operator mailbox as
//! an email. There is no persistence, no deduplication and no retry beyond
//! whatever the mail transport itself does.

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
};
use serde_json::{Value, json};
use tracing::{debug, info, instrument, warn};

use crate::error::{AppError, AppResult};
use crate::models::{AppState, ContactSubmission};
use crate::utils::constant::{ENQUIRY_BRAND, ENQUIRY_RECIPIENT};
use crate::utils::html::{enquiry_email_html, enquiry_email_text};

/// Relays a contact-form submission to the operator mailbox.
///
/// Validation here is presence-only: `name`, `email` and `message` must be
/// non-empty. The stricter length and format rules live in the form itself;
/// a payload that bypasses them is still relayed.
///
/// # Returns
///
/// - `200 OK` - Email handed to the transport successfully
/// - `400 Bad Request` - A required field is missing or empty; no send is attempted
/// - `500 Internal Server Error` - The mail transport failed; details are logged, not exposed
#[instrument(skip(state, payload))]
pub async fn submit_contact(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ContactSubmission>,
) -> AppResult<Json<Value>> {
    debug!("Processing contact form submission");

    if !payload.has_required_fields() {
        warn!("Contact submission rejected: missing required fields");
        return Err(AppError::BadRequest("Name, email, and message are required"));
    }

    // Presence was checked above.
    let name = payload.name.as_deref().unwrap_or_default();
    let email = payload.email.as_deref().unwrap_or_default();
    let message = payload.message.as_deref().unwrap_or_default();

    let subject = format!("New Enquiry from {name} - {ENQUIRY_BRAND} Website");
    let body_text = enquiry_email_text(name, email, payload.mobile.as_deref(), message);
    let body_html = enquiry_email_html(
        name,
        email,
        payload.mobile.as_deref(),
        message,
        ENQUIRY_BRAND,
    );

    state
        .email_service
        .send_email(ENQUIRY_RECIPIENT, &subject, &body_text, &body_html)
        .await?;

    info!("Enquiry relayed to operator mailbox");
    Ok(Json(json!({
        "success": true,
        "message": "Email sent successfully"
    })))
}
