//! # Contact Form Submission
//!
//! Wire format of `POST /api/contact` plus the field rules the contact form
//! enforces in the browser before a request is made.
//!
//! The two validation layers are intentionally different in strength. The
//! browser (and the [`Validate`] derive mirroring it) checks lengths and the
//! email shape; the relay endpoint itself only re-checks that the required
//! fields are present and non-empty, so a payload with a malformed email
//! shape is still relayed.

use serde::Deserialize;
use validator::Validate;

/// A contact-form submission as posted to the relay endpoint.
///
/// All fields are optional at the wire level so that an absent field reaches
/// the handler's own presence check and produces the documented 400 response
/// rather than a framework-level rejection.
#[derive(Debug, Deserialize, Validate)]
pub struct ContactSubmission {
    #[validate(length(min = 2, message = "Name must be at least 2 characters."))]
    pub name: Option<String>,
    #[validate(email(message = "Please enter a valid email address."))]
    pub email: Option<String>,
    pub mobile: Option<String>,
    #[validate(length(min = 10, message = "Message must be at least 10 characters."))]
    pub message: Option<String>,
}

impl ContactSubmission {
    /// Presence check applied by the relay: `name`, `email` and `message`
    /// must all be present and non-blank. `mobile` is never required.
    pub fn has_required_fields(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| field.as_deref().is_some_and(|v| !v.trim().is_empty()))
    }
}
