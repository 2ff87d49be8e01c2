//! # Email Service
//!
//! This module provides email sending functionality with multiple implementations.
//! The service trait allows for easy testing and switching between a real SMTP
//! transport and mock implementations.
//!
//! ## Implementations
//!
//! - [`LogEmailer`] - Development/testing implementation that logs emails to console
//! - [`SmtpEmailer`] - Production implementation using an authenticated SMTP relay
//! - [`MisconfiguredEmailer`] - Stand-in that fails every send when the SMTP
//!   transport could not be configured
//!
//! ## Usage
//!
//! The email service is automatically configured based on the `APP_ENV` environment variable:
//! - **Production**: Uses `SmtpEmailer` with a real SMTP relay
//! - **Development/Testing**: Uses `LogEmailer` for console output

use std::env;

use async_trait::async_trait;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::MultiPart,
    transport::smtp::authentication::Credentials,
};
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

use crate::utils::constant::DEFAULT_SMTP_PORT;

/// Errors that can occur during email operations
#[derive(Debug, Error)]
pub enum EmailError {
    #[error("Invalid email address: {0}")]
    Address(#[from] lettre::address::AddressError),

    #[error("Failed to build email message: {0}")]
    Message(#[from] lettre::error::Error),

    #[error("Failed to configure SMTP transport: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),

    #[error("Failed to send email: {0}")]
    SendFailed(String),
}

/// Trait for email sending services
///
/// This trait provides a common interface for different email implementations,
/// allowing the application to switch between a real SMTP transport and mock
/// implementations for testing.
#[async_trait]
pub trait EmailService: Send + Sync {
    /// Sends an email to the specified recipient.
    ///
    /// # Arguments
    ///
    /// * `recipient` - Email address of the recipient
    /// * `subject` - Email subject line
    /// * `body_text` - Plain-text content of the email body
    /// * `body_html` - HTML alternative of the email body
    ///
    /// # Errors
    ///
    /// Returns an [`EmailError`] if the email cannot be built or delivered.
    async fn send_email(
        &self,
        recipient: &str,
        subject: &str,
        body_text: &str,
        body_html: &str,
    ) -> Result<(), EmailError>;
}

/// Mock email service for development and testing
///
/// This implementation logs email details to the console instead of sending
/// real emails. Useful for development environments and automated testing
/// where actual email delivery is not desired.
pub struct LogEmailer;

#[async_trait]
impl EmailService for LogEmailer {
    #[instrument(skip(self, body_text, _body_html), fields(recipient = %recipient, subject = %subject))]
    async fn send_email(
        &self,
        recipient: &str,
        subject: &str,
        body_text: &str,
        _body_html: &str,
    ) -> Result<(), EmailError> {
        info!("Sending mock email");

        println!("====== MOCK EMAIL SENT ======");
        println!("To: {recipient}");
        println!("Subject: {subject}");
        println!("-----------------------------");
        println!("{body_text}");
        println!("=============================");

        debug!("Mock email logged to console");
        Ok(())
    }
}

/// Email service used when the SMTP transport could not be configured.
///
/// Every send fails with the stored configuration error, so submissions
/// surface the endpoint's 500 response instead of reporting success while
/// delivering nothing.
pub struct MisconfiguredEmailer {
    reason: String,
}

impl MisconfiguredEmailer {
    pub fn new(cause: &EmailError) -> Self {
        Self {
            reason: cause.to_string(),
        }
    }
}

#[async_trait]
impl EmailService for MisconfiguredEmailer {
    async fn send_email(
        &self,
        _recipient: &str,
        _subject: &str,
        _body_text: &str,
        _body_html: &str,
    ) -> Result<(), EmailError> {
        Err(EmailError::SendFailed(format!(
            "SMTP transport unavailable: {}",
            self.reason
        )))
    }
}

/// SMTP email service for production use
///
/// Delivers mail through an authenticated, implicit-TLS SMTP relay. The
/// transport owns its connection lifecycle (connect, authenticate, send,
/// disconnect) and pools connections across sends.
///
/// # Configuration
///
/// Read from the environment once at startup:
/// - `SMTP_HOST` - Hostname of the SMTP relay
/// - `SMTP_PORT` - Relay port (defaults to 465)
/// - `SMTP_USER` - Account username, also used as the sender address
/// - `SMTP_PASS` - Account password
///
/// Missing credentials do not fail construction; they surface as send
/// failures at request time instead.
pub struct SmtpEmailer {
    sender: String,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpEmailer {
    /// Creates a new SMTP email service instance.
    ///
    /// # Arguments
    ///
    /// * `host` - SMTP relay hostname
    /// * `port` - SMTP relay port
    /// * `user` - Account username, used as the sender address
    /// * `password` - Account password
    pub fn new(host: &str, port: u16, user: String, password: String) -> Result<Self, EmailError> {
        info!(host = %host, port, sender = %user, "Initializing SMTP email service");

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(host)?
            .port(port)
            .credentials(Credentials::new(user.clone(), password))
            .build();

        Ok(Self {
            sender: user,
            transport,
        })
    }

    /// Builds an SMTP email service from `SMTP_*` environment variables.
    ///
    /// Unset variables fall back to defaults rather than aborting startup;
    /// an unreachable or unauthenticated relay fails at send time.
    pub fn from_env() -> Result<Self, EmailError> {
        let host = env::var("SMTP_HOST").unwrap_or_else(|_| {
            warn!("Env variable `SMTP_HOST` is not set, falling back to localhost");
            "localhost".into()
        });
        let port = env::var("SMTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_SMTP_PORT);
        let user = env::var("SMTP_USER").unwrap_or_default();
        let password = env::var("SMTP_PASS").unwrap_or_default();

        if user.is_empty() || password.is_empty() {
            warn!("SMTP credentials are not fully configured, email delivery will fail");
        }

        Self::new(&host, port, user, password)
    }
}

#[async_trait]
impl EmailService for SmtpEmailer {
    #[instrument(
        skip(self, body_text, body_html),
        fields(
            recipient = %recipient,
            subject = %subject,
            sender = %self.sender
        )
    )]
    async fn send_email(
        &self,
        recipient: &str,
        subject: &str,
        body_text: &str,
        body_html: &str,
    ) -> Result<(), EmailError> {
        debug!("Building email message");

        let message = Message::builder()
            .from(self.sender.parse()?)
            .to(recipient.parse()?)
            .subject(subject)
            .multipart(MultiPart::alternative_plain_html(
                body_text.to_string(),
                body_html.to_string(),
            ))?;

        debug!("Handing message to SMTP transport");
        let response = self
            .transport
            .send(message)
            .await
            .map_err(|e| EmailError::SendFailed(format!("SMTP transport error: {e}")))?;

        if response.is_positive() {
            info!("Email sent successfully via SMTP relay");
            Ok(())
        } else {
            Err(EmailError::SendFailed(format!(
                "SMTP relay rejected message: {}",
                response.code()
            )))
        }
    }
}
