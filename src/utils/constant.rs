//! # Application Constants
//!
//! This module defines configuration constants used throughout the
//! application.

/// Operator mailbox that receives every relayed enquiry.
///
/// All submissions go to this fixed address regardless of which brand served
/// the page; replies go out from the operator's own mail client.
pub const ENQUIRY_RECIPIENT: &str = "hello@siobhansluxe.co.uk";

/// Brand name embedded in the enquiry email subject line.
pub const ENQUIRY_BRAND: &str = "Siobhans Luxe";

/// Default SMTP submission port (implicit TLS).
pub const DEFAULT_SMTP_PORT: u16 = 465;

/// Landline shown in the page header, contact section and footer.
pub const CONTACT_PHONE: &str = "01708 865010";
