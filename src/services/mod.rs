//! # Business Logic Services
//!
//! This module contains the core business logic services for the application.
//! Services encapsulate domain-specific functionality and provide clean
//! interfaces for use by HTTP handlers.
//!
//! ## Available Services
//!
//! - **Email** (`email`) - Email delivery service with multiple implementations

pub mod email;
