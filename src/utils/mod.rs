//! # Utility Modules
//!
//! This module contains utility functions and constants used throughout the
//! application.
//!
//! ## Available Utilities
//!
//! - **Constants** (`constant`) - Application-wide configuration constants
//! - **HTML** (`html`) - Page and email body rendering

pub mod constant;
pub mod html;
