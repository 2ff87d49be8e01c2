//! # HTTP Request Handlers
//!
//! This module contains all HTTP request handlers for the application.
//! Each handler is responsible for processing specific HTTP requests and
//! returning appropriate responses.
//!
//! ## Available Handlers
//!
//! - **Contact** (`contact`) - Contact-form relay endpoint
//! - **Health Check** (`health_check`) - Application health monitoring
//! - **Home** (`home`) - Server-rendered marketing page

mod contact;
mod health_check;
mod home;

pub use contact::*;
pub use health_check::*;
pub use home::*;
