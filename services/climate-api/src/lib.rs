//! Climate API Service Library
//!
//! Read-only HTTP JSON endpoints over the station/measurement climate
//! dataset.

pub mod config;
pub mod error;
pub mod handlers;
pub mod server;
pub mod state;
