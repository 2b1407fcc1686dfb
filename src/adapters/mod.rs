//! Adapter implementations for port traits
//!
//! This module contains concrete implementations that handle I/O
//! or untrusted text from outside the core:
//!
//! - `env/` - Shell `export` line importer
//! - `http/` - `reqwest` transport for API tests (feature `fetch`)

pub mod env;
#[cfg(feature = "fetch")]
pub mod http;
