//! ccverify - A heuristic checklist for telling genuine Claude Code API
//! responses apart from emulations
//!
//! This library provides the check engine (a fixed, weighted battery of
//! keyword and structure checks), signature extraction from response JSON,
//! and the adapters that feed it: an environment-export importer and an
//! optional HTTP client for live API tests.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod output;
pub mod paths;
