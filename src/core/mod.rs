//! Core domain logic for ccverify
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`CheckInput`, `CheckResult`, `Verdict`, `VerificationMode`)
//! - `services/` - Check engine, signature extraction, API envelope handling
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
