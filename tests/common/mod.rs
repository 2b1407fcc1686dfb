//! Common test utilities shared across test types
//!
//! - `fixtures.rs` - Test data builders and canned responses
//! - `mocks.rs` - Mock implementations of port traits

pub mod fixtures;
pub mod mocks;
