//! Port traits for external dependencies
//!
//! The core depends on these traits, adapters implement them.
//!
//! - [`Transport`] - Sends the API test request

mod transport;

pub use transport::{HttpReply, Transport, TransportError};
