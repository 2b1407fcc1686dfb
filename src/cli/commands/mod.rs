//! Command implementations

mod import_env;
mod input;
mod inspect;
mod verify;

#[cfg(feature = "fetch")]
pub use api_test::api_test;
pub use import_env::import_env;
pub use inspect::{checks, extract_signature, models};
pub use verify::verify;
