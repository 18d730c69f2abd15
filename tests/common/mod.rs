//! Common test utilities for pageit integration tests.
//!
//! - `TestEnv`: an isolated source tree in a temp directory plus helpers to
//!   run the `pageit` binary against it
//! - Assertion helpers with descriptive failure messages

pub mod assertions;
pub mod env;

#[allow(unused_imports)]
pub use assertions::*;
pub use env::*;
