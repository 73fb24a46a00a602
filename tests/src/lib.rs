//! Testing utilities for the ecverify library
//!
//! Published vectors and a reference signer shared by the integration
//! suites under `tests/tests/`.

pub mod signer;
pub mod vectors;
