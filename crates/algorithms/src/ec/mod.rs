//! Elliptic Curve Primitives
//!
//! Constant-flow arithmetic for the NIST P-256 curve, the foundation of the
//! ECDSA verifier in `ecverify-sign`.

pub mod p256;
