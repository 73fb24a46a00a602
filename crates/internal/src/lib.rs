//! Internal utilities for the ecverify library
//!
//! Constant-time helpers and limb conversions shared by the arithmetic and
//! signature crates. Not part of the public API surface.

#![cfg_attr(not(test), no_std)]

pub mod constant_time;
pub mod endian;
