//! Constant values for ecverify cryptographic operations
//!
//! This crate provides the compile-time domain parameters shared by the
//! arithmetic and signature layers.

#![no_std]

pub mod traditional;
