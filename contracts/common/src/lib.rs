//! Shared utilities and error types for the report registry contracts.
//!
//! This crate provides:
//! - [`CommonError`] — standardised error codes for shared helpers.
//! - [`nonce`] — strict sequential per-sender nonces.
//! - [`reentrancy`] — a storage-backed reentrancy guard.
//!
//! Contract-specific errors map these into their own enums.

#![no_std]

use soroban_sdk::contracterror;

// ── Modules ──────────────────────────────────────────────────────────────────

pub mod nonce;
pub mod reentrancy;

pub use reentrancy::ReentrancyGuard;

// ── Shared error enum ────────────────────────────────────────────────────────

/// Error codes raised by the shared helpers.
///
/// # Code ranges
/// | Range   | Purpose                       |
/// |---------|-------------------------------|
/// | 30 – 39 | Validation / input            |
/// | 40 – 49 | Contract state                |
#[contracterror]
#[derive(Clone, Debug, Eq, PartialEq, Copy)]
#[repr(u32)]
pub enum CommonError {
    // ── Validation (30–39) ───────────────────────────────────
    /// The supplied nonce is not the sender's next expected value.
    InvalidNonce = 31,

    /// The sender's nonce counter is at `u64::MAX`.
    NonceOverflow = 32,

    // ── Contract state (40–49) ───────────────────────────────
    /// A guarded entry point was entered while a guarded call was in flight.
    ReentrantCall = 41,
}
