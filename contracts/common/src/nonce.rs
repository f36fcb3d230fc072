//! # Sequential Nonce Replay Protection
//!
//! Each sender owns a counter in persistent storage that starts at `0` and
//! records the last nonce it successfully used. A submission is accepted only
//! when it carries `last + 1`; anything else (a replay, a stale value, or a
//! skipped value) is rejected and the counter is left untouched.
//!
//! ```ignore
//! nonce::consume_next_nonce(&env, &caller, nonce)?;
//! // ... rest of the state transition
//! ```
//!
//! Callers that must validate several preconditions before writing anything
//! use [`check_next_nonce`] first and [`store_nonce`] once every check passed.

use soroban_sdk::{contracttype, Address, Env};

use crate::CommonError;

// ── Storage key ──────────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
enum NonceKey {
    Nonce(Address),
}

const TTL_THRESHOLD: u32 = 17_280;
const TTL_EXTEND_TO: u32 = 518_400;

// ── Internal helpers ─────────────────────────────────────────────────────────

fn nonce_key(sender: &Address) -> NonceKey {
    NonceKey::Nonce(sender.clone())
}

fn load_nonce(env: &Env, sender: &Address) -> u64 {
    env.storage()
        .persistent()
        .get(&nonce_key(sender))
        .unwrap_or(0u64)
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Return the last nonce `sender` used. New senders are at `0`, so their
/// first submission must carry `1`.
pub fn current_nonce(env: &Env, sender: &Address) -> u64 {
    load_nonce(env, sender)
}

/// Check that `provided` is exactly the next nonce for `sender` without
/// modifying state.
///
/// # Errors
/// - [`CommonError::NonceOverflow`] — the counter is already at `u64::MAX`.
/// - [`CommonError::InvalidNonce`] — `provided` is not `current + 1`.
pub fn check_next_nonce(env: &Env, sender: &Address, provided: u64) -> Result<(), CommonError> {
    let expected = load_nonce(env, sender)
        .checked_add(1)
        .ok_or(CommonError::NonceOverflow)?;
    if provided != expected {
        return Err(CommonError::InvalidNonce);
    }
    Ok(())
}

/// Persist `value` as the last nonce used by `sender`.
pub fn store_nonce(env: &Env, sender: &Address, value: u64) {
    let key = nonce_key(sender);
    env.storage().persistent().set(&key, &value);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

/// Validate `provided` with [`check_next_nonce`] and record it on success.
pub fn consume_next_nonce(env: &Env, sender: &Address, provided: u64) -> Result<(), CommonError> {
    check_next_nonce(env, sender, provided)?;
    store_nonce(env, sender, provided);
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
