//! Storage-backed reentrancy guard.
//!
//! The lock lives in instance storage and is released when the guard is
//! dropped, so every return path out of a guarded entry point unlocks it.
//! A failed invocation rolls back the lock write together with everything
//! else.

use soroban_sdk::{symbol_short, Env, Symbol};

use crate::CommonError;

const LOCK_KEY: Symbol = symbol_short!("RE_LOCK");

/// Held for the duration of a guarded call.
pub struct ReentrancyGuard<'a> {
    env: &'a Env,
}

impl<'a> ReentrancyGuard<'a> {
    /// Take the lock, or fail with [`CommonError::ReentrantCall`] if it is
    /// already held.
    pub fn enter(env: &'a Env) -> Result<Self, CommonError> {
        if is_locked(env) {
            return Err(CommonError::ReentrantCall);
        }
        env.storage().instance().set(&LOCK_KEY, &true);
        Ok(Self { env })
    }
}

impl Drop for ReentrancyGuard<'_> {
    fn drop(&mut self) {
        self.env.storage().instance().remove(&LOCK_KEY);
    }
}

/// Whether a guarded call is currently in flight.
pub fn is_locked(env: &Env) -> bool {
    env.storage().instance().get(&LOCK_KEY).unwrap_or(false)
}
