use crate::{events, rbac, RegistryError};
use soroban_sdk::{symbol_short, Address, Env, Symbol};

// ── Storage Keys ─────────────────────────────────────────────

const PAUSED: Symbol = symbol_short!("P_GLOB");

// ── Core Logistics ───────────────────────────────────────────

pub fn is_paused(env: &Env) -> bool {
    env.storage().instance().get(&PAUSED).unwrap_or(false)
}

/// Fails with `Paused` while the breaker is engaged. Only write paths call
/// this; reads stay available during an incident.
pub fn require_not_paused(env: &Env) -> Result<(), RegistryError> {
    if is_paused(env) {
        return Err(RegistryError::Paused);
    }
    Ok(())
}

/// Engages the breaker. Pausing an already paused registry fails with
/// `Paused` instead of silently succeeding.
pub fn pause(env: &Env, caller: &Address) -> Result<(), RegistryError> {
    rbac::require_admin(env, caller)?;
    require_not_paused(env)?;

    env.storage().instance().set(&PAUSED, &true);
    events::publish_pause_changed(env, caller.clone(), true);

    Ok(())
}

/// Releases the breaker. Fails with `NotPaused` if it was not engaged.
pub fn unpause(env: &Env, caller: &Address) -> Result<(), RegistryError> {
    rbac::require_admin(env, caller)?;
    if !is_paused(env) {
        return Err(RegistryError::NotPaused);
    }

    env.storage().instance().set(&PAUSED, &false);
    events::publish_pause_changed(env, caller.clone(), false);

    Ok(())
}
