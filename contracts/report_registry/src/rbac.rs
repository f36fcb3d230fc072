use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol};

use crate::{events, RegistryError, TTL_EXTEND_TO, TTL_THRESHOLD};

const ADMIN_COUNT: Symbol = symbol_short!("ADM_CNT");

/// Capabilities recognised by the registry. Membership overlaps: the
/// deployer holds both.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum Role {
    /// Manages role membership and the pause switch
    Admin = 1,
    /// Anchors new report hashes
    IntakeOfficer = 2,
}

pub fn role_key(role: &Role, account: &Address) -> (Symbol, Role, Address) {
    (symbol_short!("ROLE"), role.clone(), account.clone())
}

pub fn has_role(env: &Env, account: &Address, role: &Role) -> bool {
    env.storage()
        .persistent()
        .get(&role_key(role, account))
        .unwrap_or(false)
}

pub fn admin_count(env: &Env) -> u32 {
    env.storage().instance().get(&ADMIN_COUNT).unwrap_or(0)
}

fn set_membership(env: &Env, role: &Role, account: &Address, member: bool) {
    let key = role_key(role, account);
    env.storage().persistent().set(&key, &member);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);

    if *role == Role::Admin {
        let count = admin_count(env);
        let count = if member {
            count.saturating_add(1)
        } else {
            count.saturating_sub(1)
        };
        env.storage().instance().set(&ADMIN_COUNT, &count);
    }
}

/// Grants `role` to `account`. Returns `false` without writing anything if
/// the account already held it.
pub fn grant_role(env: &Env, caller: &Address, account: &Address, role: Role) -> bool {
    if has_role(env, account, &role) {
        return false;
    }
    set_membership(env, &role, account, true);
    events::publish_role_changed(env, role, account.clone(), caller.clone(), true);
    true
}

/// Revokes `role` from `account`. Membership is written as `false` rather
/// than deleted so the entry keeps its history. Returns `false` if the
/// account did not hold the role.
pub fn revoke_role(env: &Env, caller: &Address, account: &Address, role: Role) -> bool {
    if !has_role(env, account, &role) {
        return false;
    }
    set_membership(env, &role, account, false);
    events::publish_role_changed(env, role, account.clone(), caller.clone(), false);
    true
}

pub fn require_role(env: &Env, caller: &Address, role: &Role) -> Result<(), RegistryError> {
    if !has_role(env, caller, role) {
        return Err(RegistryError::Unauthorized);
    }
    Ok(())
}

pub fn require_admin(env: &Env, caller: &Address) -> Result<(), RegistryError> {
    require_role(env, caller, &Role::Admin)
}

pub fn require_officer(env: &Env, caller: &Address) -> Result<(), RegistryError> {
    require_role(env, caller, &Role::IntakeOfficer)
}
