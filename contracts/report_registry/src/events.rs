#![allow(deprecated)]
use crate::rbac::Role;
use soroban_sdk::{symbol_short, Address, BytesN, Env, String};

/// Event published when the registry is initialized.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub admin: Address,
    pub timestamp: u64,
}

/// Event published when a report hash is anchored. Carries every stored
/// field so indexers never need a follow-up read.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReportSubmittedEvent {
    pub report_id: String,
    pub report_hash: BytesN<32>,
    pub submitter: Address,
    pub timestamp: u64,
    pub ledger_sequence: u32,
    pub index: u64,
}

/// Event published when an officer announces a commitment.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CommitmentEvent {
    pub commitment: BytesN<32>,
    pub committer: Address,
    pub timestamp: u64,
}

/// Event published when a role is granted or revoked.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleChangedEvent {
    pub role: Role,
    pub account: Address,
    pub caller: Address,
    pub granted: bool,
    pub timestamp: u64,
}

/// Event published when the circuit breaker changes state.
#[soroban_sdk::contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PauseChangedEvent {
    pub caller: Address,
    pub paused: bool,
    pub timestamp: u64,
}

pub fn publish_initialized(env: &Env, admin: Address) {
    let topics = (symbol_short!("INIT"),);
    let data = InitializedEvent {
        admin,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes the submission event, topic-indexed by report id.
pub fn publish_report_submitted(
    env: &Env,
    report_id: String,
    report_hash: BytesN<32>,
    submitter: Address,
    timestamp: u64,
    ledger_sequence: u32,
    index: u64,
) {
    let topics = (symbol_short!("RPT_SUB"), report_id.clone());
    let data = ReportSubmittedEvent {
        report_id,
        report_hash,
        submitter,
        timestamp,
        ledger_sequence,
        index,
    };
    env.events().publish(topics, data);
}

pub fn publish_commitment(env: &Env, commitment: BytesN<32>, committer: Address) {
    let topics = (symbol_short!("COMMIT"), committer.clone());
    let data = CommitmentEvent {
        commitment,
        committer,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

/// Publishes a role change. Only emitted when membership actually flips.
pub fn publish_role_changed(
    env: &Env,
    role: Role,
    account: Address,
    caller: Address,
    granted: bool,
) {
    let name = if granted {
        symbol_short!("ROLE_GRT")
    } else {
        symbol_short!("ROLE_REV")
    };
    let topics = (name, role.clone());
    let data = RoleChangedEvent {
        role,
        account,
        caller,
        granted,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish(topics, data);
}

pub fn publish_pause_changed(env: &Env, caller: Address, paused: bool) {
    let name = if paused {
        symbol_short!("PAUSED")
    } else {
        symbol_short!("UNPAUSED")
    };
    let data = PauseChangedEvent {
        caller,
        paused,
        timestamp: env.ledger().timestamp(),
    };
    env.events().publish((name,), data);
}
