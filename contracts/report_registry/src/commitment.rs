//! Commit/reveal front-running defense.
//!
//! An officer first announces `keccak256(report_id || report_hash ||
//! nonce_be || secret)` and only later submits the report itself. Observers of
//! the pending pool see an opaque digest until the reveal. Commitments are
//! permanent once recorded and are never consumed by verification.

use soroban_sdk::{contracttype, symbol_short, Address, Bytes, BytesN, Env, String, Symbol};

use crate::{events, validation, RegistryError, TTL_EXTEND_TO, TTL_THRESHOLD};

/// Who announced a commitment, and when.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Commitment {
    pub committer: Address,
    pub timestamp: u64,
    pub ledger_sequence: u32,
}

fn commitment_key(commitment: &BytesN<32>) -> (Symbol, BytesN<32>) {
    (symbol_short!("COMMIT"), commitment.clone())
}

/// Digest of the reveal tuple. The id is validated first so every
/// computable commitment corresponds to a submittable report.
pub fn compute(
    env: &Env,
    report_id: &String,
    report_hash: &BytesN<32>,
    nonce: u64,
    secret: &BytesN<32>,
) -> Result<BytesN<32>, RegistryError> {
    let mut buf: Bytes = validation::report_id_bytes(env, report_id)?;
    buf.extend_from_array(&report_hash.to_array());
    buf.extend_from_array(&nonce.to_be_bytes());
    buf.extend_from_array(&secret.to_array());
    Ok(env.crypto().keccak256(&buf).into())
}

pub fn get(env: &Env, commitment: &BytesN<32>) -> Option<Commitment> {
    env.storage().persistent().get(&commitment_key(commitment))
}

pub fn exists(env: &Env, commitment: &BytesN<32>) -> bool {
    env.storage().persistent().has(&commitment_key(commitment))
}

/// Records a new commitment. Callers check role and pause state first.
pub fn record(env: &Env, committer: &Address, commitment: BytesN<32>) -> Result<(), RegistryError> {
    validation::validate_digest(&commitment)?;
    if exists(env, &commitment) {
        return Err(RegistryError::DuplicateCommitment);
    }

    let key = commitment_key(&commitment);
    let entry = Commitment {
        committer: committer.clone(),
        timestamp: env.ledger().timestamp(),
        ledger_sequence: env.ledger().sequence(),
    };
    env.storage().persistent().set(&key, &entry);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);

    events::publish_commitment(env, commitment, committer.clone());
    Ok(())
}

/// True iff the commitment for this exact tuple was announced. Tuples whose
/// id could never be submitted verify as `false`.
pub fn verify(
    env: &Env,
    report_id: &String,
    report_hash: &BytesN<32>,
    nonce: u64,
    secret: &BytesN<32>,
) -> bool {
    match compute(env, report_id, report_hash, nonce, secret) {
        Ok(commitment) => exists(env, &commitment),
        Err(_) => false,
    }
}
