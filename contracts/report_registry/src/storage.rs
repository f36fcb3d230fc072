use soroban_sdk::{contracttype, symbol_short, Address, BytesN, Env, String, Symbol, Vec};

use crate::{RegistryError, TTL_EXTEND_TO, TTL_THRESHOLD};

const REPORT_COUNT: Symbol = symbol_short!("RPT_CTR");

/// Immutable anchor for one report. Presence in storage is the existence
/// flag: `load_report` returning `Some` means the id has been submitted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReportRecord {
    pub report_hash: BytesN<32>,
    pub timestamp: u64,
    pub submitter: Address,
    /// Ledger the submission was included in.
    pub ledger_sequence: u32,
    /// Zero-based submission order; also the slot in the id index.
    pub index: u64,
}

fn report_key(report_id: &String) -> (Symbol, String) {
    (symbol_short!("REPORT"), report_id.clone())
}

fn index_key(index: u64) -> (Symbol, u64) {
    (symbol_short!("RPT_IDX"), index)
}

pub fn report_count(env: &Env) -> u64 {
    env.storage().instance().get(&REPORT_COUNT).unwrap_or(0)
}

pub fn has_report(env: &Env, report_id: &String) -> bool {
    env.storage().persistent().has(&report_key(report_id))
}

pub fn load_report(env: &Env, report_id: &String) -> Option<ReportRecord> {
    env.storage().persistent().get(&report_key(report_id))
}

/// Writes a new record, appends its id to the index and bumps the counter.
/// Callers guarantee the id is not yet present.
pub fn append_report(env: &Env, report_id: &String, record: &ReportRecord) {
    let key = report_key(report_id);
    env.storage().persistent().set(&key, record);
    env.storage()
        .persistent()
        .extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);

    let idx_key = index_key(record.index);
    env.storage().persistent().set(&idx_key, report_id);
    env.storage()
        .persistent()
        .extend_ttl(&idx_key, TTL_THRESHOLD, TTL_EXTEND_TO);

    env.storage()
        .instance()
        .set(&REPORT_COUNT, &record.index.saturating_add(1));
}

/// Ids in submission order for `[start, end)`. Both bounds must already be
/// clamped to the current count. Every slot below the count is written
/// together with the counter, so a missing slot is `IndexCorrupted`.
pub fn report_ids_range(env: &Env, start: u64, end: u64) -> Result<Vec<String>, RegistryError> {
    let mut ids = Vec::new(env);
    for i in start..end {
        let id = env
            .storage()
            .persistent()
            .get::<_, String>(&index_key(i))
            .ok_or(RegistryError::IndexCorrupted)?;
        ids.push_back(id);
    }
    Ok(ids)
}
