#![no_std]

pub mod circuit_breaker;
pub mod commitment;
pub mod errors;
pub mod events;
pub mod rbac;
pub mod storage;
pub mod validation;

use registry_common::{nonce, ReentrancyGuard};
use soroban_sdk::{
    contract, contractimpl, log, symbol_short, Address, Bytes, BytesN, Env, String, Symbol, Vec,
};

pub use commitment::Commitment;
pub use errors::{ErrorCategory, ErrorSeverity, RegistryError};
pub use rbac::Role;
pub use storage::ReportRecord;
pub use validation::{MAX_BATCH_SIZE, MAX_REPORT_ID_LEN};

/// Storage keys for the contract
const DEPLOYER: Symbol = symbol_short!("DEPLOYER");
const INITIALIZED: Symbol = symbol_short!("INIT");

/// TTL constants for persistent storage (in ledgers)
pub(crate) const TTL_THRESHOLD: u32 = 17_280; // ~1 day
pub(crate) const TTL_EXTEND_TO: u32 = 518_400; // ~30 days

#[contract]
pub struct ReportRegistryContract;

#[contractimpl]
impl ReportRegistryContract {
    // ── Initialization ───────────────────────────────────────────────────────

    /// Initialize the registry. The deployer becomes both admin and intake
    /// officer.
    pub fn initialize(env: Env, admin: Address) -> Result<(), RegistryError> {
        if env.storage().instance().has(&INITIALIZED) {
            return Err(RegistryError::AlreadyInitialized);
        }

        validation::validate_role_address(&env, &admin)?;
        admin.require_auth();

        env.storage().instance().set(&DEPLOYER, &admin);
        env.storage().instance().set(&INITIALIZED, &true);
        rbac::grant_role(&env, &admin, &admin, Role::Admin);
        rbac::grant_role(&env, &admin, &admin, Role::IntakeOfficer);
        Self::extend_instance_ttl(&env);

        events::publish_initialized(&env, admin);

        Ok(())
    }

    /// Address that initialized the registry. Fixed at deployment; current
    /// admin rights are answered by `is_admin`.
    pub fn get_deployer(env: Env) -> Result<Address, RegistryError> {
        env.storage()
            .instance()
            .get(&DEPLOYER)
            .ok_or(RegistryError::NotInitialized)
    }

    /// Check if the registry is initialized
    pub fn is_initialized(env: Env) -> bool {
        env.storage().instance().has(&INITIALIZED)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }

    // ── Submission ───────────────────────────────────────────────────────────

    /// Anchor `report_hash` under `report_id`.
    ///
    /// The caller must be an intake officer, the registry must be active and
    /// `nonce` must be exactly one past the caller's last used nonce. A
    /// report id can be written once; later submissions under the same id
    /// fail with `AlreadyExists` and leave the record untouched.
    pub fn submit_report(
        env: Env,
        caller: Address,
        report_id: String,
        report_hash: BytesN<32>,
        nonce: u64,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        Self::require_initialized(&env)?;
        let _guard = ReentrancyGuard::enter(&env)?;

        if let Err(err) = Self::admit_submission(&env, &caller, &report_id, &report_hash, nonce) {
            log!(&env, "submit_report rejected", caller, report_id, err as u32);
            return Err(err);
        }

        let index = storage::report_count(&env);
        let record = ReportRecord {
            report_hash: report_hash.clone(),
            timestamp: env.ledger().timestamp(),
            submitter: caller.clone(),
            ledger_sequence: env.ledger().sequence(),
            index,
        };

        storage::append_report(&env, &report_id, &record);
        Self::extend_instance_ttl(&env);

        log!(&env, "report anchored", report_id, caller, index);
        events::publish_report_submitted(
            &env,
            report_id,
            report_hash,
            caller,
            record.timestamp,
            record.ledger_sequence,
            index,
        );

        Ok(())
    }

    /// Every precondition of `submit_report`. The nonce is consumed last, so
    /// nothing is written unless all other checks passed.
    fn admit_submission(
        env: &Env,
        caller: &Address,
        report_id: &String,
        report_hash: &BytesN<32>,
        nonce: u64,
    ) -> Result<(), RegistryError> {
        rbac::require_officer(env, caller)?;
        circuit_breaker::require_not_paused(env)?;
        validation::validate_report_id(report_id)?;
        validation::validate_digest(report_hash)?;
        if storage::has_report(env, report_id) {
            return Err(RegistryError::AlreadyExists);
        }
        nonce::consume_next_nonce(env, caller, nonce)?;
        Ok(())
    }

    /// Last nonce used by `officer`; the next submission must carry this + 1.
    pub fn get_officer_nonce(env: Env, officer: Address) -> u64 {
        nonce::current_nonce(&env, &officer)
    }

    // ── Commit / reveal ──────────────────────────────────────────────────────

    /// Pre-announce an opaque commitment to a future submission.
    pub fn commit_to_submission(
        env: Env,
        caller: Address,
        commitment: BytesN<32>,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        Self::require_initialized(&env)?;
        rbac::require_officer(&env, &caller)?;
        circuit_breaker::require_not_paused(&env)?;

        if let Err(err) = commitment::record(&env, &caller, commitment) {
            log!(&env, "commit rejected", caller, err as u32);
            return Err(err);
        }
        Self::extend_instance_ttl(&env);

        Ok(())
    }

    /// Recompute the commitment for a reveal tuple and check it was announced.
    pub fn verify_commitment(
        env: Env,
        report_id: String,
        report_hash: BytesN<32>,
        nonce: u64,
        secret: BytesN<32>,
    ) -> bool {
        commitment::verify(&env, &report_id, &report_hash, nonce, &secret)
    }

    /// Commitment digest for a reveal tuple, for callers preparing a commit.
    pub fn compute_commitment(
        env: Env,
        report_id: String,
        report_hash: BytesN<32>,
        nonce: u64,
        secret: BytesN<32>,
    ) -> Result<BytesN<32>, RegistryError> {
        commitment::compute(&env, &report_id, &report_hash, nonce, &secret)
    }

    /// Who announced `commitment` and when, if it was announced.
    pub fn get_commitment(env: Env, commitment: BytesN<32>) -> Option<Commitment> {
        commitment::get(&env, &commitment)
    }

    // ── Lookup ───────────────────────────────────────────────────────────────

    pub fn get_report(env: Env, report_id: String) -> Result<ReportRecord, RegistryError> {
        storage::load_report(&env, &report_id).ok_or(RegistryError::NotFound)
    }

    /// Existence probe. Never errors.
    pub fn report_exists(env: Env, report_id: String) -> bool {
        storage::has_report(&env, &report_id)
    }

    /// `(report_hash, timestamp, submitter, ledger_sequence)` for audit tooling.
    pub fn get_report_verification_data(
        env: Env,
        report_id: String,
    ) -> Result<(BytesN<32>, u64, Address, u32), RegistryError> {
        let record = Self::get_report(env, report_id)?;
        Ok((
            record.report_hash,
            record.timestamp,
            record.submitter,
            record.ledger_sequence,
        ))
    }

    /// SHA-256 of `content`, the digest `verify_report_integrity` checks against.
    pub fn compute_report_hash(env: Env, content: Bytes) -> BytesN<32> {
        env.crypto().sha256(&content).into()
    }

    /// Whether `raw_content` hashes to the digest anchored for `report_id`.
    pub fn verify_report_integrity(
        env: Env,
        report_id: String,
        raw_content: Bytes,
    ) -> Result<bool, RegistryError> {
        let record = storage::load_report(&env, &report_id).ok_or(RegistryError::NotFound)?;
        let digest: BytesN<32> = env.crypto().sha256(&raw_content).into();
        Ok(digest == record.report_hash)
    }

    // ── Enumeration ──────────────────────────────────────────────────────────

    pub fn get_total_reports(env: Env) -> u64 {
        storage::report_count(&env)
    }

    /// Every report id in submission order. Response size grows without
    /// bound; use `get_report_ids_batch` beyond small deployments.
    pub fn get_all_report_ids(env: Env) -> Result<Vec<String>, RegistryError> {
        let total = storage::report_count(&env);
        storage::report_ids_range(&env, 0, total)
    }

    /// Ids `[offset, min(offset + limit, total))` in submission order.
    pub fn get_report_ids_batch(
        env: Env,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<String>, RegistryError> {
        validation::validate_batch_len(limit)?;
        let total = storage::report_count(&env);
        if offset >= total {
            return Err(RegistryError::BatchBounds);
        }
        let end = offset.saturating_add(limit as u64).min(total);
        storage::report_ids_range(&env, offset, end)
    }

    // ── Role management ──────────────────────────────────────────────────────

    /// Grant the intake-officer role. Granting to an existing officer is a
    /// no-op.
    pub fn add_intake_officer(
        env: Env,
        caller: Address,
        officer: Address,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        Self::require_initialized(&env)?;
        rbac::require_admin(&env, &caller)?;
        validation::validate_role_address(&env, &officer)?;

        rbac::grant_role(&env, &caller, &officer, Role::IntakeOfficer);
        Self::extend_instance_ttl(&env);
        Ok(())
    }

    /// Revoke the intake-officer role. Reports the officer already anchored
    /// stay valid and unchanged.
    pub fn remove_intake_officer(
        env: Env,
        caller: Address,
        officer: Address,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        Self::require_initialized(&env)?;
        rbac::require_admin(&env, &caller)?;
        validation::validate_role_address(&env, &officer)?;

        rbac::revoke_role(&env, &caller, &officer, Role::IntakeOfficer);
        Self::extend_instance_ttl(&env);
        Ok(())
    }

    /// Grant the officer role to every address in `officers`. The whole batch
    /// is rejected if any address is invalid.
    pub fn add_intake_officers(
        env: Env,
        caller: Address,
        officers: Vec<Address>,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        Self::require_initialized(&env)?;
        rbac::require_admin(&env, &caller)?;
        Self::validate_role_batch(&env, &officers)?;

        for officer in officers.iter() {
            rbac::grant_role(&env, &caller, &officer, Role::IntakeOfficer);
        }
        Self::extend_instance_ttl(&env);
        Ok(())
    }

    /// Revoke the officer role from every address in `officers`.
    pub fn remove_intake_officers(
        env: Env,
        caller: Address,
        officers: Vec<Address>,
    ) -> Result<(), RegistryError> {
        caller.require_auth();
        Self::require_initialized(&env)?;
        rbac::require_admin(&env, &caller)?;
        Self::validate_role_batch(&env, &officers)?;

        for officer in officers.iter() {
            rbac::revoke_role(&env, &caller, &officer, Role::IntakeOfficer);
        }
        Self::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn add_admin(env: Env, caller: Address, admin: Address) -> Result<(), RegistryError> {
        caller.require_auth();
        Self::require_initialized(&env)?;
        rbac::require_admin(&env, &caller)?;
        validation::validate_role_address(&env, &admin)?;

        rbac::grant_role(&env, &caller, &admin, Role::Admin);
        Self::extend_instance_ttl(&env);
        Ok(())
    }

    /// Revoke admin rights. The last remaining admin cannot be removed.
    pub fn remove_admin(env: Env, caller: Address, admin: Address) -> Result<(), RegistryError> {
        caller.require_auth();
        Self::require_initialized(&env)?;
        rbac::require_admin(&env, &caller)?;
        validation::validate_role_address(&env, &admin)?;

        if rbac::has_role(&env, &admin, &Role::Admin) && rbac::admin_count(&env) <= 1 {
            return Err(RegistryError::LastAdmin);
        }

        rbac::revoke_role(&env, &caller, &admin, Role::Admin);
        Self::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn is_intake_officer(env: Env, account: Address) -> bool {
        rbac::has_role(&env, &account, &Role::IntakeOfficer)
    }

    pub fn is_admin(env: Env, account: Address) -> bool {
        rbac::has_role(&env, &account, &Role::Admin)
    }

    // ── Circuit breaker ──────────────────────────────────────────────────────

    pub fn pause(env: Env, caller: Address) -> Result<(), RegistryError> {
        caller.require_auth();
        Self::require_initialized(&env)?;
        circuit_breaker::pause(&env, &caller)?;
        Self::extend_instance_ttl(&env);
        log!(&env, "registry paused", caller);
        Ok(())
    }

    pub fn unpause(env: Env, caller: Address) -> Result<(), RegistryError> {
        caller.require_auth();
        Self::require_initialized(&env)?;
        circuit_breaker::unpause(&env, &caller)?;
        Self::extend_instance_ttl(&env);
        log!(&env, "registry unpaused", caller);
        Ok(())
    }

    pub fn is_paused(env: Env) -> bool {
        circuit_breaker::is_paused(&env)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), RegistryError> {
        if !env.storage().instance().has(&INITIALIZED) {
            return Err(RegistryError::NotInitialized);
        }
        Ok(())
    }

    fn validate_role_batch(env: &Env, accounts: &Vec<Address>) -> Result<(), RegistryError> {
        validation::validate_batch_len(accounts.len())?;
        for account in accounts.iter() {
            validation::validate_role_address(env, &account)?;
        }
        Ok(())
    }

    fn extend_instance_ttl(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
    }
}

#[cfg(test)]
mod test_commitment;
#[cfg(test)]
mod test_rbac;
