use soroban_sdk::{Address, Bytes, BytesN, Env, String};

use crate::RegistryError;

/// Maximum byte length of a report id.
pub const MAX_REPORT_ID_LEN: u32 = 64;

/// Largest page or role batch accepted in one call.
pub const MAX_BATCH_SIZE: u32 = 100;

pub fn validate_report_id(report_id: &String) -> Result<(), RegistryError> {
    let len = report_id.len();
    if len == 0 || len > MAX_REPORT_ID_LEN {
        return Err(RegistryError::InvalidId);
    }
    Ok(())
}

pub fn validate_digest(digest: &BytesN<32>) -> Result<(), RegistryError> {
    if is_zero_digest(digest) {
        return Err(RegistryError::InvalidHash);
    }
    Ok(())
}

pub fn is_zero_digest(digest: &BytesN<32>) -> bool {
    digest.to_array() == [0u8; 32]
}

/// The registry's own address is the one identity that can never be a
/// legitimate role holder; it stands in for the null address.
pub fn validate_role_address(env: &Env, account: &Address) -> Result<(), RegistryError> {
    if *account == env.current_contract_address() {
        return Err(RegistryError::InvalidAddress);
    }
    Ok(())
}

pub fn validate_batch_len(len: u32) -> Result<(), RegistryError> {
    if len == 0 || len > MAX_BATCH_SIZE {
        return Err(RegistryError::BatchBounds);
    }
    Ok(())
}

/// Raw UTF-8 bytes of a report id, for hashing.
pub fn report_id_bytes(env: &Env, report_id: &String) -> Result<Bytes, RegistryError> {
    validate_report_id(report_id)?;
    let len = report_id.len() as usize;
    let mut buf = [0u8; MAX_REPORT_ID_LEN as usize];
    report_id.copy_into_slice(&mut buf[..len]);
    Ok(Bytes::from_slice(env, &buf[..len]))
}
