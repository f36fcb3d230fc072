#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::{RegistryError, ReportRegistryContract, ReportRegistryContractClient};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{Address, Bytes, BytesN, Env, String};

fn setup() -> (Env, ReportRegistryContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(ReportRegistryContract, ());
    let client = ReportRegistryContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    client.initialize(&admin);

    (env, client, admin)
}

#[test]
fn test_commit_then_reveal() {
    let (env, client, admin) = setup();
    env.ledger().set_timestamp(500);

    let id = String::from_str(&env, "RPT-1");
    let hash = client.compute_report_hash(&Bytes::from_slice(&env, b"x"));
    let secret = BytesN::from_array(&env, &[42u8; 32]);

    let commitment = client.compute_commitment(&id, &hash, &1, &secret);
    assert!(!client.verify_commitment(&id, &hash, &1, &secret));

    client.commit_to_submission(&admin, &commitment);
    assert!(client.verify_commitment(&id, &hash, &1, &secret));

    let stored = client.get_commitment(&commitment).unwrap();
    assert_eq!(stored.committer, admin);
    assert_eq!(stored.timestamp, 500);

    // Reveal through a normal submission; the commitment is not consumed
    client.submit_report(&admin, &id, &hash, &1);
    assert!(client.verify_commitment(&id, &hash, &1, &secret));
}

#[test]
fn test_any_changed_field_fails_verification() {
    let (env, client, admin) = setup();
    let id = String::from_str(&env, "RPT-1");
    let hash = BytesN::from_array(&env, &[1u8; 32]);
    let secret = BytesN::from_array(&env, &[2u8; 32]);
    client.commit_to_submission(&admin, &client.compute_commitment(&id, &hash, &1, &secret));

    let other_id = String::from_str(&env, "RPT-2");
    let other_hash = BytesN::from_array(&env, &[9u8; 32]);
    let other_secret = BytesN::from_array(&env, &[3u8; 32]);

    assert!(!client.verify_commitment(&other_id, &hash, &1, &secret));
    assert!(!client.verify_commitment(&id, &other_hash, &1, &secret));
    assert!(!client.verify_commitment(&id, &hash, &2, &secret));
    assert!(!client.verify_commitment(&id, &hash, &1, &other_secret));
}

#[test]
fn test_commitment_encoding_is_unambiguous_in_nonce() {
    let (env, client, _admin) = setup();
    let id = String::from_str(&env, "RPT-1");
    let hash = BytesN::from_array(&env, &[1u8; 32]);
    let secret = BytesN::from_array(&env, &[2u8; 32]);

    assert_ne!(
        client.compute_commitment(&id, &hash, &1, &secret),
        client.compute_commitment(&id, &hash, &256, &secret)
    );
}

#[test]
fn test_duplicate_commitment_is_rejected() {
    let (env, client, admin) = setup();
    let commitment = BytesN::from_array(&env, &[7u8; 32]);
    client.commit_to_submission(&admin, &commitment);

    let res = client.try_commit_to_submission(&admin, &commitment);
    assert_eq!(res.unwrap_err().unwrap(), RegistryError::DuplicateCommitment);
}

#[test]
fn test_zero_commitment_is_rejected() {
    let (env, client, admin) = setup();
    let res = client.try_commit_to_submission(&admin, &BytesN::from_array(&env, &[0u8; 32]));
    assert_eq!(res.unwrap_err().unwrap(), RegistryError::InvalidHash);
}

#[test]
fn test_non_officer_cannot_commit() {
    let (env, client, _admin) = setup();
    let stranger = Address::generate(&env);

    let commitment = BytesN::from_array(&env, &[7u8; 32]);
    let res = client.try_commit_to_submission(&stranger, &commitment);
    assert_eq!(res.unwrap_err().unwrap(), RegistryError::Unauthorized);
    assert!(client.get_commitment(&commitment).is_none());
}

#[test]
fn test_invalid_id_cannot_be_committed_or_verified() {
    let (env, client, _admin) = setup();
    let hash = BytesN::from_array(&env, &[1u8; 32]);
    let secret = BytesN::from_array(&env, &[2u8; 32]);
    let empty = String::from_str(&env, "");

    let res = client.try_compute_commitment(&empty, &hash, &1, &secret);
    assert_eq!(res.unwrap_err().unwrap(), RegistryError::InvalidId);
    assert!(!client.verify_commitment(&empty, &hash, &1, &secret));
}
