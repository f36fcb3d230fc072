#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::{RegistryError, ReportRegistryContract, ReportRegistryContractClient};
use soroban_sdk::{testutils::Address as _, vec, Address, BytesN, Env, String};

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
fn test_admin_grants_and_revokes_officer() {
    let (env, client, admin) = setup();
    let officer = Address::generate(&env);

    assert!(!client.is_intake_officer(&officer));
    client.add_intake_officer(&admin, &officer);
    assert!(client.is_intake_officer(&officer));
    assert!(!client.is_admin(&officer));

    client.remove_intake_officer(&admin, &officer);
    assert!(!client.is_intake_officer(&officer));
}

#[test]
fn test_regrant_and_revoke_of_non_member_are_noops() {
    let (env, client, admin) = setup();
    let officer = Address::generate(&env);

    client.add_intake_officer(&admin, &officer);
    client.add_intake_officer(&admin, &officer);
    assert!(client.is_intake_officer(&officer));

    let never_officer = Address::generate(&env);
    client.remove_intake_officer(&admin, &never_officer);
    assert!(!client.is_intake_officer(&never_officer));
}

#[test]
fn test_non_admin_cannot_manage_roles() {
    let (env, client, admin) = setup();
    let officer = Address::generate(&env);
    let target = Address::generate(&env);
    client.add_intake_officer(&admin, &officer);

    let res = client.try_add_intake_officer(&officer, &target);
    assert_eq!(res.unwrap_err().unwrap(), RegistryError::Unauthorized);

    let res = client.try_remove_intake_officer(&officer, &admin);
    assert_eq!(res.unwrap_err().unwrap(), RegistryError::Unauthorized);

    let res = client.try_add_admin(&officer, &target);
    assert_eq!(res.unwrap_err().unwrap(), RegistryError::Unauthorized);

    assert!(!client.is_intake_officer(&target));
    assert!(client.is_intake_officer(&admin));
}

#[test]
fn test_registry_address_is_rejected() {
    let (_env, client, admin) = setup();
    let registry = client.address.clone();

    let res = client.try_add_intake_officer(&admin, &registry);
    assert_eq!(res.unwrap_err().unwrap(), RegistryError::InvalidAddress);

    let res = client.try_remove_intake_officer(&admin, &registry);
    assert_eq!(res.unwrap_err().unwrap(), RegistryError::InvalidAddress);

    let res = client.try_add_admin(&admin, &registry);
    assert_eq!(res.unwrap_err().unwrap(), RegistryError::InvalidAddress);
}

#[test]
fn test_revoked_officer_reports_remain_anchored() {
    let (env, client, admin) = setup();
    let officer = Address::generate(&env);
    client.add_intake_officer(&admin, &officer);

    let id = String::from_str(&env, "RPT-1");
    let hash = BytesN::from_array(&env, &[3u8; 32]);
    client.submit_report(&officer, &id, &hash, &1);
    let before = client.get_report(&id);

    client.remove_intake_officer(&admin, &officer);

    assert_eq!(client.get_report(&id), before);
    assert_eq!(client.get_report(&id).submitter, officer);

    let res = client.try_submit_report(&officer, &String::from_str(&env, "RPT-2"), &hash, &2);
    assert_eq!(res.unwrap_err().unwrap(), RegistryError::Unauthorized);
}

#[test]
fn test_reinstated_officer_keeps_nonce_sequence() {
    let (env, client, admin) = setup();
    let officer = Address::generate(&env);
    let hash = BytesN::from_array(&env, &[3u8; 32]);
    client.add_intake_officer(&admin, &officer);
    client.submit_report(&officer, &String::from_str(&env, "RPT-1"), &hash, &1);

    client.remove_intake_officer(&admin, &officer);
    client.add_intake_officer(&admin, &officer);

    let res = client.try_submit_report(&officer, &String::from_str(&env, "RPT-2"), &hash, &1);
    assert_eq!(res.unwrap_err().unwrap(), RegistryError::InvalidNonce);
    client.submit_report(&officer, &String::from_str(&env, "RPT-2"), &hash, &2);
}

#[test]
fn test_batch_officer_management() {
    let (env, client, admin) = setup();
    let a = Address::generate(&env);
    let b = Address::generate(&env);
    let c = Address::generate(&env);

    client.add_intake_officers(&admin, &vec![&env, a.clone(), b.clone(), c.clone()]);
    assert!(client.is_intake_officer(&a));
    assert!(client.is_intake_officer(&b));
    assert!(client.is_intake_officer(&c));

    client.remove_intake_officers(&admin, &vec![&env, a.clone(), c.clone()]);
    assert!(!client.is_intake_officer(&a));
    assert!(client.is_intake_officer(&b));
    assert!(!client.is_intake_officer(&c));
}

#[test]
fn test_batch_with_invalid_address_writes_nothing() {
    let (env, client, admin) = setup();
    let a = Address::generate(&env);
    let registry = client.address.clone();

    let res = client.try_add_intake_officers(&admin, &vec![&env, a.clone(), registry]);
    assert_eq!(res.unwrap_err().unwrap(), RegistryError::InvalidAddress);
    assert!(!client.is_intake_officer(&a));
}

#[test]
fn test_batch_size_limits() {
    let (env, client, admin) = setup();

    let res = client.try_add_intake_officers(&admin, &soroban_sdk::Vec::new(&env));
    assert_eq!(res.unwrap_err().unwrap(), RegistryError::BatchBounds);

    let mut oversized = soroban_sdk::Vec::new(&env);
    for _ in 0..=crate::MAX_BATCH_SIZE {
        oversized.push_back(Address::generate(&env));
    }
    let res = client.try_add_intake_officers(&admin, &oversized);
    assert_eq!(res.unwrap_err().unwrap(), RegistryError::BatchBounds);

    let res = client.try_remove_intake_officers(&admin, &soroban_sdk::Vec::new(&env));
    assert_eq!(res.unwrap_err().unwrap(), RegistryError::BatchBounds);
}

#[test]
fn test_admin_management() {
    let (env, client, admin) = setup();
    let second = Address::generate(&env);

    client.add_admin(&admin, &second);
    assert!(client.is_admin(&second));
    // Admin rights do not imply officer rights
    assert!(!client.is_intake_officer(&second));

    client.remove_admin(&second, &admin);
    assert!(!client.is_admin(&admin));
    // The deployer record is historical, not a live admin check
    assert_eq!(client.get_deployer(), admin);

    let res = client.try_pause(&admin);
    assert_eq!(res.unwrap_err().unwrap(), RegistryError::Unauthorized);
    client.pause(&second);
}

#[test]
fn test_last_admin_cannot_be_removed() {
    let (env, client, admin) = setup();

    let res = client.try_remove_admin(&admin, &admin);
    assert_eq!(res.unwrap_err().unwrap(), RegistryError::LastAdmin);
    assert!(client.is_admin(&admin));

    // Removing a non-admin is a no-op, not a last-admin violation
    let stranger = Address::generate(&env);
    client.remove_admin(&admin, &stranger);
    assert!(client.is_admin(&admin));
}
