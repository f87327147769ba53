//! Security-focused test suite.
//!
//! Verifies the properties the crate is built around: salted hashing,
//! tamper-evident claims, gate ordering, and oversubscription safety.
//! Run with: `cargo test --features mocks --test security`

#![cfg(feature = "mocks")]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]

use std::collections::HashMap;

use uuid::Uuid;
use vestibule::actions::{LoginAction, LoginRequest, RegisterAction, RegisterRequest};
use vestibule::crypto::{Argon2Hasher, PasswordHasher, SecretString};
use vestibule::jwt::{JwtConfig, JwtService};
use vestibule::{
    AuthError, CapacityRepository, InviteRegistry, MockCapacityRepository,
    MockPrincipalRepository, Role, RoleGuard,
};

const SECRET: &str = "test-secret-key-for-jwt-testing!!";

fn jwt() -> JwtService {
    JwtService::new(JwtConfig::new(SECRET).unwrap())
}

fn invites() -> InviteRegistry {
    InviteRegistry::new(HashMap::from([
        ("trainer-secret-123".to_owned(), Role::Trainer),
        ("admin-secret-456".to_owned(), Role::Admin),
    ]))
}

fn register_request(email: &str) -> RegisterRequest {
    RegisterRequest {
        name: Some("John".to_owned()),
        email: Some(email.to_owned()),
        password: Some(SecretString::new("secure_password_123")),
        ..RegisterRequest::default()
    }
}

// =============================================================================
// Password Security
// =============================================================================

#[test]
fn argon2_produces_different_hashes_for_same_password() {
    let hasher = Argon2Hasher::default();
    let password = SecretString::new("testpassword123");

    let hash1 = hasher.hash(&password).unwrap();
    let hash2 = hasher.hash(&password).unwrap();

    // Same password should produce different hashes due to random salt
    assert_ne!(hash1, hash2);

    // But both should verify correctly
    assert!(hasher.verify(&password, &hash1).unwrap());
    assert!(hasher.verify(&password, &hash2).unwrap());
}

#[test]
fn argon2_wrong_password_fails_verification() {
    let hasher = Argon2Hasher::default();
    let hash = hasher.hash(&SecretString::new("correctpassword")).unwrap();

    assert!(!hasher
        .verify(&SecretString::new("wrongpassword"), &hash)
        .unwrap());
}

// =============================================================================
// Token Tamper Evidence
// =============================================================================

#[test]
fn splicing_an_elevated_payload_invalidates_the_signature() {
    let service = jwt();
    let pid = Uuid::new_v4();

    let member_token = service.issue("john@example.com", Role::Member, pid).unwrap();
    let admin_token = service.issue("john@example.com", Role::Admin, pid).unwrap();

    // Graft the admin payload onto the member token's signature
    let member_parts: Vec<&str> = member_token.split('.').collect();
    let admin_parts: Vec<&str> = admin_token.split('.').collect();
    let forged = format!(
        "{}.{}.{}",
        admin_parts[0], admin_parts[1], member_parts[2]
    );

    assert_eq!(service.decode(&forged).unwrap_err(), AuthError::TokenInvalid);
}

#[test]
fn tokens_signed_elsewhere_are_rejected() {
    let other = JwtService::new(JwtConfig::new("a-different-32-byte-signing-key!!").unwrap());
    let token = other
        .issue("john@example.com", Role::Admin, Uuid::new_v4())
        .unwrap();

    assert_eq!(jwt().decode(&token).unwrap_err(), AuthError::TokenInvalid);
}

// =============================================================================
// Gate Ordering
// =============================================================================

#[test]
fn gate_authenticates_before_inspecting_roles() {
    let guard = RoleGuard::new(jwt(), [Role::Trainer, Role::Admin]).unwrap();

    // A garbled token never reaches the role check
    assert_eq!(
        guard.authorize(Some("not.a.token")).unwrap_err(),
        AuthError::Unauthenticated
    );
    assert_eq!(guard.authorize(None).unwrap_err(), AuthError::Unauthenticated);

    // A valid token with the wrong role is a distinct, role-aware denial
    let member = jwt()
        .issue("john@example.com", Role::Member, Uuid::new_v4())
        .unwrap();
    assert!(matches!(
        guard.authorize(Some(&member)).unwrap_err(),
        AuthError::Forbidden {
            role: Role::Member,
            ..
        }
    ));
}

// =============================================================================
// Oversubscription Safety
// =============================================================================

#[tokio::test]
async fn last_slot_has_exactly_one_winner() {
    let store = MockCapacityRepository::new().with_capacity("hiit-42", 1);

    let first = tokio::spawn({
        let store = store.clone();
        async move { store.try_claim("hiit-42").await.unwrap() }
    });
    let second = tokio::spawn({
        let store = store.clone();
        async move { store.try_claim("hiit-42").await.unwrap() }
    });

    let (first, second) = (first.await.unwrap(), second.await.unwrap());
    assert!(first ^ second, "exactly one concurrent claimer must win");
    assert_eq!(store.remaining("hiit-42"), Some(0));
}

#[tokio::test]
async fn counter_never_goes_negative_under_contention() {
    let store = MockCapacityRepository::new().with_capacity("pilates-9", 3);

    let mut handles = Vec::new();
    for _ in 0..10 {
        let store = store.clone();
        handles.push(tokio::spawn(
            async move { store.try_claim("pilates-9").await.unwrap() },
        ));
    }

    let mut wins = 0;
    for handle in handles {
        if handle.await.unwrap() {
            wins += 1;
        }
    }

    assert_eq!(wins, 3);
    assert_eq!(store.remaining("pilates-9"), Some(0));
}

// =============================================================================
// End-to-end scenarios
// =============================================================================

#[tokio::test]
async fn register_without_invite_yields_member_token() {
    let repo = MockPrincipalRepository::new();
    let action = RegisterAction::new(repo, invites(), jwt());

    let registration = action
        .execute(register_request("john@example.com"))
        .await
        .unwrap();

    assert_eq!(registration.principal.role, Role::Member);

    // An independent decoder sees the same role
    let claims = jwt().decode(&registration.token).unwrap();
    assert_eq!(claims.role, Role::Member);
}

#[tokio::test]
async fn trainer_invite_then_duplicate_email() {
    let repo = MockPrincipalRepository::new();
    let action = RegisterAction::new(repo, invites(), jwt());

    let registration = action
        .execute(RegisterRequest {
            token: Some("trainer-secret-123".to_owned()),
            ..register_request("coach@example.com")
        })
        .await
        .unwrap();
    assert_eq!(registration.principal.role, Role::Trainer);

    let result = action.execute(register_request("coach@example.com")).await;
    assert_eq!(result.unwrap_err(), AuthError::EmailTaken);
}

#[tokio::test]
async fn login_mismatch_then_success() {
    let repo = MockPrincipalRepository::new();
    RegisterAction::new(repo.clone(), invites(), jwt())
        .execute(register_request("john@example.com"))
        .await
        .unwrap();

    let login = LoginAction::new(repo, jwt());

    let wrong = login
        .execute(LoginRequest {
            email: Some("john@example.com".to_owned()),
            password: Some(SecretString::new("wrong")),
            ..LoginRequest::default()
        })
        .await;
    assert_eq!(wrong.unwrap_err(), AuthError::InvalidCredentials);

    let ok = login
        .execute(LoginRequest {
            email: Some("john@example.com".to_owned()),
            password: Some(SecretString::new("secure_password_123")),
            ..LoginRequest::default()
        })
        .await
        .unwrap();
    assert_eq!(jwt().decode(&ok.token).unwrap().role, Role::Member);
}

#[tokio::test]
async fn phone_login_rejected_regardless_of_account_state() {
    let login = LoginAction::new(MockPrincipalRepository::new(), jwt());

    let result = login
        .execute(LoginRequest {
            phone: Some("+971-504-555-0100".to_owned()),
            password: Some(SecretString::new("anything")),
            ..LoginRequest::default()
        })
        .await;
    assert_eq!(result.unwrap_err(), AuthError::PhoneLoginUnsupported);
}
