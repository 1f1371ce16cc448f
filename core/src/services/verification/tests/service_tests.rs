//! Lifecycle tests for the verification service

use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::email::EmailStatus;
use crate::errors::DomainError;
use crate::repositories::{EmailRepository, MockEmailRepository};
use crate::services::verification::{
    CodeAlphabet, CodeGenerator, VerificationConfig, VerificationService,
};

use super::mocks::MockMailer;

type TestService = VerificationService<MockEmailRepository, MockMailer>;

fn service_with_config(
    config: VerificationConfig,
) -> (Arc<TestService>, Arc<MockEmailRepository>, Arc<MockMailer>) {
    let repository = Arc::new(MockEmailRepository::new());
    let mailer = Arc::new(MockMailer::new());
    let service = Arc::new(VerificationService::new(
        repository.clone(),
        mailer.clone(),
        config,
    ));
    (service, repository, mailer)
}

fn service() -> (Arc<TestService>, Arc<MockEmailRepository>, Arc<MockMailer>) {
    service_with_config(VerificationConfig::default())
}

#[tokio::test]
async fn test_register_email_persists_hash_of_dispatched_code() {
    for (alphabet, length) in [
        (CodeAlphabet::UppercaseAlphanumeric, 6),
        (CodeAlphabet::UppercaseAlphanumeric, 8),
        (CodeAlphabet::Digits, 6),
    ] {
        let (service, repository, mailer) = service_with_config(VerificationConfig {
            alphabet,
            code_length: length,
            ..Default::default()
        });
        let owner = Uuid::new_v4();

        let issued = service
            .register_email(owner, "user@example.com")
            .await
            .unwrap();

        let code = mailer.last_code();
        assert_eq!(code.len(), length);

        let stored = repository
            .find_by_id(issued.record.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.status, EmailStatus::Pending);
        assert_eq!(
            stored.verification_code_hash.as_deref(),
            Some(CodeGenerator::hash_code(&code).as_str())
        );
        assert_eq!(stored.verification_code_expires_at, Some(issued.expires_at));
    }
}

#[tokio::test]
async fn test_register_email_rejects_invalid_address() {
    let (service, _, mailer) = service();
    let result = service.register_email(Uuid::new_v4(), "not-an-email").await;
    assert!(matches!(result, Err(DomainError::Validation { .. })));
    assert!(mailer.sent().is_empty());
}

#[tokio::test]
async fn test_dispatch_failure_persists_no_code() {
    let (service, repository, mailer) = service();
    let owner = Uuid::new_v4();
    mailer.set_fail(true);

    let result = service.register_email(owner, "user@example.com").await;
    assert!(matches!(result, Err(DomainError::DispatchFailed { .. })));

    // The record exists but carries no hash the user was never sent
    let records = repository.find_by_owner(owner).await.unwrap();
    assert_eq!(records.len(), 1);
    assert!(records[0].verification_code_hash.is_none());
    assert!(records[0].verification_code_expires_at.is_none());
}

#[tokio::test]
async fn test_verify_with_correct_code_activates_once() {
    let (service, repository, mailer) = service();
    let owner = Uuid::new_v4();
    let issued = service
        .register_email(owner, "user@example.com")
        .await
        .unwrap();
    let code = mailer.last_code();

    let verified = service
        .verify_code(owner, issued.record.id, &code)
        .await
        .unwrap();
    assert_eq!(verified.status, EmailStatus::Active);
    assert!(verified.verification_code_hash.is_none());
    assert!(verified.verification_code_expires_at.is_none());

    let stored = repository
        .find_by_id(issued.record.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, EmailStatus::Active);
    assert!(stored.verification_code_hash.is_none());

    // Replays hit the finalized record, not the code path
    let again = service.verify_code(owner, issued.record.id, &code).await;
    assert!(matches!(again, Err(DomainError::AlreadyFinalized)));
}

#[tokio::test]
async fn test_verify_is_case_insensitive_on_entry() {
    let (service, _, mailer) = service();
    let owner = Uuid::new_v4();
    let issued = service
        .register_email(owner, "user@example.com")
        .await
        .unwrap();

    let lowered = mailer.last_code().to_lowercase();
    let verified = service
        .verify_code(owner, issued.record.id, &lowered)
        .await
        .unwrap();
    assert_eq!(verified.status, EmailStatus::Active);
}

#[tokio::test]
async fn test_verify_with_wrong_code_leaves_record_pending() {
    let (service, repository, mailer) = service();
    let owner = Uuid::new_v4();
    let issued = service
        .register_email(owner, "user@example.com")
        .await
        .unwrap();

    let result = service.verify_code(owner, issued.record.id, "WRONG1").await;
    assert!(matches!(result, Err(DomainError::InvalidCode)));

    // Retry with the real code still works; no lockout
    let code = mailer.last_code();
    let stored = repository
        .find_by_id(issued.record.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(stored.status, EmailStatus::Pending);
    assert!(service
        .verify_code(owner, issued.record.id, &code)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_expired_code_rejected_regardless_of_correctness() {
    let (service, _, mailer) = service_with_config(VerificationConfig {
        code_expiration_minutes: 0,
        ..Default::default()
    });
    let owner = Uuid::new_v4();
    let issued = service
        .register_email(owner, "user@example.com")
        .await
        .unwrap();
    let code = mailer.last_code();

    let result = service.verify_code(owner, issued.record.id, &code).await;
    assert!(matches!(result, Err(DomainError::Expired)));
}

#[tokio::test]
async fn test_reissue_invalidates_previous_code() {
    let (service, _, mailer) = service();
    let owner = Uuid::new_v4();
    let issued = service
        .register_email(owner, "user@example.com")
        .await
        .unwrap();
    let first_code = mailer.last_code();

    service.issue_code(owner, issued.record.id).await.unwrap();
    let second_code = mailer.last_code();

    let stale = service
        .verify_code(owner, issued.record.id, &first_code)
        .await;
    match stale {
        // Overwhelmingly likely: the old plaintext no longer hashes to
        // the stored digest
        Err(DomainError::InvalidCode) => {}
        // Possible only if both draws produced the same code
        Ok(_) => assert_eq!(first_code, second_code),
        other => panic!("unexpected outcome: {:?}", other.err()),
    }

    assert!(service
        .verify_code(owner, issued.record.id, &second_code)
        .await
        .is_ok());
}

#[tokio::test]
async fn test_verify_unknown_record_is_not_found() {
    let (service, _, _) = service();
    let result = service
        .verify_code(Uuid::new_v4(), Uuid::new_v4(), "A1B2C3")
        .await;
    assert!(matches!(result, Err(DomainError::NotFound)));
}

#[tokio::test]
async fn test_verify_foreign_record_is_not_found() {
    let (service, _, mailer) = service();
    let owner = Uuid::new_v4();
    let issued = service
        .register_email(owner, "user@example.com")
        .await
        .unwrap();
    let code = mailer.last_code();

    let stranger = Uuid::new_v4();
    let result = service.verify_code(stranger, issued.record.id, &code).await;
    assert!(matches!(result, Err(DomainError::NotFound)));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_verification_has_exactly_one_winner() {
    for _ in 0..20 {
        let (service, _, mailer) = service();
        let owner = Uuid::new_v4();
        let issued = service
            .register_email(owner, "user@example.com")
            .await
            .unwrap();
        let code = mailer.last_code();
        let record_id = issued.record.id;

        let a = {
            let service = service.clone();
            let code = code.clone();
            tokio::spawn(async move { service.verify_code(owner, record_id, &code).await })
        };
        let b = {
            let service = service.clone();
            let code = code.clone();
            tokio::spawn(async move { service.verify_code(owner, record_id, &code).await })
        };

        let results = [a.await.unwrap(), b.await.unwrap()];
        let winners = results.iter().filter(|r| r.is_ok()).count();
        assert_eq!(winners, 1, "exactly one concurrent attempt may succeed");

        let loser = results.iter().find(|r| r.is_err()).unwrap();
        assert!(matches!(
            loser.as_ref().err().unwrap(),
            DomainError::AlreadyFinalized | DomainError::PreconditionFailed
        ));
    }
}

#[tokio::test]
async fn test_toggle_round_trip_preserves_record_contents() {
    let (service, repository, mailer) = service();
    let owner = Uuid::new_v4();
    let issued = service
        .register_email(owner, "user@example.com")
        .await
        .unwrap();
    let code = mailer.last_code();
    service
        .verify_code(owner, issued.record.id, &code)
        .await
        .unwrap();

    let before = repository
        .find_by_id(issued.record.id)
        .await
        .unwrap()
        .unwrap();

    let disabled = service.toggle_status(owner, issued.record.id).await.unwrap();
    assert_eq!(disabled.status, EmailStatus::Disabled);

    let restored = service.toggle_status(owner, issued.record.id).await.unwrap();
    assert_eq!(restored.status, EmailStatus::Active);
    assert_eq!(restored.email_address, before.email_address);
    assert_eq!(restored.created_at, before.created_at);
    assert_eq!(restored.verification_code_hash, before.verification_code_hash);
    assert_eq!(
        restored.verification_code_expires_at,
        before.verification_code_expires_at
    );
}

#[tokio::test]
async fn test_toggle_rejected_on_pending_record() {
    let (service, _, _) = service();
    let owner = Uuid::new_v4();
    let issued = service
        .register_email(owner, "user@example.com")
        .await
        .unwrap();

    let result = service.toggle_status(owner, issued.record.id).await;
    assert!(matches!(result, Err(DomainError::InvalidTransition { .. })));
}

#[tokio::test]
async fn test_reissue_rejected_after_finalization() {
    let (service, _, mailer) = service();
    let owner = Uuid::new_v4();
    let issued = service
        .register_email(owner, "user@example.com")
        .await
        .unwrap();
    let code = mailer.last_code();
    service
        .verify_code(owner, issued.record.id, &code)
        .await
        .unwrap();

    let result = service.issue_code(owner, issued.record.id).await;
    assert!(matches!(result, Err(DomainError::AlreadyFinalized)));
}
