//! Tests for the activation ticket manager

use tokio::time::{advance, Duration};
use uuid::Uuid;

use crate::domain::entities::activation::ACTIVATION_TICKET_LENGTH;
use crate::errors::{ActivationError, DomainError};
use crate::repositories::MockSessionStore;
use crate::services::activation::ActivationManager;

const TTL: u64 = 900;

fn manager() -> ActivationManager<MockSessionStore> {
    ActivationManager::new(MockSessionStore::new(), TTL)
}

#[tokio::test]
async fn test_ticket_redeems_to_its_subject() {
    let manager = manager();
    let subject = Uuid::new_v4();

    let ticket = manager.create_ticket(subject).await.unwrap();
    assert_eq!(ticket.len(), ACTIVATION_TICKET_LENGTH);
    assert!(ticket.chars().all(|c| c.is_ascii_alphanumeric()));

    let redeemed = manager.redeem(&ticket, "email-verify").await.unwrap();
    assert_eq!(redeemed, subject);
}

#[tokio::test]
async fn test_ticket_is_one_shot() {
    let manager = manager();
    let ticket = manager.create_ticket(Uuid::new_v4()).await.unwrap();

    manager.redeem(&ticket, "email-verify").await.unwrap();
    let err = manager.redeem(&ticket, "email-verify").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Activation(ActivationError::TicketNotFound)
    ));
}

#[tokio::test]
async fn test_unknown_ticket_is_rejected() {
    let manager = manager();
    let err = manager
        .redeem("doesnotexist", "email-verify")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        DomainError::Activation(ActivationError::TicketNotFound)
    ));
}

#[tokio::test]
async fn test_unknown_purpose_leaves_ticket_intact() {
    let manager = manager();
    let subject = Uuid::new_v4();
    let ticket = manager.create_ticket(subject).await.unwrap();

    let err = manager.redeem(&ticket, "password-reset").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Activation(ActivationError::UnknownPurpose { .. })
    ));

    // The failed attempt did not consume the ticket
    let redeemed = manager.redeem(&ticket, "email-verify").await.unwrap();
    assert_eq!(redeemed, subject);
}

#[tokio::test(start_paused = true)]
async fn test_ticket_expires() {
    let manager = manager();
    let ticket = manager.create_ticket(Uuid::new_v4()).await.unwrap();

    advance(Duration::from_secs(TTL + 1)).await;
    let err = manager.redeem(&ticket, "email-verify").await.unwrap_err();
    assert!(matches!(
        err,
        DomainError::Activation(ActivationError::TicketNotFound)
    ));
}

#[tokio::test(start_paused = true)]
async fn test_ticket_still_valid_just_before_expiry() {
    let manager = manager();
    let subject = Uuid::new_v4();
    let ticket = manager.create_ticket(subject).await.unwrap();

    advance(Duration::from_secs(TTL - 1)).await;
    assert_eq!(
        manager.redeem(&ticket, "email-verify").await.unwrap(),
        subject
    );
}

#[tokio::test]
async fn test_tickets_are_unique() {
    let manager = manager();
    let subject = Uuid::new_v4();

    let a = manager.create_ticket(subject).await.unwrap();
    let b = manager.create_ticket(subject).await.unwrap();
    assert_ne!(a, b);
}
