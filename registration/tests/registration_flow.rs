//! Integration tests for the registration flow with Store
//!
//! Drives the full submission lifecycle end to end: optimistic insertion,
//! artificial delay, confirmation or rejection, and the derived view.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use formflow_runtime::Store;
use formflow_testing::{SequentialIdGenerator, test_clock};
use registration::{
    FeedbackKind, ParticipantId, RegistrationAction, RegistrationEnvironment, RegistrationReducer,
    RegistrationState, RegistrationView, SubmissionPhase,
};
use std::sync::Arc;
use std::time::Duration;
use uuid::Uuid;

type RegistrationStore = Store<
    RegistrationState,
    RegistrationAction,
    RegistrationEnvironment,
    RegistrationReducer,
>;

fn test_store() -> RegistrationStore {
    let env = RegistrationEnvironment::new(
        Arc::new(test_clock()),
        Arc::new(SequentialIdGenerator::new()),
    )
    .with_latency(Duration::from_millis(50));

    Store::new(RegistrationState::new(), RegistrationReducer::new(), env)
}

async fn fill_form(store: &RegistrationStore, name: &str, email: &str) {
    store
        .send(RegistrationAction::NameChanged {
            value: name.to_string(),
        })
        .await
        .unwrap();
    store
        .send(RegistrationAction::EmailChanged {
            value: email.to_string(),
        })
        .await
        .unwrap();
}

#[tokio::test]
async fn successful_submission_confirms_optimistic_entry() {
    let store = test_store();

    fill_form(&store, "Alice", "alice@example.com").await;
    let mut handle = store.send(RegistrationAction::Submit).await.unwrap();

    // Provisional entry is visible before the resolution lands
    let view = store.state(RegistrationView::derive).await;
    assert!(view.submitting);
    assert!(!view.submit_enabled);
    assert_eq!(view.participants.len(), 1);
    assert!(view.participants[0].id.is_provisional());

    handle
        .wait_with_timeout(Duration::from_secs(2))
        .await
        .unwrap();

    let view = store.state(RegistrationView::derive).await;
    assert!(!view.submitting);
    assert_eq!(view.participants.len(), 1);
    assert!(!view.participants[0].id.is_provisional());
    assert_eq!(view.participants[0].name, "Alice");
    assert_eq!(view.participants[0].email, "alice@example.com");

    // The sequential generator minted the provisional id first, then the
    // confirmed one
    assert_eq!(
        view.participants[0].id,
        ParticipantId::confirmed(Uuid::from_u128(2))
    );

    // Form cleared, success banner shown
    assert!(view.name.is_empty());
    assert!(view.email.is_empty());
    let banner = view.banner.unwrap();
    assert_eq!(banner.kind, FeedbackKind::Success);
    assert!(banner.message.contains("Alice"));
}

#[tokio::test]
async fn invalid_name_rejection_restores_the_list() {
    let store = test_store();

    fill_form(&store, "A", "a@example.com").await;
    let mut handle = store.send(RegistrationAction::Submit).await.unwrap();

    // Optimistic entry appears even though validation will fail
    let pending = store.state(|s| s.roster.overlay().len()).await;
    assert_eq!(pending, 1);

    handle
        .wait_with_timeout(Duration::from_secs(2))
        .await
        .unwrap();

    let view = store.state(RegistrationView::derive).await;
    assert!(view.participants.is_empty());
    assert_eq!(
        store.state(|s| s.phase).await,
        SubmissionPhase::Failed
    );

    let banner = view.banner.unwrap();
    assert_eq!(banner.kind, FeedbackKind::Error);
    assert_eq!(banner.message, "Name must be at least 2 characters long");

    // Form keeps its values for correction
    assert_eq!(view.name, "A");
}

#[tokio::test]
async fn invalid_email_rejection_reports_email_error() {
    let store = test_store();

    fill_form(&store, "Alice", "alice.example.com").await;
    let mut handle = store.send(RegistrationAction::Submit).await.unwrap();
    handle
        .wait_with_timeout(Duration::from_secs(2))
        .await
        .unwrap();

    let view = store.state(RegistrationView::derive).await;
    assert!(view.participants.is_empty());
    let banner = view.banner.unwrap();
    assert_eq!(banner.message, "Please enter a valid email address");
}

#[tokio::test]
async fn second_submit_while_pending_registers_once() {
    let store = test_store();

    fill_form(&store, "Carol", "carol@example.com").await;
    let mut handle = store.send(RegistrationAction::Submit).await.unwrap();
    // Second submit while the first is still in flight
    let _ = store.send(RegistrationAction::Submit).await.unwrap();

    handle
        .wait_with_timeout(Duration::from_secs(2))
        .await
        .unwrap();

    let view = store.state(RegistrationView::derive).await;
    assert_eq!(view.participants.len(), 1);
    assert_eq!(view.participants[0].name, "Carol");
}

#[tokio::test]
async fn sequential_registrations_keep_insertion_order() {
    let store = test_store();

    for (name, email) in [
        ("Alice", "alice@example.com"),
        ("Bob", "bob@example.com"),
    ] {
        fill_form(&store, name, email).await;
        let mut handle = store.send(RegistrationAction::Submit).await.unwrap();
        handle
            .wait_with_timeout(Duration::from_secs(2))
            .await
            .unwrap();
    }

    let names: Vec<String> = store
        .state(|s| s.roster.overlay().into_iter().map(|p| p.name).collect())
        .await;
    assert_eq!(names, vec!["Alice", "Bob"]);
    assert_eq!(store.state(|s| s.roster.confirmed_len()).await, 2);
}

#[tokio::test]
async fn submit_resolution_is_observable_as_terminal_action() {
    let store = test_store();

    fill_form(&store, "Alice", "alice@example.com").await;

    let resolution = store
        .send_and_wait_for(
            RegistrationAction::Submit,
            |a| matches!(a, RegistrationAction::SubmissionResolved { .. }),
            Duration::from_secs(2),
        )
        .await
        .unwrap();

    match resolution {
        RegistrationAction::SubmissionResolved { outcome, .. } => {
            assert!(outcome.is_success());
        }
        other => panic!("expected a resolution, got {other:?}"),
    }
}

#[tokio::test]
async fn registration_timestamp_comes_from_the_clock() {
    let store = test_store();

    fill_form(&store, "Alice", "alice@example.com").await;
    let mut handle = store.send(RegistrationAction::Submit).await.unwrap();
    handle
        .wait_with_timeout(Duration::from_secs(2))
        .await
        .unwrap();

    use formflow_core::environment::Clock;
    let expected = test_clock().now();
    let registered_at = store
        .state(|s| s.roster.confirmed()[0].registered_at)
        .await;
    assert_eq!(registered_at, expected);
}
