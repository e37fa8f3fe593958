//! Registration form demo binary
//!
//! Drives the registration state machine through a successful submission, a
//! validation failure, and a rejected double-submit, rendering the derived
//! view snapshot after each step.

use formflow_core::environment::{RandomIdGenerator, SystemClock};
use formflow_runtime::{Store, StoreError};
use registration::{
    FeedbackKind, RegistrationAction, RegistrationEnvironment, RegistrationReducer,
    RegistrationState, RegistrationView,
};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn render(view: &RegistrationView) {
    println!("  name:  [{}]", view.name);
    println!("  email: [{}]", view.email);

    let submit = if view.submitting {
        "[ Submitting... ] (disabled)"
    } else if view.submit_enabled {
        "[ Register ]"
    } else {
        "[ Register ] (disabled)"
    };
    println!("  {submit}");

    if let Some(banner) = &view.banner {
        let mark = match banner.kind {
            FeedbackKind::Success => "ok:",
            FeedbackKind::Error => "error:",
        };
        println!("  {mark} {}", banner.message);
    }

    println!("  participants ({}):", view.participants.len());
    for participant in &view.participants {
        let tag = if participant.id.is_provisional() {
            " (pending)"
        } else {
            ""
        };
        println!("    - {} <{}>{tag}", participant.name, participant.email);
    }
    println!();
}

#[tokio::main]
async fn main() -> Result<(), StoreError> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "registration=info,formflow_runtime=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Registration Form: Formflow Architecture ===\n");

    let env = RegistrationEnvironment::new(Arc::new(SystemClock), Arc::new(RandomIdGenerator))
        .with_latency(Duration::from_millis(300));
    let store = Store::new(RegistrationState::new(), RegistrationReducer::new(), env);

    println!("Initial state:");
    let view = store.state(RegistrationView::derive).await;
    render(&view);

    // --- Successful submission ---------------------------------------------
    println!(">>> Typing name and email, then submitting");
    store
        .send(RegistrationAction::NameChanged {
            value: "Alice".to_string(),
        })
        .await?;
    store
        .send(RegistrationAction::EmailChanged {
            value: "alice@example.com".to_string(),
        })
        .await?;
    let mut handle = store.send(RegistrationAction::Submit).await?;

    println!("While the submission is in flight (optimistic entry visible):");
    let view = store.state(RegistrationView::derive).await;
    render(&view);

    handle.wait().await;
    println!("After the submission resolved:");
    let view = store.state(RegistrationView::derive).await;
    render(&view);

    // --- Validation failure -------------------------------------------------
    println!(">>> Submitting a one-character name");
    store
        .send(RegistrationAction::NameChanged {
            value: "B".to_string(),
        })
        .await?;
    store
        .send(RegistrationAction::EmailChanged {
            value: "bob@example.com".to_string(),
        })
        .await?;
    let mut handle = store.send(RegistrationAction::Submit).await?;
    handle.wait().await;

    println!("After the failed submission (provisional entry dropped):");
    let view = store.state(RegistrationView::derive).await;
    render(&view);

    // --- Double submit ------------------------------------------------------
    println!(">>> Submitting twice in a row (second is rejected while pending)");
    store
        .send(RegistrationAction::NameChanged {
            value: "Carol".to_string(),
        })
        .await?;
    store
        .send(RegistrationAction::EmailChanged {
            value: "carol@example.com".to_string(),
        })
        .await?;
    let mut handle = store.send(RegistrationAction::Submit).await?;
    let _ = store.send(RegistrationAction::Submit).await?;
    handle.wait().await;

    println!("After both submits (exactly one Carol):");
    let view = store.state(RegistrationView::derive).await;
    render(&view);

    store.shutdown(Duration::from_secs(5)).await?;
    println!("=== Done ===");
    Ok(())
}
