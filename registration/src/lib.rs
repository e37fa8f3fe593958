//! Registration form feature built on the Formflow architecture.
//!
//! A name/email intake form with client-side validation, a simulated
//! asynchronous submission, and an optimistically updated participant list.
//! It demonstrates:
//!
//! - An explicit submission state machine (`Idle → Pending → Succeeded/Failed`)
//! - Optimistic list insertion with a `{authoritative, provisional}` roster
//! - Artificial latency via `Effect::Delay`
//! - A derived view snapshot for the UI shell
//! - Testing with `ReducerTest` and a store integration suite
//!
//! # Quick Start
//!
//! ```no_run
//! use registration::{
//!     RegistrationAction, RegistrationEnvironment, RegistrationReducer, RegistrationState,
//!     RegistrationView,
//! };
//! use formflow_core::environment::{RandomIdGenerator, SystemClock};
//! use formflow_runtime::Store;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let env = RegistrationEnvironment::new(Arc::new(SystemClock), Arc::new(RandomIdGenerator));
//! let store = Store::new(RegistrationState::new(), RegistrationReducer::new(), env);
//!
//! // Fill the form and submit
//! store.send(RegistrationAction::NameChanged { value: "Alice".into() }).await?;
//! store.send(RegistrationAction::EmailChanged { value: "alice@example.com".into() }).await?;
//! let mut handle = store.send(RegistrationAction::Submit).await?;
//!
//! // The provisional entry is visible immediately
//! let view = store.state(RegistrationView::derive).await;
//! assert_eq!(view.participants.len(), 1);
//!
//! // After the artificial delay the entry is confirmed
//! handle.wait().await;
//! let view = store.state(RegistrationView::derive).await;
//! assert!(!view.participants[0].id.is_provisional());
//! # Ok(())
//! # }
//! ```

pub mod reducer;
pub mod simulator;
pub mod types;
pub mod view;

// Re-export commonly used types
pub use reducer::{RegistrationEnvironment, RegistrationReducer};
pub use types::{
    Feedback, FeedbackKind, Participant, ParticipantId, RegistrationAction, RegistrationForm,
    RegistrationState, Roster, SubmissionError, SubmissionOutcome, SubmissionPhase,
};
pub use view::RegistrationView;
