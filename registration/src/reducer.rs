//! Reducer logic for the registration form.
//!
//! Implements the submission state machine: field edits, the guarded
//! submit transition with its optimistic roster insert, and the resolution
//! that arrives after the artificial delay.

use crate::simulator;
use crate::types::{
    Feedback, Participant, ParticipantId, RegistrationAction, RegistrationState, SubmissionOutcome,
    SubmissionPhase,
};
use formflow_core::{
    SmallVec,
    effect::Effect,
    environment::{Clock, IdGenerator},
    reducer::Reducer,
    smallvec,
};
use std::sync::Arc;
use std::time::Duration;

/// Default artificial submission latency, long enough that the pending
/// state is visible like a real network round trip
const DEFAULT_LATENCY: Duration = Duration::from_millis(1500);

/// Environment dependencies for the registration reducer
#[derive(Clone)]
pub struct RegistrationEnvironment {
    /// Clock for registration timestamps
    pub clock: Arc<dyn Clock>,
    /// Generator for provisional and confirmed ids
    pub ids: Arc<dyn IdGenerator>,
    /// Artificial delay before a submission resolves
    pub latency: Duration,
}

impl RegistrationEnvironment {
    /// Creates an environment with the default 1.5s artificial latency
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            clock,
            ids,
            latency: DEFAULT_LATENCY,
        }
    }

    /// Overrides the artificial latency (demos and tests)
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

/// Reducer for the registration form
#[derive(Clone, Debug, Default)]
pub struct RegistrationReducer;

impl RegistrationReducer {
    /// Creates a new registration reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for RegistrationReducer {
    type State = RegistrationState;
    type Action = RegistrationAction;
    type Environment = RegistrationEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            RegistrationAction::NameChanged { value } => {
                state.form.name = value;
                smallvec![Effect::None]
            }

            RegistrationAction::EmailChanged { value } => {
                state.form.email = value;
                smallvec![Effect::None]
            }

            RegistrationAction::Submit => {
                // Single-writer invariant: exactly one submission in flight
                // per form instance.
                if state.phase.is_pending() {
                    tracing::warn!("Submit ignored: a submission is already in flight");
                    return smallvec![Effect::None];
                }

                if !state.form.can_submit() {
                    tracing::debug!("Submit ignored: form fields are not all filled");
                    return smallvec![Effect::None];
                }

                let now = env.clock.now();
                let provisional_id = ParticipantId::provisional(env.ids.generate());
                let confirmed_id = ParticipantId::confirmed(env.ids.generate());

                // The outcome is computed now but only observable after the
                // delay, which models the network round trip.
                let outcome = simulator::evaluate(
                    &state.form.name,
                    &state.form.email,
                    confirmed_id,
                    now,
                );

                // The optimistic entry carries the same trimmed name the
                // confirmed record will, so confirmation never changes the
                // displayed text.
                let provisional = Participant::new(
                    provisional_id.clone(),
                    state.form.name.trim().to_string(),
                    state.form.email.clone(),
                    now,
                );

                state.roster.add_provisional(provisional);
                state.phase = SubmissionPhase::Pending;
                state.feedback = None;

                tracing::info!(
                    provisional_id = %provisional_id,
                    latency_ms = env.latency.as_millis(),
                    "Submission started"
                );

                smallvec![Effect::Delay {
                    duration: env.latency,
                    action: Box::new(RegistrationAction::SubmissionResolved {
                        provisional_id,
                        outcome,
                    }),
                }]
            }

            RegistrationAction::SubmissionResolved {
                provisional_id,
                outcome,
            } => {
                if !state.phase.is_pending() {
                    // Unreachable through the public flow (the Pending guard
                    // serializes submissions) but the reducer stays total.
                    tracing::warn!(
                        provisional_id = %provisional_id,
                        "Resolution ignored: no submission in flight"
                    );
                    return smallvec![Effect::None];
                }

                let message = outcome.message();
                match outcome {
                    SubmissionOutcome::Confirmed(participant) => {
                        tracing::info!(
                            id = %participant.id,
                            name = %participant.name,
                            "Submission confirmed"
                        );
                        state.roster.commit(&provisional_id, participant);
                        state.form.clear();
                        state.phase = SubmissionPhase::Succeeded;
                        state.feedback = Some(Feedback::success(message));
                    }
                    SubmissionOutcome::Rejected(error) => {
                        tracing::warn!(error = %error, "Submission rejected");
                        state.roster.reset();
                        state.phase = SubmissionPhase::Failed;
                        state.feedback = Some(Feedback::error(message));
                    }
                }

                smallvec![Effect::None]
            }
        }
    }
}
