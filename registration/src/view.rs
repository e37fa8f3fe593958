//! Derived view snapshot for the form surface.
//!
//! The UI shell is an external collaborator: it sends actions into the store
//! and renders whatever [`RegistrationView::derive`] returns. Nothing in the
//! snapshot is stored; it is recomputed from state on every render.

use crate::types::{Feedback, Participant, RegistrationState};

/// Everything the form surface needs to render one frame
#[derive(Clone, Debug, PartialEq)]
pub struct RegistrationView {
    /// Current value of the name input
    pub name: String,
    /// Current value of the email input
    pub email: String,
    /// Whether the submit control is enabled
    pub submit_enabled: bool,
    /// Whether a submission is in flight (spinner / "Submitting…" label)
    pub submitting: bool,
    /// Feedback banner from the last resolved submission, if any
    pub banner: Option<Feedback>,
    /// Participants to display: confirmed entries plus provisional ones
    pub participants: Vec<Participant>,
}

impl RegistrationView {
    /// Derives a render snapshot from the current state.
    ///
    /// The submit control is disabled while a submission is pending or while
    /// either field is empty.
    #[must_use]
    pub fn derive(state: &RegistrationState) -> Self {
        let submitting = state.phase.is_pending();

        Self {
            name: state.form.name.clone(),
            email: state.form.email.clone(),
            submit_enabled: state.form.can_submit() && !submitting,
            submitting,
            banner: state.feedback.clone(),
            participants: state.roster.overlay(),
        }
    }
}
