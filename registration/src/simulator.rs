//! Submission simulator: pure validation and outcome computation.
//!
//! These functions have no side effects and touch no shared state. The
//! reducer calls [`evaluate`] at submit time with an id and timestamp from
//! the environment, then makes the result observable only after the delay
//! effect fires, which is how the artificial network latency is modeled.

use crate::types::{Participant, ParticipantId, SubmissionError, SubmissionOutcome};
use chrono::{DateTime, Utc};

/// Minimum length of the trimmed name
const MIN_NAME_LEN: usize = 2;

/// Validates a name/email pair.
///
/// Name is checked before email, so a submission with both fields invalid
/// resolves with `InvalidName`.
///
/// # Errors
///
/// - [`SubmissionError::InvalidName`] when the trimmed name is shorter than 2 characters
/// - [`SubmissionError::InvalidEmail`] when the email lacks an `'@'`
pub fn validate(name: &str, email: &str) -> Result<(), SubmissionError> {
    if name.trim().chars().count() < MIN_NAME_LEN {
        return Err(SubmissionError::InvalidName);
    }

    if !email.contains('@') {
        return Err(SubmissionError::InvalidEmail);
    }

    Ok(())
}

/// Computes what a submission resolves to.
///
/// On success produces a participant carrying `confirmed_id` and
/// `registered_at`; the caller commits it when the delay fires. Nothing is
/// mutated here. The stored name is the trimmed input; the email is kept
/// verbatim.
#[must_use]
pub fn evaluate(
    name: &str,
    email: &str,
    confirmed_id: ParticipantId,
    registered_at: DateTime<Utc>,
) -> SubmissionOutcome {
    match validate(name, email) {
        Ok(()) => SubmissionOutcome::Confirmed(Participant::new(
            confirmed_id,
            name.trim().to_string(),
            email.to_string(),
            registered_at,
        )),
        Err(error) => SubmissionOutcome::Rejected(error),
    }
}
