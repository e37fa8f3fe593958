//! Domain types for the registration form feature.
//!
//! A registration is a name/email pair submitted through the form. While a
//! submission is in flight the participant appears in the displayed list as a
//! provisional entry; confirmation swaps it for an entry with a server-style
//! id, rejection drops it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Opaque identifier for a participant.
///
/// Two kinds exist: a provisional id assigned when an entry is shown
/// optimistically (prefixed so it can never collide with a confirmed one),
/// and a confirmed id assigned when the submission resolves successfully.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantId(String);

impl ParticipantId {
    /// Prefix carried by every provisional id
    const PROVISIONAL_PREFIX: &'static str = "pending-";

    /// Creates a provisional id from a UUID
    #[must_use]
    pub fn provisional(id: Uuid) -> Self {
        Self(format!("{}{id}", Self::PROVISIONAL_PREFIX))
    }

    /// Creates a confirmed id from a UUID
    #[must_use]
    pub fn confirmed(id: Uuid) -> Self {
        Self(id.to_string())
    }

    /// Whether this id belongs to a not-yet-confirmed entry
    #[must_use]
    pub fn is_provisional(&self) -> bool {
        self.0.starts_with(Self::PROVISIONAL_PREFIX)
    }

    /// Returns the identifier as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A registered (or optimistically shown) participant
///
/// Immutable after creation; confirmation replaces the provisional record
/// rather than mutating it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Unique identifier (provisional or confirmed)
    pub id: ParticipantId,
    /// Display name as entered in the form
    pub name: String,
    /// Email address as entered in the form
    pub email: String,
    /// When the registration was made
    pub registered_at: DateTime<Utc>,
}

impl Participant {
    /// Creates a new participant record
    #[must_use]
    pub const fn new(
        id: ParticipantId,
        name: String,
        email: String,
        registered_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            email,
            registered_at,
        }
    }
}

/// Validation failures a submission can resolve with
///
/// Both are local, recoverable errors: the form is re-presented with an
/// inline message and nothing is committed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum SubmissionError {
    /// Trimmed name is shorter than 2 characters
    #[error("Name must be at least 2 characters long")]
    InvalidName,

    /// Email does not contain an '@' character
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Result of a resolved submission
///
/// A participant is present exactly when the submission succeeded; the enum
/// encodes that in the type instead of a `bool` plus an `Option`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionOutcome {
    /// Validation passed; the participant was assigned a confirmed id
    Confirmed(Participant),
    /// Validation failed; nothing was registered
    Rejected(SubmissionError),
}

impl SubmissionOutcome {
    /// Whether the submission succeeded
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Confirmed(_))
    }

    /// Human-readable message for the feedback banner
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Confirmed(participant) => {
                format!("Registration successful! Welcome, {}.", participant.name)
            }
            Self::Rejected(error) => error.to_string(),
        }
    }

    /// The confirmed participant, present iff the submission succeeded
    #[must_use]
    pub const fn participant(&self) -> Option<&Participant> {
        match self {
            Self::Confirmed(participant) => Some(participant),
            Self::Rejected(_) => None,
        }
    }
}

/// The two text inputs of the form
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationForm {
    /// Name field, as typed
    pub name: String,
    /// Email field, as typed
    pub email: String,
}

impl RegistrationForm {
    /// Submit guard: both fields non-empty (the HTML `required` rule).
    ///
    /// Whitespace-only input passes this guard and fails validation after
    /// the delay instead; the two rules are deliberately distinct.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.name.is_empty() && !self.email.is_empty()
    }

    /// Clears both fields (after a successful submission)
    pub fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
    }
}

/// Submission lifecycle phase of the form
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionPhase {
    /// No submission attempted since the last edit cycle
    #[default]
    Idle,
    /// A submission is in flight; the submit control is disabled
    Pending,
    /// The last submission was confirmed
    Succeeded,
    /// The last submission was rejected
    Failed,
}

impl SubmissionPhase {
    /// Whether a submission is currently in flight
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Kind of post-submission feedback
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackKind {
    /// Submission confirmed
    Success,
    /// Submission rejected
    Error,
}

/// Post-submission feedback banner content
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    /// Whether this is a success or error banner
    pub kind: FeedbackKind,
    /// Human-readable message
    pub message: String,
}

impl Feedback {
    /// Creates a success banner
    #[must_use]
    pub const fn success(message: String) -> Self {
        Self {
            kind: FeedbackKind::Success,
            message,
        }
    }

    /// Creates an error banner
    #[must_use]
    pub const fn error(message: String) -> Self {
        Self {
            kind: FeedbackKind::Error,
            message,
        }
    }
}

/// Optimistic participant list
///
/// Holds the authoritative (confirmed) list and the provisional entries
/// shown before their submissions resolve. The displayed list is always
/// derived via [`Roster::overlay`], never stored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    authoritative: Vec<Participant>,
    provisional: Vec<Participant>,
}

impl Roster {
    /// Creates an empty roster
    #[must_use]
    pub const fn new() -> Self {
        Self {
            authoritative: Vec::new(),
            provisional: Vec::new(),
        }
    }

    /// Shows a participant optimistically, without touching the
    /// authoritative list.
    ///
    /// Safe to call while another confirmation is outstanding.
    pub fn add_provisional(&mut self, participant: Participant) {
        self.provisional.push(participant);
    }

    /// Commits a confirmed participant.
    ///
    /// Removes the matching provisional entry and appends the confirmed
    /// record to the authoritative list in one step, so the overlay never
    /// shows a duplicate.
    pub fn commit(&mut self, provisional_id: &ParticipantId, confirmed: Participant) {
        self.provisional.retain(|p| p.id != *provisional_id);
        self.authoritative.push(confirmed);
    }

    /// Drops all provisional entries; the overlay becomes exactly the
    /// authoritative list. Idempotent.
    pub fn reset(&mut self) {
        self.provisional.clear();
    }

    /// Derives the displayed list: authoritative entries followed by
    /// provisional ones, in stable insertion order.
    #[must_use]
    pub fn overlay(&self) -> Vec<Participant> {
        let mut list = Vec::with_capacity(self.authoritative.len() + self.provisional.len());
        list.extend(self.authoritative.iter().cloned());
        list.extend(self.provisional.iter().cloned());
        list
    }

    /// The confirmed participants
    #[must_use]
    pub fn confirmed(&self) -> &[Participant] {
        &self.authoritative
    }

    /// Number of confirmed participants
    #[must_use]
    pub fn confirmed_len(&self) -> usize {
        self.authoritative.len()
    }

    /// Number of outstanding provisional entries
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.provisional.len()
    }
}

/// State of the registration feature
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RegistrationState {
    /// Current form field values
    pub form: RegistrationForm,
    /// Submission lifecycle phase
    pub phase: SubmissionPhase,
    /// Confirmed + provisional participants
    pub roster: Roster,
    /// Banner shown after the last resolved submission
    pub feedback: Option<Feedback>,
}

impl RegistrationState {
    /// Creates a fresh state: empty form, empty roster, idle phase
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

/// Actions the registration feature processes
///
/// User intents come from the form surface; `SubmissionResolved` is fed back
/// by the delay effect that models network latency.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum RegistrationAction {
    /// The name input changed
    NameChanged {
        /// New field value
        value: String,
    },

    /// The email input changed
    EmailChanged {
        /// New field value
        value: String,
    },

    /// The submit control was activated
    Submit,

    /// The simulated submission resolved after its artificial delay
    SubmissionResolved {
        /// Id of the provisional entry this resolution belongs to
        provisional_id: ParticipantId,
        /// What the submission resolved to
        outcome: SubmissionOutcome,
    },
}
