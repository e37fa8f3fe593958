//! # Formflow Testing
//!
//! Testing utilities and helpers for the Formflow architecture.
//!
//! This crate provides:
//! - Mock implementations of Environment traits
//! - A fluent Given-When-Then harness for pure reducer tests
//! - Assertion helpers for effects
//!
//! ## Example
//!
//! ```ignore
//! use formflow_testing::{ReducerTest, assertions, test_clock};
//!
//! #[test]
//! fn test_field_edit() {
//!     ReducerTest::new(RegistrationReducer)
//!         .with_env(test_environment())
//!         .given_state(RegistrationState::new())
//!         .when_action(RegistrationAction::NameChanged { value: "Alice".into() })
//!         .then_state(|state| {
//!             assert_eq!(state.form.name, "Alice");
//!         })
//!         .then_effects(assertions::assert_no_effects)
//!         .run();
//! }
//! ```

mod reducer_test;

pub use reducer_test::{ReducerTest, assertions};

use chrono::{DateTime, Utc};
use formflow_core::environment::{Clock, IdGenerator};

/// Mock implementations of Environment traits
///
/// Deterministic stand-ins for the production `SystemClock` and
/// `RandomIdGenerator`, so reducer tests can assert on exact timestamps
/// and identifiers.
pub mod mocks {
    use super::{Clock, DateTime, IdGenerator, Utc};
    use std::sync::atomic::{AtomicU64, Ordering};
    use uuid::Uuid;

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use formflow_testing::mocks::FixedClock;
    /// use formflow_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    ///
    /// # Panics
    ///
    /// This function will panic if the hardcoded timestamp fails to parse,
    /// which should never happen in practice.
    #[must_use]
    #[allow(clippy::expect_used)]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(
            DateTime::parse_from_rfc3339("2025-01-01T00:00:00Z")
                .expect("hardcoded timestamp should always parse")
                .with_timezone(&Utc),
        )
    }

    /// Deterministic id generator for tests
    ///
    /// Yields UUIDs built from an incrementing counter, so the first id a
    /// reducer mints is always `Uuid::from_u128(1)`, the second
    /// `Uuid::from_u128(2)`, and so on.
    ///
    /// # Example
    ///
    /// ```
    /// use formflow_testing::mocks::SequentialIdGenerator;
    /// use formflow_core::environment::IdGenerator;
    /// use uuid::Uuid;
    ///
    /// let ids = SequentialIdGenerator::new();
    /// assert_eq!(ids.generate(), Uuid::from_u128(1));
    /// assert_eq!(ids.generate(), Uuid::from_u128(2));
    /// ```
    #[derive(Debug, Default)]
    pub struct SequentialIdGenerator {
        counter: AtomicU64,
    }

    impl SequentialIdGenerator {
        /// Create a generator whose first id is `Uuid::from_u128(1)`
        #[must_use]
        pub const fn new() -> Self {
            Self {
                counter: AtomicU64::new(0),
            }
        }
    }

    impl IdGenerator for SequentialIdGenerator {
        fn generate(&self) -> Uuid {
            let next = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
            Uuid::from_u128(u128::from(next))
        }
    }
}

// Re-export commonly used items
pub use mocks::{FixedClock, SequentialIdGenerator, test_clock};
