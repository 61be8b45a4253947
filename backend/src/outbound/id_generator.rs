//! Process-local identifier allocation backed by an atomic counter.
//!
//! The counter is created once per process and injected wherever ids are
//! needed. Seed it from the store with [`AtomicIdGenerator::starting_after`]
//! so a restart against durable storage does not reissue existing ids.

use std::sync::atomic::{AtomicBool, AtomicI64, Ordering};

use crate::domain::ports::{IdGenerator, IdGeneratorError};
use crate::domain::{User, UserId};

/// Lock-free [`IdGenerator`] handing out consecutive integers.
///
/// # Examples
/// ```
/// use user_service::domain::ports::IdGenerator;
/// use user_service::outbound::AtomicIdGenerator;
///
/// let ids = AtomicIdGenerator::default();
/// assert_eq!(ids.next().expect("id").get(), 0);
/// assert_eq!(ids.next().expect("id").get(), 1);
/// ```
#[derive(Debug, Default)]
pub struct AtomicIdGenerator {
    next: AtomicI64,
    // Set once `i64::MAX` has been handed out.
    exhausted: AtomicBool,
}

impl AtomicIdGenerator {
    /// Start the sequence at `initial`.
    #[must_use]
    pub fn new(initial: i64) -> Self {
        Self {
            next: AtomicI64::new(initial),
            exhausted: AtomicBool::new(false),
        }
    }

    /// Start one past the largest identifier in `existing`, or at zero when
    /// `existing` is empty.
    ///
    /// # Errors
    /// Returns [`IdGeneratorError::Exhausted`] when the largest identifier is
    /// already `i64::MAX`.
    pub fn starting_after(existing: &[User]) -> Result<Self, IdGeneratorError> {
        match existing.iter().map(|user| user.id().get()).max() {
            None => Ok(Self::default()),
            Some(last) => last
                .checked_add(1)
                .map(Self::new)
                .ok_or_else(|| IdGeneratorError::exhausted(last)),
        }
    }
}

impl IdGenerator for AtomicIdGenerator {
    fn next(&self) -> Result<UserId, IdGeneratorError> {
        match self
            .next
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |current| {
                current.checked_add(1)
            }) {
            Ok(id) => Ok(UserId::new(id)),
            // The counter parks on `i64::MAX`; the first caller to get here
            // receives it and every later caller sees exhaustion.
            Err(last) if !self.exhausted.swap(true, Ordering::AcqRel) => Ok(UserId::new(last)),
            Err(last) => Err(IdGeneratorError::exhausted(last)),
        }
    }
}
