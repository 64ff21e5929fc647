//! Wall-clock deadline shared by every layer of one decision.

use std::time::{Duration, Instant};

/// Longest window a deadline can span; larger windows are clamped to it.
pub const MAX_WINDOW: Duration = Duration::from_secs(60 * 60 * 24 * 365);

/// The instant a decision must stop searching.
///
/// Computed once per decision and copied down the recursion; it never moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Deadline(Instant);

impl Deadline {
    /// A deadline `window` from now.
    #[must_use]
    pub fn after(window: Duration) -> Self {
        Self::from_start(Instant::now(), window)
    }

    /// A deadline `window` after `start`, clamped to `MAX_WINDOW`.
    #[must_use]
    pub fn from_start(start: Instant, window: Duration) -> Self {
        let window = window.min(MAX_WINDOW);
        Self(start.checked_add(window).unwrap_or(start))
    }

    /// A deadline at an exact instant.
    #[must_use]
    pub fn at(instant: Instant) -> Self {
        Self(instant)
    }

    /// Whether the deadline has been reached.
    #[inline]
    #[must_use]
    pub fn expired(&self) -> bool {
        Instant::now() >= self.0
    }

    /// Time left, or zero once expired.
    #[must_use]
    pub fn remaining(&self) -> Duration {
        self.0.saturating_duration_since(Instant::now())
    }

    /// The underlying instant.
    #[must_use]
    pub fn instant(&self) -> Instant {
        self.0
    }
}
