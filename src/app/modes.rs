//! Phase types for the interactive components.
//!
//! # State Machine
//!
//! The search box moves through three phases per query:
//!
//! ```text
//! Idle ──keystroke──▶ Debouncing ──quiet period──▶ Fetching ──response──▶ Idle
//!                        ▲   │                        │
//!                        └───┴──────keystroke─────────┘
//! ```
//!
//! A keystroke in `Debouncing` restarts the timer; a keystroke in `Fetching`
//! supersedes the in-flight request, whose response is then discarded.

/// Lifecycle phase of the search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// Nothing scheduled or in flight.
    #[default]
    Idle,

    /// A query change is waiting for the quiet period to end.
    Debouncing,

    /// A lookup for the current generation is in flight.
    Fetching,
}

/// What happened to an in-flight mutation when its response arrived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MutationOutcome {
    /// The response belonged to a submit that was closed or superseded.
    Ignored,

    /// The change was applied; the dialog closed.
    Applied(super::dispatcher::AppliedChange),

    /// The change failed; the dialog stays open with a notice.
    Failed,
}
