//! Model-View-Intent primitives.
//!
//! Screen-facing state lives in plain values that change only by running
//! an intent through a reducer:
//!
//! ```text
//! Command ──→ Intent ──→ Reducer ──→ State ──→ Observers
//!                ↑                                │
//!                └──── fetch result ──────────────┘
//! ```

/// Snapshot an observer can render on its own.
///
/// States are cloned out to observers and compared to detect changes. The
/// `Default` bound lets a reducer take ownership of the current value.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}

/// A navigation command or the outcome of the work one started.
pub trait Intent: Send + 'static {}

/// The only place state transitions happen.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Pure `(State, Intent) -> State` transition.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
