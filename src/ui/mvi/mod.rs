//! Model-View-Intent (MVI) primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! Reducers stay pure. Anything with a side effect (showing a toast,
//! starting a worker) is queued in the state and drained by the app after
//! the dispatch returns.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
