//! Unidirectional state primitives for the catalog screen.
//!
//! Every change to what the screen shows goes through one path:
//!
//! ```text
//! key press / HTTP result / retry tick
//!        │
//!        ▼
//!     Intent ──→ Reducer::reduce(state, intent) ──→ State ──→ draw
//! ```
//!
//! Reducers stay free of I/O. Whoever dispatches an intent owns the side
//! effects the new state asks for.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
