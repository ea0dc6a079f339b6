//! Movie catalog feature module.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Catalog state and fetch phase
//! - `intent.rs` - User actions, request results, retry ticks
//! - `reducer.rs` - State transitions
//! - `view.rs` - Which body branch is shown

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::CatalogIntent;
pub use reducer::CatalogReducer;
pub use state::{CatalogState, FetchPhase, RETRY_CANCELED_MESSAGE};
pub use view::{catalog_view, fetch_action, CatalogView, MovieItem, EMPTY_MESSAGE, LOADING_MESSAGE};
