//! Reducer for catalog state transitions.
//!
//! ```text
//! Idle ──fetch──→ Loading ──ok──→ Loaded
//!                    │
//!                    └──err──→ Failed(retrying) ──tick──→ Loading(retrying)
//!                                   │
//!                                   └──cancel──→ Failed(not retrying)
//! ```

use crate::ui::mvi::Reducer;

use super::intent::CatalogIntent;
use super::state::{CatalogState, FetchPhase, RETRY_CANCELED_MESSAGE};

/// Reducer for catalog state transitions.
pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CatalogIntent::FetchRequested => {
                if state.is_retrying() {
                    return state;
                }
                start_fetch(state, false)
            }

            CatalogIntent::RetryTick => {
                // Ticks landing while an attempt is outstanding are dropped.
                if !state.is_retrying() || state.in_flight.is_some() {
                    return state;
                }
                start_fetch(state, true)
            }

            CatalogIntent::FetchSucceeded { generation, movies } => {
                if state.in_flight != Some(generation) {
                    return state;
                }
                let tombstones = std::mem::take(&mut state.tombstones);
                let pending = std::mem::take(&mut state.pending_adds);
                state.movies = movies
                    .into_iter()
                    .filter(|movie| !tombstones.contains(&movie.id))
                    .collect();
                for movie in pending {
                    if state.find(&movie.id).is_none() {
                        state.movies.push(movie);
                    }
                }
                state.in_flight = None;
                state.phase = FetchPhase::Loaded;
                state
            }

            CatalogIntent::FetchFailed {
                generation,
                message,
            } => {
                if state.in_flight != Some(generation) {
                    return state;
                }
                state.in_flight = None;
                clear_fetch_bookkeeping(&mut state);
                state.phase = FetchPhase::Failed {
                    error: message,
                    retrying: true,
                };
                state
            }

            CatalogIntent::CancelRetry => {
                if !state.is_retrying() {
                    return state;
                }
                // Bumping the generation orphans any attempt still in flight.
                state.generation += 1;
                state.in_flight = None;
                clear_fetch_bookkeeping(&mut state);
                state.phase = FetchPhase::Failed {
                    error: RETRY_CANCELED_MESSAGE.to_string(),
                    retrying: false,
                };
                state
            }

            CatalogIntent::DraftEdited { field, value } => {
                state.draft.set_field(field, value);
                state
            }

            CatalogIntent::MovieAdded { movie } => {
                // A fetch result may already carry a remotely created record.
                if state.find(&movie.id).is_none() {
                    if state.in_flight.is_some() {
                        state.pending_adds.push(movie.clone());
                    }
                    state.movies.push(movie);
                }
                state.draft = Default::default();
                settle_mutation_error(state)
            }

            CatalogIntent::AddFailed { message } => {
                state.draft = Default::default();
                fail_mutation(state, message)
            }

            CatalogIntent::MovieRemoved { id } => {
                state.movies.retain(|movie| movie.id != id);
                state.pending_adds.retain(|movie| movie.id != id);
                if state.in_flight.is_some() {
                    state.tombstones.push(id);
                }
                settle_mutation_error(state)
            }

            CatalogIntent::DeleteFailed { message } => fail_mutation(state, message),
        }
    }
}

fn start_fetch(mut state: CatalogState, retrying: bool) -> CatalogState {
    state.generation += 1;
    state.in_flight = Some(state.generation);
    clear_fetch_bookkeeping(&mut state);
    state.phase = FetchPhase::Loading { retrying };
    state
}

/// Forget mutations recorded against a fetch that is no longer awaited.
fn clear_fetch_bookkeeping(state: &mut CatalogState) {
    state.tombstones.clear();
    state.pending_adds.clear();
}

/// Surface a mutation failure without arming or disarming the retry loop.
fn fail_mutation(mut state: CatalogState, message: String) -> CatalogState {
    let retrying = state.is_retrying();
    state.phase = FetchPhase::Failed {
        error: message,
        retrying,
    };
    state
}

/// A successful mutation clears a settled error so the list shows again.
fn settle_mutation_error(mut state: CatalogState) -> CatalogState {
    if matches!(state.phase, FetchPhase::Failed { retrying: false, .. }) {
        state.phase = FetchPhase::Loaded;
    }
    state
}
