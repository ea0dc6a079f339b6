use super::intent::Intent;
use super::state::UiState;

/// Pure transition function from one state to the next.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    /// Consume `state` and return its successor. Must not spawn, sleep, or
    /// generate ids.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
