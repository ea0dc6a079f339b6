/// Something that happened and may change a [`UiState`](super::UiState).
///
/// Intents cross task boundaries (request tasks and the retry timer send
/// them over a channel), hence `Send + 'static`.
pub trait Intent: Send + 'static {}
