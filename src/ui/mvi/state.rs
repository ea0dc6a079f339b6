/// Snapshot of everything a screen needs to draw itself.
///
/// `Default` is the state before the first intent; `PartialEq` lets tests
/// compare whole snapshots.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
