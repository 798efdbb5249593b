/// Marker trait for overlay state objects.
///
/// States are replaced wholesale by reducers, so they must be cheap to
/// compare and have a hidden default.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
