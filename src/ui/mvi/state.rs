/// Marker trait for view state. States are cloned rather than shared and
/// hold everything the view needs to render.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
