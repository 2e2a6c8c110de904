/// Marker trait for intents: key presses, button actions, worker results.
pub trait Intent: Send + 'static {}
