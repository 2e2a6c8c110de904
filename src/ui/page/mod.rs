mod intent;
mod reducer;
mod state;

pub use intent::PageIntent;
pub use reducer::PageReducer;
pub use state::{PageEffect, PageState, PrimeStatus, View};
