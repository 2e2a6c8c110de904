mod intent;
mod reducer;
mod state;

pub use intent::LocaleIntent;
pub use reducer::LocaleReducer;
pub use state::LocaleState;
