pub mod app;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod locale;
pub mod mvi;
pub mod page;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod worker;

pub use runtime::run;
