pub mod cli;
pub mod config;
pub mod i18n;
pub mod logging;
pub mod notice;
pub mod numbers;
pub mod shutdown;
pub mod ui;
