//! Shared test helpers.

#![allow(dead_code, unused_imports)]

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use primeorder::config::ToastConfig;
use primeorder::i18n::{Catalog, Locale, Route};
use primeorder::ui::app::App;
use primeorder::ui::input::handle_key;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;

/// App on the default root route with built-in translations. Prime checks
/// run inline, so results are visible as soon as a dispatch returns.
pub fn make_app() -> App {
    make_app_at(Route::root(Locale::Pt, Locale::Pt), &ToastConfig::default())
}

pub fn make_app_at(route: Route, toast: &ToastConfig) -> App {
    let catalog = Catalog::embedded(route.default_locale()).expect("embedded bundles load");
    App::new(Arc::new(catalog), route, toast)
}

pub fn make_app_in(locale: Locale) -> App {
    make_app_at(Route::root(locale, Locale::Pt), &ToastConfig::default())
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub fn release_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new_with_kind(code, KeyModifiers::NONE, KeyEventKind::Release)
}

/// Feed `text` through the key handler one character at a time.
pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        handle_key(app, press_key(KeyCode::Char(ch)));
    }
}

/// Write `content` to a fresh `config.toml` in a temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Active toast message, if any.
pub fn toast_text(app: &App) -> Option<String> {
    app.active_toast().map(|toast| toast.message.clone())
}
