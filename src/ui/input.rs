use crate::i18n::Locale;
use crate::ui::app::App;
use crate::ui::locale::LocaleIntent;
use crate::ui::page::{PageIntent, View};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // Esc closes a toast first, and only quits when there is nothing to close.
    if key.code == KeyCode::Esc {
        if !app.dismiss_toast() {
            app.request_quit();
        }
        return;
    }

    if is_ctrl_char(key, 'l') {
        app.dispatch_locale(LocaleIntent::Cycle);
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.dispatch_page(PageIntent::ResetNumbers);
        return;
    }

    match key.code {
        KeyCode::F(1) => app.dispatch_locale(LocaleIntent::Switch(Locale::En)),
        KeyCode::F(2) => app.dispatch_locale(LocaleIntent::Switch(Locale::Pt)),
        KeyCode::F(3) => app.dispatch_locale(LocaleIntent::Switch(Locale::Es)),
        KeyCode::Tab | KeyCode::BackTab => app.dispatch_page(PageIntent::ToggleView),
        KeyCode::Left => app.dispatch_page(PageIntent::SelectView(View::Prime)),
        KeyCode::Right => app.dispatch_page(PageIntent::SelectView(View::Order)),
        KeyCode::Enter => app.dispatch_page(PageIntent::Submit),
        KeyCode::Backspace => app.dispatch_page(PageIntent::Backspace),
        KeyCode::Char(ch) if !has_command_modifier(key) => {
            app.dispatch_page(PageIntent::TypeChar(ch))
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
}
