use crate::i18n::{Locale, Namespace, Route, Translate, Translator};
use crate::ui::theme::{
    ACTIVE_HIGHLIGHT, BRAND_RED, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Title, language buttons and the current route.
pub struct Header<'a> {
    translator: Translator<'a>,
    route: &'a Route,
}

impl<'a> Header<'a> {
    pub fn new(translator: Translator<'a>, route: &'a Route) -> Self {
        Self { translator, route }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let active = self.translator.locale();

        let mut spans = vec![
            Span::raw("  "),
            Span::styled(
                self.translator
                    .t(Namespace::Common, "challenge_response_text", &[]),
                Style::default().fg(BRAND_RED).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(
                format!("{}: ", self.translator.t(Namespace::Common, "language", &[])),
                text_style,
            ),
        ];
        spans.extend(Locale::ALL.into_iter().map(|locale| locale_button(locale, active)));
        spans.push(Span::styled("  │  ", separator_style));
        spans.push(Span::styled(
            self.route.as_path(),
            text_style.add_modifier(Modifier::DIM),
        ));

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

fn locale_button(locale: Locale, active: Locale) -> Span<'static> {
    let label = format!("[{}]", locale.label());
    if locale == active {
        Span::styled(
            label,
            Style::default()
                .fg(BRAND_RED)
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(label, Style::default().fg(HEADER_SEPARATOR))
    }
}
