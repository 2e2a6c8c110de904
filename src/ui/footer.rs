use crate::i18n::{Namespace, Translate, Translator};
use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use chrono::Datelike;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer<'a> {
    translator: Translator<'a>,
    year: i32,
}

impl<'a> Footer<'a> {
    /// Copyright year taken from the local clock.
    pub fn new(translator: Translator<'a>) -> Self {
        Self::with_year(translator, chrono::Local::now().year())
    }

    pub fn with_year(translator: Translator<'a>, year: i32) -> Self {
        Self { translator, year }
    }

    pub fn copyright(&self) -> String {
        let year = self.year.to_string();
        self.translator
            .t(Namespace::Footer, "date_variable", &[("year", year.as_str())])
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = format!(" {}", self.translator.t(Namespace::Footer, "key_hints", &[]));
        let mut version = format!("v{} ", VERSION);

        // Char count, not bytes: the separators are multi-byte.
        let hints_width = hints.chars().count();
        let content_width = area.width.saturating_sub(2) as usize;
        // The hints matter more than the version when space is short.
        if hints_width + version.chars().count() > content_width {
            version.clear();
        }
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version.chars().count());

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let lines = vec![
            Line::from(vec![
                Span::styled(hints, text_style),
                Span::styled(" ".repeat(padding), text_style),
                Span::styled(version, text_style),
            ]),
            Line::from(Span::styled(self.copyright(), text_style)).alignment(Alignment::Center),
        ];

        Paragraph::new(lines).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Catalog, Locale};
    use ratatui::buffer::Buffer;
    use ratatui::widgets::Widget;

    #[test]
    fn copyright_carries_the_year() {
        let catalog = Catalog::embedded(Locale::Pt).unwrap();
        let footer = Footer::with_year(catalog.translator(Locale::En), 2031);
        assert_eq!(footer.copyright(), "© 2031 2Logical. All rights reserved.");
    }

    fn rendered_rows(footer: &Footer<'_>, width: u16) -> Vec<String> {
        let area = Rect::new(0, 0, width, 4);
        let mut buffer = Buffer::empty(area);
        footer.widget(area).render(area, &mut buffer);
        buffer
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    #[test]
    fn hints_fit_at_a_hundred_columns_in_every_locale() {
        let catalog = Catalog::embedded(Locale::Pt).unwrap();
        for locale in Locale::ALL {
            let translator = catalog.translator(locale);
            let hints = translator.t(Namespace::Footer, "key_hints", &[]);
            let rows = rendered_rows(&Footer::with_year(translator, 2026), 100);
            assert!(rows[1].contains(&hints), "{locale} hints cut: {}", rows[1]);
            assert!(rows[1].contains(&format!("v{VERSION}")));
        }
    }

    #[test]
    fn version_is_dropped_before_hints_are_cut() {
        let catalog = Catalog::embedded(Locale::Pt).unwrap();
        let translator = catalog.translator(Locale::En);
        let hints = translator.t(Namespace::Footer, "key_hints", &[]);
        let width = hints.chars().count() as u16 + 4;
        let rows = rendered_rows(&Footer::with_year(translator, 2026), width);
        assert!(rows[1].contains(&hints));
        assert!(!rows[1].contains(&format!("v{VERSION}")));
    }
}
