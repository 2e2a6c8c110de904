use crate::i18n::{Namespace, Translate, Translator};
use crate::notice::ActiveToast;
use crate::numbers::CAPACITY;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{layout_regions, toast_rect};
use crate::ui::page::{PageState, PrimeStatus, View};
use crate::ui::theme::{
    level_color, BRAND_RED, FOCUS_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Tabs, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);
    let translator = app.translator();

    frame.render_widget(Header::new(translator, app.route()).widget(), header);
    frame.render_widget(Clear, body);
    draw_body(frame, body, &app.page, translator);
    frame.render_widget(Footer::new(translator).widget(footer), footer);

    if let Some(toast) = app.active_toast() {
        draw_toast(frame, body, toast);
    }
}

fn draw_body(frame: &mut Frame<'_>, area: Rect, page: &PageState, translator: Translator<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    let titles = [
        translator.t(Namespace::Common, "prime_number_check", &[]),
        translator.t(Namespace::Common, "order_numbers", &[]),
    ];
    let selected = match page.view {
        View::Prime => 0,
        View::Order => 1,
    };
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(HEADER_SEPARATOR))
        .highlight_style(Style::default().fg(BRAND_RED).add_modifier(Modifier::BOLD))
        .divider("│");
    frame.render_widget(tabs, rows[0]);

    let intro_key = match page.view {
        View::Prime => "prime_main_text",
        View::Order => "order_main_text",
    };
    frame.render_widget(
        Paragraph::new(translator.t(Namespace::Common, intro_key, &[]))
            .style(Style::default().fg(HEADER_TEXT))
            .wrap(Wrap { trim: true }),
        inset(rows[2]),
    );

    let field = inset(rows[3]);
    let field_title = match page.view {
        View::Prime => translator.t(Namespace::Common, "verify", &[]),
        View::Order => translator.t(Namespace::Common, "add_number", &[]),
    };
    let input = page.active_input();
    frame.render_widget(
        Paragraph::new(input.to_string()).block(
            Block::default()
                .title(Span::styled(
                    format!(" {field_title} "),
                    Style::default().fg(BRAND_RED),
                ))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(FOCUS_BORDER)),
        ),
        field,
    );
    if field.width > 2 && field.height > 2 {
        let offset = (input.chars().count() as u16).min(field.width - 3);
        frame.set_cursor_position((field.x + 1 + offset, field.y + 1));
    }

    let detail = match page.view {
        View::Prime => prime_detail(page, translator),
        View::Order => order_detail(page, translator),
    };
    frame.render_widget(
        Paragraph::new(detail).wrap(Wrap { trim: false }),
        inset(rows[4]),
    );
}

fn prime_detail(page: &PageState, translator: Translator<'_>) -> Vec<Line<'static>> {
    let line = match page.prime_status {
        PrimeStatus::Unknown => return Vec::new(),
        PrimeStatus::Checking { .. } => Line::from(Span::styled(
            translator.t(Namespace::Common, "checking", &[]),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::ITALIC),
        )),
        PrimeStatus::Prime => Line::from(Span::styled(
            translator.t(Namespace::Toasts, "is_prime", &[]),
            Style::default().fg(STATUS_OK),
        )),
        PrimeStatus::NotPrime => Line::from(Span::styled(
            translator.t(Namespace::Toasts, "isnt_prime", &[]),
            Style::default().fg(STATUS_ERROR),
        )),
    };
    vec![line]
}

fn order_detail(page: &PageState, translator: Translator<'_>) -> Vec<Line<'static>> {
    let text_style = Style::default().fg(HEADER_TEXT);
    let mut lines = Vec::new();
    if !page.numbers.is_empty() {
        lines.push(Line::from(Span::styled(
            format!(
                "{} ({}/{})",
                translator.t(Namespace::Common, "ordered_numbers", &[]),
                page.numbers.len(),
                CAPACITY
            ),
            text_style.add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(page.numbers.joined(), text_style)));
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        format!(
            "Enter: {}  │  Ctrl+R: {}",
            translator.t(Namespace::Common, "add_number", &[]),
            translator.t(Namespace::Common, "reset_numbers", &[]),
        ),
        Style::default().fg(HEADER_SEPARATOR),
    )));
    lines
}

fn draw_toast(frame: &mut Frame<'_>, body: Rect, toast: &ActiveToast) {
    let area = toast_rect(body, &toast.message);
    if area.width == 0 || area.height == 0 {
        return;
    }
    let color = level_color(toast.level);
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(toast.message.clone())
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            ),
        area,
    );
}

/// Two columns of margin on each side.
fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(2),
        y: area.y,
        width: area.width.saturating_sub(4),
        height: area.height,
    }
}
