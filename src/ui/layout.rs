use ratatui::layout::Rect;

const HEADER_HEIGHT: u16 = 3;
/// Borders plus the key hints and copyright lines.
const FOOTER_HEIGHT: u16 = 4;
const TOAST_MAX_WIDTH: u16 = 48;

pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(HEADER_HEIGHT);
    let footer_height = FOOTER_HEIGHT.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Bottom-right corner of `body`, below the page content, tall enough for
/// `message` once wrapped at word boundaries.
pub fn toast_rect(body: Rect, message: &str) -> Rect {
    let wanted = (message.chars().count() as u16).saturating_add(4);
    let width = wanted.min(TOAST_MAX_WIDTH).min(body.width);
    let lines = wrapped_line_count(message, width.saturating_sub(2));
    let height = lines.saturating_add(2).min(body.height);
    Rect {
        x: body.x + body.width.saturating_sub(width + 1),
        y: body.y + body.height - height,
        width,
        height,
    }
}

/// Lines `text` takes when greedily word-wrapped to `width` columns.
/// Words wider than a line are split across lines.
fn wrapped_line_count(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut lines = 1usize;
    let mut used = 0usize;
    for word in text.split_whitespace() {
        let mut len = word.chars().count();
        if used > 0 && used + 1 + len <= width {
            used += 1 + len;
            continue;
        }
        if used > 0 {
            lines += 1;
        }
        while len > width {
            lines += 1;
            len -= width;
        }
        used = len;
    }
    u16::try_from(lines).unwrap_or(u16::MAX)
}
