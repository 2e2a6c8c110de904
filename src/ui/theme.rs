use ratatui::style::Color;

use crate::notice::NoticeLevel;

pub const BRAND_RED: Color = Color::Rgb(0xff, 0x40, 0x40);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const FOCUS_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_WARN: Color = Color::Rgb(0xea, 0xb3, 0x08);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

pub fn level_color(level: NoticeLevel) -> Color {
    match level {
        NoticeLevel::Success => STATUS_OK,
        NoticeLevel::Warning => STATUS_WARN,
        NoticeLevel::Error => STATUS_ERROR,
    }
}
