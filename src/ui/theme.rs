use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x38, 0xbd, 0xf8);
pub const BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const MUTED_TEXT: Color = Color::Rgb(0x6b, 0x72, 0x80);

// Row health, keyed off the last HTTP status.
pub const HEALTH_UP: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const HEALTH_DOWN: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const HEALTH_UNCHECKED: Color = Color::Rgb(0xea, 0xb3, 0x08);

pub const SELECTED_ROW: Color = Color::Rgb(0x26, 0x26, 0x26);
