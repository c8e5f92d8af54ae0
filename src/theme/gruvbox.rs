use super::palette::Palette;
use ratatui::style::Color;

pub const GRUVBOX: Palette = Palette {
    background: Color::Rgb(40, 40, 40),
    field: Color::Rgb(50, 48, 47),
    on_accent: Color::Rgb(29, 32, 33),
    text: Color::Rgb(235, 219, 178),
    muted: Color::Rgb(189, 174, 147),
    body: Color::Rgb(213, 196, 161),
    surface: Color::Rgb(60, 56, 54),
    raised: Color::Rgb(80, 73, 69),
    border: Color::Rgb(102, 92, 84),
    faint: Color::Rgb(124, 111, 100),
    accent: Color::Rgb(131, 165, 152),
    notice: Color::Rgb(142, 192, 124),
    ok: Color::Rgb(184, 187, 38),
    warn: Color::Rgb(250, 189, 47),
    danger: Color::Rgb(251, 73, 52),
    highlight: Color::Rgb(254, 128, 25),
    badge: Color::Rgb(211, 134, 155),
};
