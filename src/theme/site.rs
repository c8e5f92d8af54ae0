use super::palette::Palette;
use ratatui::style::Color;

/// The site's own dark scheme: near-black page, off-white primary text, grey secondary.
pub const SITE_DARK: Palette = Palette {
    background: Color::Rgb(27, 30, 35),
    field: Color::Rgb(34, 37, 43),
    on_accent: Color::Rgb(27, 30, 35),
    text: Color::Rgb(235, 235, 236),
    muted: Color::Rgb(128, 128, 128),
    body: Color::Rgb(200, 200, 202),
    surface: Color::Rgb(46, 48, 51),
    raised: Color::Rgb(57, 58, 61),
    border: Color::Rgb(84, 86, 90),
    faint: Color::Rgb(128, 128, 128),
    accent: Color::Rgb(133, 162, 247),
    notice: Color::Rgb(100, 185, 196),
    ok: Color::Rgb(126, 179, 106),
    warn: Color::Rgb(212, 192, 94),
    danger: Color::Rgb(240, 112, 113),
    highlight: Color::Rgb(234, 151, 85),
    badge: Color::Rgb(188, 133, 217),
};
