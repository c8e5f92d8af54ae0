use super::palette::Palette;
use ratatui::style::Color;

pub const CATPPUCCIN_MOCHA: Palette = Palette {
    background: Color::Rgb(30, 30, 46),
    field: Color::Rgb(24, 24, 37),
    on_accent: Color::Rgb(17, 17, 27),
    text: Color::Rgb(205, 214, 244),
    muted: Color::Rgb(166, 173, 200),
    body: Color::Rgb(186, 194, 222),
    surface: Color::Rgb(49, 50, 68),
    raised: Color::Rgb(69, 71, 90),
    border: Color::Rgb(88, 91, 112),
    faint: Color::Rgb(108, 112, 134),
    accent: Color::Rgb(137, 180, 250),
    notice: Color::Rgb(148, 226, 213),
    ok: Color::Rgb(166, 227, 161),
    warn: Color::Rgb(249, 226, 175),
    danger: Color::Rgb(243, 139, 168),
    highlight: Color::Rgb(250, 179, 135),
    badge: Color::Rgb(203, 166, 247),
};

pub const CATPPUCCIN_LATTE: Palette = Palette {
    background: Color::Rgb(239, 241, 245),
    field: Color::Rgb(230, 233, 239),
    on_accent: Color::Rgb(220, 224, 232),
    text: Color::Rgb(76, 79, 105),
    muted: Color::Rgb(108, 111, 133),
    body: Color::Rgb(92, 95, 119),
    surface: Color::Rgb(204, 208, 218),
    raised: Color::Rgb(188, 192, 204),
    border: Color::Rgb(172, 176, 190),
    faint: Color::Rgb(156, 160, 176),
    accent: Color::Rgb(30, 102, 245),
    notice: Color::Rgb(23, 146, 153),
    ok: Color::Rgb(64, 160, 43),
    warn: Color::Rgb(223, 142, 29),
    danger: Color::Rgb(210, 15, 57),
    highlight: Color::Rgb(254, 100, 11),
    badge: Color::Rgb(136, 57, 239),
};
