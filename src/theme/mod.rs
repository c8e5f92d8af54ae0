use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod gruvbox;
pub mod palette;
pub mod site;

pub use palette::Palette;

/// Resolved styles for every widget, built from one `Palette`.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    // Donation status segment in the header
    pub status_ready: Style,
    pub status_info: Style,
    pub status_warn: Style,
    pub status_error: Style,

    pub header_logo: Style,
    pub header_site: Style,
    pub header_active: Style,
    pub header_item: Style,
    pub header: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer_group_name: Style,
    pub footer: Style,

    // Donate screen
    pub heading: Style,
    pub body_text: Style,
    pub amount_button: Style,
    pub amount_button_focus: Style,
    pub amount_input: Style,
    pub message: Style,
    pub badge: Style,

    // Palette results and theme picker rows
    pub list_selected: Style,
    pub list_item: Style,
    pub dimmed: Style,
}

/// Colour schemes selectable from the theme picker or `theme = "..."` in the config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    #[default]
    CatppuccinMocha,
    CatppuccinLatte,
    Gruvbox,
    Site,
}

impl PaletteType {
    const ALL: [PaletteType; 4] = [
        PaletteType::CatppuccinMocha,
        PaletteType::CatppuccinLatte,
        PaletteType::Gruvbox,
        PaletteType::Site,
    ];

    #[must_use]
    pub fn all() -> &'static [PaletteType] {
        &Self::ALL
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::CatppuccinMocha => "Catppuccin (Mocha)",
            PaletteType::CatppuccinLatte => "Catppuccin (Latte)",
            PaletteType::Gruvbox => "Gruvbox",
            PaletteType::Site => "Site (dark)",
        }
    }

    /// Light or dark, as understood by embedded third-party widgets.
    #[must_use]
    pub fn color_mode(&self) -> &'static str {
        match self {
            PaletteType::CatppuccinLatte => "light",
            PaletteType::CatppuccinMocha | PaletteType::Gruvbox | PaletteType::Site => "dark",
        }
    }

    #[must_use]
    pub fn palette(&self) -> &'static Palette {
        match self {
            PaletteType::CatppuccinMocha => &catppuccin::CATPPUCCIN_MOCHA,
            PaletteType::CatppuccinLatte => &catppuccin::CATPPUCCIN_LATTE,
            PaletteType::Gruvbox => &gruvbox::GRUVBOX,
            PaletteType::Site => &site::SITE_DARK,
        }
    }
}

/// Bold text on a solid fill; segments and selections.
fn filled(fill: Color, text: Color) -> Style {
    Style::new().bg(fill).fg(text).add_modifier(Modifier::BOLD)
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        Self::from_palette(t.palette())
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        let on = p.on_accent;
        Self {
            border: Style::new().fg(p.border),
            border_focus: Style::new().fg(p.accent),

            status_ready: filled(p.ok, on),
            status_info: filled(p.accent, on),
            status_warn: filled(p.warn, on),
            status_error: filled(p.danger, on),

            header_logo: filled(p.accent, on),
            header_site: filled(p.raised, p.text),
            header_active: filled(p.ok, on),
            header_item: Style::new().bg(p.surface).fg(p.text),
            header: Style::new().bg(p.background).fg(p.text),

            footer_segment_key: filled(p.surface, p.accent),
            footer_segment_val: Style::new().bg(p.background).fg(p.text),
            footer_group_name: Style::new().fg(p.muted).add_modifier(Modifier::DIM),
            footer: Style::new().bg(p.on_accent).fg(p.muted),

            heading: Style::new().fg(p.text).add_modifier(Modifier::BOLD),
            body_text: Style::new().fg(p.body),
            amount_button: Style::new().bg(p.surface).fg(p.text),
            amount_button_focus: filled(p.highlight, on),
            amount_input: Style::new().bg(p.field).fg(p.text),
            message: Style::new().fg(p.notice),
            badge: Style::new().bg(p.surface).fg(p.badge),

            list_selected: filled(p.accent, on),
            list_item: Style::new().fg(p.text),
            dimmed: Style::new().fg(p.faint).add_modifier(Modifier::DIM),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::default())
    }
}
