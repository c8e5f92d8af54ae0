use ratatui::style::Color;

/// Colour roles the screens draw with. Each palette fills every role.
pub struct Palette {
    /// Screen background and header body.
    pub background: Color,
    /// Inside of the custom amount field.
    pub field: Color,
    /// Text drawn on an accent-coloured fill.
    pub on_accent: Color,
    pub text: Color,
    /// Footer text and group names.
    pub muted: Color,
    /// Page copy.
    pub body: Color,
    /// Buttons, key hints and badges.
    pub surface: Color,
    /// The header's site segment.
    pub raised: Color,
    pub border: Color,
    /// Placeholders and secondary labels.
    pub faint: Color,

    pub accent: Color,
    pub notice: Color,
    pub ok: Color,
    pub warn: Color,
    pub danger: Color,
    /// Focused amount button.
    pub highlight: Color,
    pub badge: Color,
}
