use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Clear, Widget},
};

/// `percent` of `total`, but never less than `min` and never more than `total`.
#[must_use]
pub fn share(total: u16, percent: u16, min: u16) -> u16 {
    let scaled = u32::from(total) * u32::from(percent) / 100;
    u16::try_from(scaled).unwrap_or(total).max(min).min(total)
}

/// Centres a `width` by `height` box in `area`, shrunk to fit.
#[must_use]
pub fn popup_area(area: Rect, width: u16, height: u16) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    popup
}

/// Fades whatever is already drawn under an open modal.
pub fn dim(buf: &mut Buffer, area: Rect) {
    buf.set_style(area, Style::new().add_modifier(Modifier::DIM));
}

/// Blanks the cells one row down and one column right of `popup`, clipped to `screen`.
pub fn shadow(buf: &mut Buffer, popup: Rect, screen: Rect) {
    let offset = Rect {
        x: popup.x.saturating_add(1),
        y: popup.y.saturating_add(1),
        ..popup
    }
    .intersection(screen);
    Clear.render(offset, buf);
    buf.set_style(offset, Style::new().bg(Color::Black));
}
