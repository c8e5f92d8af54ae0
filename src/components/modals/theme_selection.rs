use crate::app::state::ThemeSelectionState;
use crate::theme::{PaletteType, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, List, ListItem, Widget},
};

use super::overlay::{popup_area, shadow};

const CURRENT: &str = "  (current)";

/// Picker over every `PaletteType`; `active` is the theme in use.
pub struct ThemeSelectionModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a ThemeSelectionState,
    pub active: PaletteType,
}

impl ThemeSelectionModal<'_> {
    fn row(&self, palette: PaletteType, selected: bool) -> Line<'static> {
        let style = if selected {
            self.theme.list_selected
        } else {
            self.theme.list_item
        };
        let mut spans = vec![
            Span::styled(if selected { "> " } else { "  " }, style),
            Span::styled(palette.label(), style),
            Span::styled(format!("  {}", palette.color_mode()), self.theme.dimmed),
        ];
        if palette == self.active {
            spans.push(Span::styled(CURRENT, self.theme.dimmed));
        }
        Line::from(spans)
    }
}

impl Widget for ThemeSelectionModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows: Vec<Line> = self
            .state
            .themes
            .iter()
            .enumerate()
            .map(|(i, palette)| self.row(*palette, i == self.state.selected_index))
            .collect();

        // Widest row plus borders
        let width = rows.iter().map(Line::width).max().unwrap_or_default() + 2;
        let popup = popup_area(
            area,
            u16::try_from(width).unwrap_or(u16::MAX),
            u16::try_from(rows.len() + 2).unwrap_or(u16::MAX),
        );
        if popup.is_empty() {
            return;
        }

        shadow(buf, popup, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus)
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" SELECT THEME ", self.theme.header_active),
                Span::raw(" "),
            ]));

        List::new(rows.into_iter().map(ListItem::new))
            .block(block)
            .render(popup, buf);
    }
}
