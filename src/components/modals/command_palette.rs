use crate::app::state::PaletteState;
use crate::config::SiteConfig;
use crate::domain::content::ContentIndex;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Widget, Wrap},
};

use super::overlay::{popup_area, shadow, share};

/// Where the palette draws, shared with mouse hit-testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteLayout {
    pub modal: Rect,
    pub query: Rect,
    pub results: Rect,
    pub preview: Rect,
    pub hints: Rect,
}

pub fn palette_layout(area: Rect) -> PaletteLayout {
    let modal = popup_area(area, share(area.width, 60, 48), share(area.height, 60, 12));
    let inner = Block::default().borders(Borders::ALL).inner(modal);

    let [query, _, results, _, preview, hints] = Layout::vertical([
        Constraint::Length(1), // Query input
        Constraint::Length(1), // Separator
        Constraint::Min(1),    // Results
        Constraint::Length(1), // Separator
        Constraint::Length(2), // Summary of the selected page
        Constraint::Length(1), // Hint bar
    ])
    .areas(inner);

    PaletteLayout {
        modal,
        query,
        results,
        preview,
        hints,
    }
}

/// First visible row, keeping `selected` on screen.
#[must_use]
pub fn list_offset(selected: usize, visible: usize) -> usize {
    selected.saturating_sub(visible.saturating_sub(1))
}

pub struct CommandPaletteModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a PaletteState,
    pub content: &'a ContentIndex,
    pub site: &'a SiteConfig,
}

impl CommandPaletteModal<'_> {
    fn separator(&self, area: Rect, buf: &mut Buffer) {
        let separator = "─".repeat(area.width as usize);
        buf.set_string(area.x, area.y, separator, self.theme.border_focus);
    }
}

impl Widget for CommandPaletteModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = palette_layout(area);
        // Every row needs its line, plus the border
        if layout.modal.width < 3 || layout.modal.height < 9 {
            return;
        }

        shadow(buf, layout.modal, area);
        Clear.render(layout.modal, buf);

        Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(" SEARCH ", self.theme.header_active),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border_focus)
            .render(layout.modal, buf);

        // Render Query
        let query_line = Line::from(vec![
            Span::styled(" > ", self.theme.footer_segment_key),
            Span::styled(&self.state.query, self.theme.footer_segment_val),
            Span::styled(
                "_",
                self.theme
                    .footer_segment_val
                    .add_modifier(Modifier::SLOW_BLINK),
            ),
        ]);
        buf.set_line(layout.query.x, layout.query.y, &query_line, layout.query.width);
        self.separator(
            Rect {
                y: layout.query.bottom(),
                height: 1,
                ..layout.query
            },
            buf,
        );

        // Render Results
        let results = self.state.results(self.content);
        let dim = self.theme.list_item.add_modifier(Modifier::DIM);

        if let Some(empty) = self.state.empty_state(results.len()) {
            let no_results = Line::from(Span::styled(format!("  {empty}"), dim));
            buf.set_line(
                layout.results.x,
                layout.results.y,
                &no_results,
                layout.results.width,
            );
        } else {
            let offset = list_offset(self.state.selected_index, layout.results.height as usize);
            let items: Vec<ListItem> = results
                .iter()
                .enumerate()
                .skip(offset)
                .take(layout.results.height as usize)
                .map(|(i, record)| {
                    let is_selected = i == self.state.selected_index;
                    let style = if is_selected {
                        self.theme.list_selected
                    } else {
                        self.theme.list_item
                    };
                    let prefix = if is_selected { "> " } else { "  " };

                    let mut spans = vec![
                        Span::styled(prefix, style),
                        Span::styled(record.display_title().unwrap_or(record.page.as_str()), style),
                        Span::styled(format!("  {}", record.kind), dim),
                    ];
                    if let Some(date) = &record.date {
                        spans.push(Span::styled(format!("  {date}"), dim));
                    }
                    ListItem::new(Line::from(spans))
                })
                .collect();
            List::new(items).render(layout.results, buf);
        }

        self.separator(
            Rect {
                y: layout.preview.y.saturating_sub(1),
                height: 1,
                ..layout.preview
            },
            buf,
        );

        // Preview of the selected page
        if let Some(record) = results.get(self.state.selected_index) {
            let preview = vec![
                Line::from(Span::styled(
                    record.summary.as_deref().unwrap_or_default(),
                    self.theme.body_text,
                )),
                Line::from(Span::styled(record.url(&self.site.base_url), dim)),
            ];
            Paragraph::new(preview)
                .wrap(Wrap { trim: true })
                .render(layout.preview, buf);
        }

        // Hint bar
        let hints = Line::from(vec![
            Span::styled(" Navigate ", self.theme.list_item),
            Span::styled("↑↓", self.theme.footer_segment_key),
            Span::styled("  Open link ", self.theme.list_item),
            Span::styled("↵", self.theme.footer_segment_key),
            Span::styled("  Close ", self.theme.list_item),
            Span::styled("Esc", self.theme.footer_segment_key),
        ]);
        buf.set_line(layout.hints.x, layout.hints.y, &hints, layout.hints.width);
    }
}
