use crate::app::state::{ErrorSeverity, ErrorState};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Clear, Paragraph, Widget, Wrap},
};

use super::overlay::{popup_area, shadow, share};

/// Banner for a failed external action, e.g. a browser that would not open.
pub struct ErrorModal<'a> {
    pub theme: &'a Theme,
    pub error: &'a ErrorState,
}

impl ErrorModal<'_> {
    fn severity(&self) -> (&'static str, &'static str, Style) {
        match self.error.severity {
            ErrorSeverity::Warning => (" WARNING ", "!", self.theme.status_warn),
            ErrorSeverity::Error => (" ERROR ", "✗", self.theme.status_error),
        }
    }

    fn lines(&self, icon: &'static str, accent: Style) -> Vec<Line<'_>> {
        let theme = self.theme;
        let at = self.error.timestamp.format("%H:%M:%S");

        let mut lines = vec![
            Line::raw(""),
            Line::from(vec![
                Span::styled(icon, accent),
                Span::raw(" "),
                Span::styled(self.error.message.as_str(), theme.footer_segment_val),
            ]),
            Line::styled(format!("at {at}"), theme.dimmed),
            Line::raw(""),
        ];

        if !self.error.suggestions.is_empty() {
            lines.push(Line::styled("Suggestions:", theme.header_item));
            lines.extend(self.error.suggestions.iter().map(|s| {
                Line::from(vec![
                    Span::styled("  • ", theme.header_item),
                    Span::styled(s.as_str(), theme.footer_segment_key),
                ])
            }));
            lines.push(Line::raw(""));
        }

        lines.push(Line::from(vec![
            Span::styled("Esc", theme.footer_segment_key),
            Span::styled(" dismiss", theme.list_item),
        ]));
        lines
    }
}

impl Widget for ErrorModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let (title, icon, accent) = self.severity();
        let lines = self.lines(icon, accent);

        // Borders, plus two rows for messages that wrap
        let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(4);
        let popup = popup_area(area, share(area.width, 60, 40), height);
        if popup.is_empty() {
            return;
        }

        shadow(buf, popup, area);
        Clear.render(popup, buf);

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .border_type(BorderType::Double)
                    .border_style(accent)
                    .title(Line::from(Span::styled(title, accent)).centered()),
            )
            .render(popup, buf);
    }
}
