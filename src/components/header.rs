use crate::config::SiteConfig;
use crate::domain::donation::DonationStatus;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Powerline separator between segments.
const SEP_RIGHT: &str = "\u{e0b0}";

pub struct Header<'a> {
    pub site: &'a SiteConfig,
    pub status: DonationStatus,
    pub status_message: Option<&'a str>,
    pub theme: &'a Theme,
}

impl Header<'_> {
    fn status_style(&self) -> Style {
        match self.status {
            DonationStatus::Idle => self.theme.status_ready,
            DonationStatus::Processing => self.theme.status_info,
            DonationStatus::VerificationFailed => self.theme.status_warn,
            DonationStatus::PaymentError => self.theme.status_error,
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let status_style = self.status_style();

        // Segment background colors for separator transitions
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let site_bg = self.theme.header_site.bg.unwrap_or(Color::Reset);
        let status_bg = status_style.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);

        // Separator styles: fg = current segment bg, bg = next segment bg
        let sep_logo_site = Style::default().fg(logo_bg).bg(site_bg);
        let sep_site_status = Style::default().fg(site_bg).bg(status_bg);
        let sep_status_base = Style::default().fg(status_bg).bg(base_bg);

        let mut spans = vec![
            Span::styled(" SITEDECK ", self.theme.header_logo),
            Span::styled(SEP_RIGHT, sep_logo_site),
            Span::styled(format!(" {} ", self.site.host()), self.theme.header_site),
            Span::styled(SEP_RIGHT, sep_site_status),
            Span::styled(format!(" {} ", self.status.label()), status_style),
            Span::styled(SEP_RIGHT, sep_status_base),
        ];

        if let Some(msg) = self.status_message {
            spans.push(Span::styled(format!("  {msg}"), self.theme.header_item));
        }

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
