use crate::app::state::{AppState, DonationFocus};
use crate::domain::donation::{format_amount, PRESET_AMOUNTS};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget, Wrap},
};

const INTRO: &str = "Thank you so much for considering supporting our work. Your donation \
will help us make progress on our mission, with complete commitment and responsibility to the \
public's interest in a safe and stable climate. Our team will do our best to do right by your \
generosity.";

const TAX_NOTE: &str = "Your gift is tax-deductible to the full extent provided by law. \
Payment services provided through Stripe. All major credit cards as well as Apple Pay and \
Google Pay are accepted.";

/// Screen regions of the donate view. Mouse hit-testing uses the same geometry
/// as rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DonateLayout {
    pub heading: Rect,
    pub intro: Rect,
    pub prompt: Rect,
    pub presets: [Rect; 4],
    pub custom: Rect,
    pub submit: Rect,
    pub message: Rect,
    pub sidenote: Rect,
    pub legal: Rect,
}

pub fn donate_layout(area: Rect) -> DonateLayout {
    let inner = Rect {
        x: area.x.saturating_add(2),
        width: area.width.saturating_sub(4),
        ..area
    };

    let [heading, _, intro, _, prompt, presets_row, custom_row, message, _, sidenote, _, legal] =
        Layout::vertical([
            Constraint::Length(1), // Heading
            Constraint::Length(1),
            Constraint::Length(4), // Intro
            Constraint::Length(1),
            Constraint::Length(1), // "Select or enter an amount"
            Constraint::Length(3), // Presets
            Constraint::Length(3), // Custom amount + submit
            Constraint::Length(1), // Validation message
            Constraint::Length(1),
            Constraint::Length(1), // Sidenote
            Constraint::Length(1),
            Constraint::Min(0), // Legal details
        ])
        .areas(inner);

    let presets = Layout::horizontal([Constraint::Length(10); 4])
        .spacing(2)
        .flex(Flex::Start)
        .areas(presets_row);

    let [custom, submit] = Layout::horizontal([Constraint::Length(22), Constraint::Length(12)])
        .spacing(2)
        .flex(Flex::Start)
        .areas(custom_row);

    DonateLayout {
        heading,
        intro,
        prompt,
        presets,
        custom,
        submit,
        message,
        sidenote,
        legal,
    }
}

pub struct DonateView<'a> {
    pub app_state: &'a AppState,
    pub theme: &'a Theme,
}

impl DonateView<'_> {
    fn button_block(&self, focused: bool) -> Block<'static> {
        let (border_type, border_style) = if focused {
            (BorderType::Thick, self.theme.border_focus)
        } else {
            (BorderType::Rounded, self.theme.border)
        };
        Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style)
    }

    fn render_presets(&self, layout: &DonateLayout, buf: &mut Buffer) {
        let donation = &self.app_state.donation;
        for (i, (area, amount)) in layout.presets.iter().zip(PRESET_AMOUNTS).enumerate() {
            let focused = donation.focus == DonationFocus::Preset(i);
            let style = if focused {
                self.theme.amount_button_focus
            } else {
                self.theme.amount_button
            };
            Paragraph::new(format_amount(&amount.to_string()))
                .alignment(Alignment::Center)
                .style(style)
                .block(self.button_block(focused))
                .render(*area, buf);
        }
    }

    fn render_custom(&self, layout: &DonateLayout, buf: &mut Buffer) {
        let donation = &self.app_state.donation;
        let focused = donation.focus == DonationFocus::Custom;

        let mut spans = vec![];
        if donation.amount.is_empty() {
            spans.push(Span::styled("$", self.theme.dimmed));
        } else {
            spans.push(Span::styled(donation.display_amount(), self.theme.amount_input));
        }
        if focused && (self.app_state.frame_count / 2) % 2 == 0 {
            spans.push(Span::styled("_", self.theme.amount_input));
        }

        Paragraph::new(Line::from(spans))
            .block(self.button_block(focused).title(" Custom "))
            .render(layout.custom, buf);

        let submit_style = if donation.is_processing() {
            self.theme.dimmed
        } else {
            self.theme.amount_button
        };
        Paragraph::new("Donate")
            .alignment(Alignment::Center)
            .style(submit_style)
            .block(self.button_block(false))
            .render(layout.submit, buf);

        if let Some(issue) = donation.message {
            Paragraph::new(issue.message(&self.app_state.site.contact_email))
                .style(self.theme.message)
                .render(layout.message, buf);
        }
    }

    fn render_legal(&self, area: Rect, buf: &mut Buffer) {
        let site = &self.app_state.site;
        let label = self.theme.dimmed;

        let mut lines = vec![
            Line::styled(TAX_NOTE, self.theme.body_text),
            Line::raw(""),
            Line::from(vec![
                Span::styled("Legal name: ", label),
                Span::styled(site.legal_name.as_str(), self.theme.body_text),
                Span::raw("    "),
                Span::styled("EIN #: ", label),
                Span::styled(site.ein.as_str(), self.theme.body_text),
            ]),
            Line::styled("Mailing address:", label),
        ];
        lines.extend(
            site.mailing_address
                .iter()
                .map(|l| Line::styled(l.as_str(), self.theme.body_text)),
        );

        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(area, buf);
    }
}

impl Widget for DonateView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = donate_layout(area);

        Paragraph::new(Line::from(vec![
            Span::styled("Donate", self.theme.heading),
            Span::raw("  "),
            Span::styled(" tax-deductible ", self.theme.badge),
        ]))
        .render(layout.heading, buf);

        Paragraph::new(INTRO)
            .style(self.theme.body_text)
            .wrap(Wrap { trim: true })
            .render(layout.intro, buf);

        Paragraph::new("Select or enter an amount")
            .style(self.theme.heading.remove_modifier(Modifier::BOLD))
            .render(layout.prompt, buf);

        self.render_presets(&layout, buf);
        self.render_custom(&layout, buf);

        let contact = &self.app_state.site.contact_email;
        Paragraph::new(Line::from(vec![
            Span::styled("Looking to make a donation of $1000 or more? ", self.theme.dimmed),
            Span::styled(
                format!("Email {contact}."),
                Style::default().add_modifier(Modifier::UNDERLINED),
            ),
        ]))
        .wrap(Wrap { trim: true })
        .render(layout.sidenote, buf);

        self.render_legal(layout.legal, buf);
    }
}
