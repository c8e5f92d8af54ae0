use super::types::{FooterGroup, FooterItem};
use crate::app::state::{AppMode, AppState, DonationFocus};

pub fn get_groups(state: &AppState) -> Vec<FooterGroup<'_>> {
    if state.last_error.is_some() {
        return vec![FooterGroup {
            name: "ERROR",
            items: vec![FooterItem::new("Esc", "dismiss")],
        }];
    }

    if state.palette.open {
        return vec![
            FooterGroup {
                name: "SEARCH",
                items: vec![
                    FooterItem::new("↑↓", "navigate"),
                    FooterItem::new("↵", "open link"),
                    FooterItem::new("Esc", "close"),
                ],
            },
            FooterGroup {
                name: "APP",
                items: vec![FooterItem::new(&state.keymap.palette_label, "close")],
            },
        ];
    }

    match state.mode {
        AppMode::ThemeSelection => vec![FooterGroup {
            name: "THEME",
            items: vec![
                FooterItem::new("j/k", "move"),
                FooterItem::new("ENTER", "apply"),
                FooterItem::new("Esc", "cancel"),
            ],
        }],
        AppMode::Normal if state.donation.focus == DonationFocus::Custom => vec![
            FooterGroup {
                name: "AMOUNT",
                items: vec![
                    FooterItem::new("0-9", "type"),
                    FooterItem {
                        key: "ENTER",
                        desc: "donate",
                        highlighted: !state.donation.amount.is_empty(),
                    },
                    FooterItem::new("Esc", "back"),
                    FooterItem::new("Tab", "next"),
                ],
            },
            FooterGroup {
                name: "APP",
                items: vec![
                    FooterItem::new(&state.keymap.palette_label, "search"),
                    FooterItem::new("^C", "quit"),
                ],
            },
        ],
        AppMode::Normal => vec![
            FooterGroup {
                name: "DONATE",
                items: vec![
                    FooterItem::new("←/→", "focus"),
                    FooterItem::new("ENTER", "give"),
                    FooterItem::new("1-4", "preset"),
                    FooterItem::new("$", "custom"),
                ],
            },
            FooterGroup {
                name: "APP",
                items: vec![
                    FooterItem {
                        key: &state.keymap.palette_label,
                        desc: "search",
                        highlighted: true,
                    },
                    FooterItem::new("^T", "theme"),
                    FooterItem::new("q", "quit"),
                ],
            },
        ],
    }
}
