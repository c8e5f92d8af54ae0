use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::command_palette::CommandPaletteModal;
use super::error::ErrorModal;
use super::overlay::dim;
use super::theme_selection::ThemeSelectionModal;

pub struct ModalManager<'a> {
    pub theme: &'a Theme,
    pub app_state: &'a AppState,
}

impl Widget for ModalManager<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // --- Visual Dimming ---
        if self.app_state.is_modal_active() {
            dim(buf, area);
        }

        // --- Theme Selection ---
        if let (AppMode::ThemeSelection, Some(ts)) =
            (self.app_state.mode, &self.app_state.theme_selection)
        {
            ThemeSelectionModal {
                theme: self.theme,
                state: ts,
                active: self.app_state.palette_type,
            }
            .render(area, buf);
        }

        // --- Search Palette ---
        if self.app_state.palette.open {
            CommandPaletteModal {
                theme: self.theme,
                state: &self.app_state.palette,
                content: &self.app_state.content,
                site: &self.app_state.site,
            }
            .render(area, buf);
        }

        // --- Error Modal ---
        if let Some(err) = &self.app_state.last_error {
            ErrorModal {
                theme: self.theme,
                error: err,
            }
            .render(area, buf);
        }
    }
}
