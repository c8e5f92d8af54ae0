use crate::app::{
    action::{Action, UpdateResult},
    state::{AppMode, AppState, ThemeSelectionState},
};
use crate::theme::{PaletteType, Theme};
use std::time::Instant;
use tracing::info;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::Tick => {
            state.frame_count = state.frame_count.wrapping_add(1);
            if state
                .status_clear_time
                .is_some_and(|t| Instant::now() >= t)
            {
                state.status_message = None;
                state.status_clear_time = None;
            }
            UpdateResult::Handled(None)
        }
        Action::Resize(..) => UpdateResult::Handled(None),
        Action::Quit => {
            state.should_quit = true;
            UpdateResult::Handled(None)
        }
        Action::CancelMode => {
            state.mode = AppMode::Normal;
            state.theme_selection = None;
            state.last_error = None;
            UpdateResult::Handled(None)
        }
        Action::DismissError => {
            state.last_error = None;
            UpdateResult::Handled(None)
        }
        Action::EnterThemeSelection => {
            state.mode = AppMode::ThemeSelection;
            state.theme_selection = Some(ThemeSelectionState::starting_at(state.palette_type));
            UpdateResult::Handled(None)
        }
        Action::SelectThemeNext | Action::SelectThemePrev => {
            let step = if *action == Action::SelectThemeNext { 1 } else { -1 };
            if let Some(ts) = &mut state.theme_selection {
                ts.step(step);
            }
            UpdateResult::Handled(None)
        }
        Action::ConfirmThemeSelection => {
            if let Some(palette) = state.theme_selection.as_ref().and_then(ThemeSelectionState::selected)
            {
                apply_theme(state, palette);
            }
            state.mode = AppMode::Normal;
            state.theme_selection = None;
            UpdateResult::Handled(None)
        }
        Action::SwitchTheme(palette) => {
            apply_theme(state, *palette);
            state.mode = AppMode::Normal;
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn apply_theme(state: &mut AppState, palette: PaletteType) {
    if state.palette_type != palette {
        info!(theme = palette.label(), "theme switched");
    }
    state.palette_type = palette;
    state.theme = Theme::from_palette_type(palette);
}
