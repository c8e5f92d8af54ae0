use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    state::{AppState, ErrorSeverity},
};
use std::time::{Duration, Instant};
use tracing::debug;

const STATUS_MESSAGE_TTL: Duration = Duration::from_secs(3);

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::TogglePalette => {
            state.palette.toggle();
            debug!(open = state.palette.open, "search palette toggled");
            UpdateResult::Handled(None)
        }
        Action::ClosePalette => {
            state.palette.close();
            UpdateResult::Handled(None)
        }
        Action::PaletteInput(c) if state.palette.open => {
            state.palette.push(*c);
            UpdateResult::Handled(None)
        }
        Action::PaletteBackspace if state.palette.open => {
            state.palette.backspace();
            UpdateResult::Handled(None)
        }
        Action::PaletteNext => {
            let count = state.palette.results(&state.content).len();
            state.palette.select_next(count);
            UpdateResult::Handled(None)
        }
        Action::PalettePrev => {
            let count = state.palette.results(&state.content).len();
            state.palette.select_prev(count);
            UpdateResult::Handled(None)
        }
        Action::PaletteSelect => {
            let index = state.palette.selected_index;
            UpdateResult::Handled(open_result(state, index))
        }
        Action::PaletteSelectIndex(index) => UpdateResult::Handled(open_result(state, *index)),
        Action::Navigated(url) => {
            state.status_message = Some(format!("Opened {url}"));
            state.status_clear_time = Some(Instant::now() + STATUS_MESSAGE_TTL);
            UpdateResult::Handled(None)
        }
        Action::NavigationFailed(message) => {
            state.set_error(message.clone(), ErrorSeverity::Warning);
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

/// Closes the palette and navigates to the result at `index`, if there is one.
fn open_result(state: &mut AppState, index: usize) -> Option<Command> {
    if !state.palette.open {
        return None;
    }
    let url = state
        .palette
        .results(&state.content)
        .get(index)
        .map(|record| record.url(&state.site.base_url))?;
    state.palette.close();
    Some(Command::Navigate(url))
}
