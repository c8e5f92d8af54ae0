use crate::app::{
    action::Action,
    state::{AppMode, AppState, DonationFocus},
    ui,
};
use crate::components::donate::donate_layout;
use crate::components::modals::command_palette::{list_offset, palette_layout};
use crate::domain::donation::PRESET_AMOUNTS;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect, Size};

pub fn map_event_to_action(event: Event, app_state: &AppState, terminal_size: Size) -> Option<Action> {
    match event {
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        Event::Key(key) if key.kind != KeyEventKind::Release => map_key(key, app_state),
        Event::Mouse(mouse) => {
            let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
            map_mouse(mouse, app_state, area)
        }
        _ => None,
    }
}

fn map_key(key: KeyEvent, app_state: &AppState) -> Option<Action> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    if app_state.last_error.is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::DismissError),
            _ => None,
        };
    }

    if app_state.keymap.is_palette_toggle(&key) {
        return Some(Action::TogglePalette);
    }

    if app_state.palette.open {
        return map_palette_key(key);
    }

    if app_state.mode == AppMode::Normal && app_state.donation.focus == DonationFocus::Custom {
        if let Some(action) = map_amount_key(key) {
            return Some(action);
        }
    }

    app_state.keymap.get_action(key, app_state.mode)
}

fn map_palette_key(key: KeyEvent) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Esc => Some(Action::ClosePalette),
        KeyCode::Enter => Some(Action::PaletteSelect),
        KeyCode::Up | KeyCode::BackTab => Some(Action::PalettePrev),
        KeyCode::Down | KeyCode::Tab => Some(Action::PaletteNext),
        KeyCode::Char('p') if ctrl => Some(Action::PalettePrev),
        KeyCode::Char('n') if ctrl => Some(Action::PaletteNext),
        KeyCode::Backspace => Some(Action::PaletteBackspace),
        KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
            Some(Action::PaletteInput(c))
        }
        _ => None,
    }
}

/// Keys the custom amount field consumes itself. Everything else falls through.
fn map_amount_key(key: KeyEvent) -> Option<Action> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Char(c) => Some(Action::DonateAmountInput(c)),
        KeyCode::Backspace => Some(Action::DonateAmountBackspace),
        KeyCode::Enter => Some(Action::SubmitCustomAmount),
        KeyCode::Esc => Some(Action::FocusPrev),
        _ => None,
    }
}

fn map_mouse(mouse: MouseEvent, app_state: &AppState, area: Rect) -> Option<Action> {
    let pos = Position::new(mouse.column, mouse.row);

    if app_state.palette.open {
        let layout = palette_layout(area);
        return match mouse.kind {
            MouseEventKind::ScrollUp => Some(Action::PalettePrev),
            MouseEventKind::ScrollDown => Some(Action::PaletteNext),
            MouseEventKind::Down(MouseButton::Left) if !layout.modal.contains(pos) => {
                Some(Action::ClosePalette)
            }
            MouseEventKind::Down(MouseButton::Left) if layout.results.contains(pos) => {
                let count = app_state.palette.results(&app_state.content).len();
                let offset = list_offset(
                    app_state.palette.selected_index,
                    layout.results.height as usize,
                );
                let row = offset + (mouse.row - layout.results.y) as usize;
                (row < count).then_some(Action::PaletteSelectIndex(row))
            }
            _ => None,
        };
    }

    if app_state.is_modal_active() {
        return None;
    }

    let MouseEventKind::Down(MouseButton::Left) = mouse.kind else {
        return None;
    };

    let body = ui::get_layout(area).body;
    let donate = donate_layout(body);
    if let Some(i) = donate.presets.iter().position(|r| r.contains(pos)) {
        return Some(Action::SubmitPreset(PRESET_AMOUNTS[i]));
    }
    if donate.custom.contains(pos) {
        return Some(Action::FocusCustom);
    }
    if donate.submit.contains(pos) {
        return Some(Action::SubmitCustomAmount);
    }
    None
}
