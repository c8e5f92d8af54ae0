use super::action::Action;
use super::state::AppMode;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Modifier that, together with `k`, toggles the search palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortcutModifier {
    #[default]
    Ctrl,
    Alt,
    Super,
}

impl ShortcutModifier {
    #[must_use]
    pub fn modifiers(self) -> KeyModifiers {
        match self {
            ShortcutModifier::Ctrl => KeyModifiers::CONTROL,
            ShortcutModifier::Alt => KeyModifiers::ALT,
            ShortcutModifier::Super => KeyModifiers::SUPER,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ShortcutModifier::Ctrl => "Ctrl",
            ShortcutModifier::Alt => "Alt",
            ShortcutModifier::Super => "Super",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    pub palette_modifier: ShortcutModifier,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyMap {
    pub palette_toggle: KeyEvent,
    pub palette_label: String,
    // Mode -> (Key -> Action); `global` applies outside any overlay.
    pub global: HashMap<KeyEvent, Action>,
    pub theme_mode: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    #[must_use]
    pub fn from_config(config: &KeyConfig) -> Self {
        let modifier = config.palette_modifier;
        let palette_toggle = KeyEvent::new(KeyCode::Char('k'), modifier.modifiers());

        let mut global = HashMap::new();
        let mut theme_mode = HashMap::new();

        // --- Donate screen ---
        global.insert(char_key('q'), Action::Quit);
        global.insert(key(KeyCode::Tab), Action::FocusNext);
        global.insert(key(KeyCode::Right), Action::FocusNext);
        global.insert(char_key('l'), Action::FocusNext);
        global.insert(key(KeyCode::BackTab), Action::FocusPrev);
        global.insert(
            KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT),
            Action::FocusPrev,
        );
        global.insert(key(KeyCode::Left), Action::FocusPrev);
        global.insert(char_key('h'), Action::FocusPrev);
        global.insert(key(KeyCode::Enter), Action::ActivateFocused);
        global.insert(char_key(' '), Action::ActivateFocused);
        global.insert(char_key('1'), Action::SubmitPreset(10));
        global.insert(char_key('2'), Action::SubmitPreset(20));
        global.insert(char_key('3'), Action::SubmitPreset(50));
        global.insert(char_key('4'), Action::SubmitPreset(100));
        global.insert(char_key('$'), Action::FocusCustom);
        global.insert(ctrl('t'), Action::EnterThemeSelection);

        // --- Theme selection ---
        theme_mode.insert(char_key('j'), Action::SelectThemeNext);
        theme_mode.insert(key(KeyCode::Down), Action::SelectThemeNext);
        theme_mode.insert(char_key('k'), Action::SelectThemePrev);
        theme_mode.insert(key(KeyCode::Up), Action::SelectThemePrev);
        theme_mode.insert(key(KeyCode::Enter), Action::ConfirmThemeSelection);
        theme_mode.insert(key(KeyCode::Esc), Action::CancelMode);
        theme_mode.insert(char_key('q'), Action::CancelMode);

        Self {
            palette_toggle,
            palette_label: format!("{}+K", modifier.label()),
            global,
            theme_mode,
        }
    }

    /// Whether `event` is the palette shortcut. `Ctrl+Shift+K` counts too.
    #[must_use]
    pub fn is_palette_toggle(&self, event: &KeyEvent) -> bool {
        matches!(event.code, KeyCode::Char('k' | 'K'))
            && event.modifiers.contains(self.palette_toggle.modifiers)
    }

    #[must_use]
    pub fn get_action(&self, event: KeyEvent, mode: AppMode) -> Option<Action> {
        match mode {
            AppMode::ThemeSelection => self.theme_mode.get(&event).cloned(),
            AppMode::Normal => self.global.get(&event).cloned(),
        }
    }
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn char_key(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
