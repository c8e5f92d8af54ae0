use super::keymap::{KeyConfig, KeyMap};
use crate::config::{Config, SiteConfig};
use crate::domain::content::ContentIndex;
use crate::domain::donation::OverLimitPolicy;
use crate::theme::{PaletteType, Theme};
use std::sync::Arc;
use std::time::Instant;

pub mod donation;
pub mod error;
pub mod palette;
pub mod theme;

// Re-exports
pub use donation::{DonationFocus, DonationState};
pub use error::{ErrorSeverity, ErrorState};
pub use palette::PaletteState;
pub use theme::ThemeSelectionState;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AppMode {
    Normal,         // Donate screen has the keyboard
    ThemeSelection, // Choosing a UI theme
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    // --- Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub last_error: Option<ErrorState>,
    pub status_message: Option<String>, // "Opened https://..."
    pub status_clear_time: Option<Instant>,

    // --- Site ---
    pub content: Arc<ContentIndex>,
    pub site: SiteConfig,
    pub over_limit_policy: OverLimitPolicy,

    // --- Features ---
    pub palette: PaletteState,
    pub donation: DonationState,
    pub theme_selection: Option<ThemeSelectionState>,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub palette_type: PaletteType,
    pub theme: Theme,
}

impl AppState {
    #[must_use]
    pub fn new(config: &Config, content: ContentIndex) -> Self {
        Self {
            content: Arc::new(content),
            site: config.site.clone(),
            over_limit_policy: config.donation.over_limit_policy,
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            palette_type: config.theme,
            theme: Theme::from_palette_type(config.theme),
            ..Default::default()
        }
    }

    /// Any overlay that takes the keyboard away from the donate screen.
    #[must_use]
    pub fn is_modal_active(&self) -> bool {
        self.palette.open || self.mode != AppMode::Normal || self.last_error.is_some()
    }

    pub fn set_error(&mut self, message: String, severity: ErrorSeverity) {
        self.last_error = Some(ErrorState::new(message, severity));
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            last_error: None,
            status_message: None,
            status_clear_time: None,
            content: Arc::new(ContentIndex::default()),
            site: SiteConfig::default(),
            over_limit_policy: OverLimitPolicy::default(),
            palette: PaletteState::default(),
            donation: DonationState::default(),
            theme_selection: None,
            frame_count: 0,
            keymap: Arc::new(KeyMap::from_config(&KeyConfig::default())),
            palette_type: PaletteType::default(),
            theme: Theme::default(),
        }
    }
}
