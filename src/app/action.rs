use crate::app::command::Command;
use crate::domain::ports::SessionId;
use crate::theme::PaletteType;

#[derive(Debug, Clone)]
pub enum UpdateResult {
    Handled(Option<Command>),
    NotHandled,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Search Palette ---
    TogglePalette,            // Modifier+K
    ClosePalette,             // Esc or click outside
    PaletteInput(char),       // Query keystroke
    PaletteBackspace,         // Drop the last query char
    PaletteNext,              // Next result (wraps)
    PalettePrev,              // Previous result (wraps)
    PaletteSelect,            // Open the highlighted result
    PaletteSelectIndex(usize), // Open a result by row (mouse)

    // --- Donate Screen ---
    FocusNext,             // Tab
    FocusPrev,             // Shift+Tab
    FocusCustom,           // Jump to the custom amount field
    DonateAmountInput(char), // Keystroke in the custom amount field
    DonateAmountBackspace,
    ActivateFocused,       // Enter on whatever has focus
    SubmitPreset(u64),     // One of the preset amounts
    SubmitCustomAmount,    // The custom amount field's submit

    // --- UI Mode Transitions ---
    EnterThemeSelection,   // Ctrl+T
    SelectThemeNext,
    SelectThemePrev,
    ConfirmThemeSelection,
    SwitchTheme(PaletteType),
    CancelMode,            // Esc
    DismissError,

    // --- Async Results ---
    StatusExpired(u64),         // A status reset timer fired for this status write
    VerificationRejected(u64),  // Bot check failed for this attempt
    CheckoutFailed(u64),        // Any other checkout failure for this attempt
    SessionCreated(u64, SessionId), // Payment session ready for this attempt
    Navigated(String),          // Browser opened this URL
    NavigationFailed(String),   // Browser could not be opened
}
