use crate::domain::donation::{
    self, normalize_amount, validate_amount, AmountIssue, DonationStatus, MAX_AMOUNT_DIGITS,
    PRESET_AMOUNTS,
};

/// Which control on the donate screen receives keys.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum DonationFocus {
    Preset(usize),
    Custom,
}

impl Default for DonationFocus {
    fn default() -> Self {
        DonationFocus::Preset(0)
    }
}

impl DonationFocus {
    /// Presets in order, then the custom field, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            DonationFocus::Preset(i) if i + 1 < PRESET_AMOUNTS.len() => DonationFocus::Preset(i + 1),
            DonationFocus::Preset(_) => DonationFocus::Custom,
            DonationFocus::Custom => DonationFocus::Preset(0),
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            DonationFocus::Preset(0) => DonationFocus::Custom,
            DonationFocus::Preset(i) => DonationFocus::Preset(i - 1),
            DonationFocus::Custom => DonationFocus::Preset(PRESET_AMOUNTS.len() - 1),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonationState {
    /// Normalized custom amount (digits only).
    pub amount: String,
    pub message: Option<AmountIssue>,
    pub status: DonationStatus,
    pub focus: DonationFocus,
    /// Bumped on every submission; results from older submissions are dropped.
    pub attempt: u64,
    /// Bumped on every status write; reset timers for older writes are dropped.
    pub status_seq: u64,
}

impl DonationState {
    /// Replaces the custom amount with the digits of `raw`, up to `MAX_AMOUNT_DIGITS`.
    pub fn edit_amount(&mut self, raw: &str) {
        let mut amount = normalize_amount(raw);
        amount.truncate(MAX_AMOUNT_DIGITS);
        self.amount = amount;
        if self.amount.is_empty() || validate_amount(&self.amount).is_none() {
            self.message = None;
        }
    }

    pub fn push_input(&mut self, c: char) {
        let raw = format!("{}{c}", self.amount);
        self.edit_amount(&raw);
    }

    pub fn backspace(&mut self) {
        let mut raw = self.amount.clone();
        raw.pop();
        self.edit_amount(&raw);
    }

    /// Shows the validation message, if any. An empty field only gets one when
    /// `show_for_empty` is set (on submit, not on blur). Never clears a message.
    pub fn validate(&mut self, show_for_empty: bool) {
        if let Some(issue) = validate_amount(&self.amount) {
            if !self.amount.is_empty() || show_for_empty {
                self.message = Some(issue);
            }
        }
    }

    /// The custom amount as displayed in the field.
    #[must_use]
    pub fn display_amount(&self) -> String {
        donation::format_amount(&self.amount)
    }

    #[must_use]
    pub fn is_processing(&self) -> bool {
        self.status == DonationStatus::Processing
    }

    /// Writes the status and returns the sequence number of this write.
    pub fn set_status(&mut self, status: DonationStatus) -> u64 {
        self.status = status;
        self.status_seq += 1;
        self.status_seq
    }

    /// Returns to `Idle` if no status write happened since `seq`.
    pub fn expire_status(&mut self, seq: u64) -> bool {
        if seq != self.status_seq {
            return false;
        }
        self.set_status(DonationStatus::Idle);
        true
    }

    /// Starts a new submission and returns its attempt number.
    pub fn begin_attempt(&mut self) -> u64 {
        self.attempt += 1;
        self.attempt
    }
}
