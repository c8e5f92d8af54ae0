use serde::{Deserialize, Serialize};

/// One-click amounts offered on the donate screen, in dollars.
pub const PRESET_AMOUNTS: [u64; 4] = [10, 20, 50, 100];

/// Largest gift accepted through self-serve checkout.
pub const MAX_SELF_SERVE_AMOUNT: u64 = 999;

/// Digits the custom amount field accepts. Anything longer is dropped while typing.
pub const MAX_AMOUNT_DIGITS: usize = 12;

/// Keeps only the ASCII digits of what the donor typed.
#[must_use]
pub fn normalize_amount(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Dollar value of a normalized amount. Empty is zero; `None` when it does not fit a `u64`.
#[must_use]
pub fn parse_amount(normalized: &str) -> Option<u64> {
    if normalized.is_empty() {
        return Some(0);
    }
    normalized.parse().ok()
}

/// `$1,000` style display of a normalized amount; empty stays empty.
#[must_use]
pub fn format_amount(normalized: &str) -> String {
    if normalized.is_empty() {
        return String::new();
    }

    let digits = normalized.trim_start_matches('0');
    let digits = if digits.is_empty() { "0" } else { digits };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    format!("${grouped}")
}

/// Why an amount can't go through self-serve checkout as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountIssue {
    Missing,
    OverLimit,
}

impl AmountIssue {
    #[must_use]
    pub fn message(&self, contact_email: &str) -> String {
        match self {
            AmountIssue::Missing => "Enter a custom donation amount.".to_string(),
            AmountIssue::OverLimit => {
                format!("Email {contact_email} for a donation of $1000 or more.")
            }
        }
    }
}

#[must_use]
pub fn validate_amount(normalized: &str) -> Option<AmountIssue> {
    match parse_amount(normalized) {
        Some(0) => Some(AmountIssue::Missing),
        Some(amount) if amount <= MAX_SELF_SERVE_AMOUNT => None,
        _ => Some(AmountIssue::OverLimit),
    }
}

/// What happens when a custom amount above the self-serve limit is submitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OverLimitPolicy {
    /// Show the contact message and still start checkout.
    #[default]
    Advise,
    /// Show the contact message and stop.
    Block,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitPlan {
    /// Amount to charge, if checkout should start.
    pub amount: Option<u64>,
    /// Message to show alongside (or instead of) checkout.
    pub advisory: Option<AmountIssue>,
}

/// Decides whether a custom amount goes to checkout. Empty and zero amounts never
/// do, and neither does one that cannot be charged exactly as typed.
#[must_use]
pub fn plan_submission(normalized: &str, policy: OverLimitPolicy) -> SubmitPlan {
    let amount = parse_amount(normalized);
    match validate_amount(normalized) {
        None => SubmitPlan {
            amount,
            advisory: None,
        },
        Some(AmountIssue::Missing) => SubmitPlan {
            amount: None,
            advisory: Some(AmountIssue::Missing),
        },
        Some(AmountIssue::OverLimit) => SubmitPlan {
            amount: match policy {
                OverLimitPolicy::Advise => amount,
                OverLimitPolicy::Block => None,
            },
            advisory: Some(AmountIssue::OverLimit),
        },
    }
}

/// Transient checkout status shown in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DonationStatus {
    #[default]
    Idle,
    Processing,
    VerificationFailed,
    PaymentError,
}

impl DonationStatus {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            DonationStatus::Idle => "READY",
            DonationStatus::Processing => "PROCESSING",
            DonationStatus::VerificationFailed => "NOT AVAILABLE",
            DonationStatus::PaymentError => "ERROR",
        }
    }
}
