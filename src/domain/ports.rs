use crate::domain::checkout::DonationError;
use crate::theme::PaletteType;
use anyhow::Result;
use async_trait::async_trait;
use std::fmt;

/// One-time proof from the bot-verification widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationToken(pub String);

/// Identifier of a payment session created by the donation backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VerificationOutcome {
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Created(SessionId),
    RateLimited,
    Failed(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BotVerifier: Send + Sync {
    // Obtain a fresh token; may take as long as the widget needs
    async fn execute(&self) -> Result<VerificationToken, DonationError>;

    // Re-render the widget, e.g. after the theme changed
    fn reset(&self, theme: PaletteType);
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DonationGateway: Send + Sync {
    async fn verify(&self, token: &VerificationToken) -> Result<VerificationOutcome, DonationError>;
    async fn create_session(&self, amount: u64) -> Result<SessionOutcome, DonationError>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CheckoutRedirector: Send + Sync {
    async fn redirect(&self, session: &SessionId) -> Result<()>;
}

/// Full-page navigation to an absolute URL, outside the app.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Navigator: Send + Sync {
    async fn open(&self, url: &str) -> Result<()>;
}
