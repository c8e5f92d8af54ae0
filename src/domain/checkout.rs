use crate::domain::ports::{
    BotVerifier, CheckoutRedirector, DonationGateway, SessionId, SessionOutcome,
    VerificationOutcome,
};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, warn};

/// How long `Processing` shows after a submit, independent of the request.
pub const PROCESSING_RESET: Duration = Duration::from_millis(1200);
pub const VERIFICATION_FAILED_RESET: Duration = Duration::from_millis(3000);
pub const PAYMENT_ERROR_RESET: Duration = Duration::from_millis(500);

#[derive(Debug, Error)]
pub enum DonationError {
    #[error("bot verification was rejected")]
    VerificationRejected,
    #[error("bot verification unavailable: {0}")]
    Verifier(String),
    #[error("rate limited")]
    RateLimited,
    #[error("{0}")]
    SessionFailed(String),
    #[error("unexpected response from {endpoint}: {detail}")]
    MalformedResponse {
        endpoint: &'static str,
        detail: String,
    },
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Verification, session creation and hosted redirect for one donation.
///
/// The collaborators are built once by the application root and shared by
/// every submission.
#[derive(Clone)]
pub struct CheckoutFlow {
    verifier: Arc<dyn BotVerifier>,
    gateway: Arc<dyn DonationGateway>,
    redirector: Arc<dyn CheckoutRedirector>,
}

impl CheckoutFlow {
    pub fn new(
        verifier: Arc<dyn BotVerifier>,
        gateway: Arc<dyn DonationGateway>,
        redirector: Arc<dyn CheckoutRedirector>,
    ) -> Self {
        Self {
            verifier,
            gateway,
            redirector,
        }
    }

    #[must_use]
    pub fn verifier(&self) -> Arc<dyn BotVerifier> {
        self.verifier.clone()
    }

    /// Proves the donor is human, then opens a payment session for `amount` dollars.
    ///
    /// A rejected verification stops before any session is requested.
    pub async fn create_session(&self, amount: u64) -> Result<SessionId, DonationError> {
        let token = self.verifier.execute().await?;
        debug!("verification token obtained");

        if self.gateway.verify(&token).await? == VerificationOutcome::Rejected {
            warn!("bot verification rejected");
            return Err(DonationError::VerificationRejected);
        }

        match self.gateway.create_session(amount).await? {
            SessionOutcome::Created(session) => {
                info!(amount, %session, "checkout session created");
                Ok(session)
            }
            SessionOutcome::RateLimited => {
                warn!(amount, "checkout session rate limited");
                Err(DonationError::RateLimited)
            }
            SessionOutcome::Failed(message) => {
                warn!(amount, %message, "checkout session failed");
                Err(DonationError::SessionFailed(message))
            }
        }
    }

    /// Sends the donor to the hosted payment page. The session already exists,
    /// so a failure here is only logged.
    pub async fn redirect(&self, session: &SessionId) {
        if let Err(e) = self.redirector.redirect(session).await {
            warn!(%session, error = %e, "redirect to hosted checkout failed");
        }
    }
}
