use crate::app::action::Action;
use crate::domain::checkout::{CheckoutFlow, DonationError, PROCESSING_RESET};
use crate::domain::ports::{BotVerifier, SessionId};
use crate::theme::PaletteType;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Runs one submission: the `Processing` reset timer plus verification and
/// session creation. The redirect waits for the reducer to confirm the attempt
/// is still current.
pub fn checkout(
    flow: CheckoutFlow,
    attempt: u64,
    status_seq: u64,
    amount: u64,
    tx: mpsc::Sender<Action>,
) {
    schedule_status_reset(status_seq, PROCESSING_RESET, tx.clone());
    tokio::spawn(async move {
        info!(attempt, amount, "checkout started");
        match flow.create_session(amount).await {
            Ok(session) => {
                let _ = tx.send(Action::SessionCreated(attempt, session)).await;
            }
            Err(DonationError::VerificationRejected) => {
                let _ = tx.send(Action::VerificationRejected(attempt)).await;
            }
            Err(e) => {
                warn!(attempt, error = %e, "checkout failed");
                let _ = tx.send(Action::CheckoutFailed(attempt)).await;
            }
        }
    });
}

pub fn redirect(flow: CheckoutFlow, session: SessionId) {
    tokio::spawn(async move {
        flow.redirect(&session).await;
    });
}

/// Fire-and-forget timer. The reducer drops it if the status was written since.
pub fn schedule_status_reset(status_seq: u64, delay: Duration, tx: mpsc::Sender<Action>) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = tx.send(Action::StatusExpired(status_seq)).await;
    });
}

/// Resets the bot verification widget whenever the theme changes. Ends when
/// the sender is dropped.
pub fn watch_theme(
    mut theme_rx: watch::Receiver<PaletteType>,
    verifier: Arc<dyn BotVerifier>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while theme_rx.changed().await.is_ok() {
            let theme = *theme_rx.borrow_and_update();
            debug!(?theme, "theme changed");
            verifier.reset(theme);
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::{
        MockBotVerifier, MockCheckoutRedirector, MockDonationGateway, SessionOutcome,
        VerificationOutcome, VerificationToken,
    };
    use mockall::predicate::eq;

    fn flow(
        verifier: MockBotVerifier,
        gateway: MockDonationGateway,
        redirector: MockCheckoutRedirector,
    ) -> CheckoutFlow {
        CheckoutFlow::new(Arc::new(verifier), Arc::new(gateway), Arc::new(redirector))
    }

    fn token_verifier() -> MockBotVerifier {
        let mut verifier = MockBotVerifier::new();
        verifier
            .expect_execute()
            .returning(|| Ok(VerificationToken("tok".to_string())));
        verifier
    }

    #[tokio::test(start_paused = true)]
    async fn test_session_reported_without_redirecting() {
        let mut gateway = MockDonationGateway::new();
        gateway
            .expect_verify()
            .returning(|_| Ok(VerificationOutcome::Accepted));
        gateway
            .expect_create_session()
            .with(eq(50))
            .returning(|_| Ok(SessionOutcome::Created(SessionId("cs_1".to_string()))));
        let mut redirector = MockCheckoutRedirector::new();
        redirector.expect_redirect().never();

        let (tx, mut rx) = mpsc::channel(8);
        checkout(flow(token_verifier(), gateway, redirector), 7, 3, 50, tx);

        assert_eq!(
            rx.recv().await,
            Some(Action::SessionCreated(7, SessionId("cs_1".to_string())))
        );
        assert_eq!(rx.recv().await, Some(Action::StatusExpired(3)));
    }

    #[tokio::test]
    async fn test_redirect_opens_hosted_page() {
        let (done_tx, done_rx) = tokio::sync::oneshot::channel();
        let done_tx = std::sync::Mutex::new(Some(done_tx));
        let mut redirector = MockCheckoutRedirector::new();
        redirector
            .expect_redirect()
            .withf(|session| session.0 == "cs_2")
            .times(1)
            .returning(move |_| {
                if let Some(tx) = done_tx.lock().unwrap().take() {
                    let _ = tx.send(());
                }
                Ok(())
            });

        redirect(
            flow(
                MockBotVerifier::new(),
                MockDonationGateway::new(),
                redirector,
            ),
            SessionId("cs_2".to_string()),
        );
        done_rx.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_processing_reset_fires_after_1200ms() {
        let mut verifier = MockBotVerifier::new();
        verifier
            .expect_execute()
            .returning(|| Err(DonationError::Verifier("offline".to_string())));
        let (tx, mut rx) = mpsc::channel(8);
        let start = tokio::time::Instant::now();
        checkout(
            flow(verifier, MockDonationGateway::new(), MockCheckoutRedirector::new()),
            1,
            1,
            10,
            tx,
        );

        assert_eq!(rx.recv().await, Some(Action::CheckoutFailed(1)));
        assert_eq!(rx.recv().await, Some(Action::StatusExpired(1)));
        assert!(start.elapsed() >= PROCESSING_RESET);
    }

    #[tokio::test]
    async fn test_rejected_verification_reported_separately() {
        let mut gateway = MockDonationGateway::new();
        gateway
            .expect_verify()
            .returning(|_| Ok(VerificationOutcome::Rejected));
        gateway.expect_create_session().never();

        let (tx, mut rx) = mpsc::channel(8);
        checkout(
            flow(token_verifier(), gateway, MockCheckoutRedirector::new()),
            2,
            5,
            20,
            tx,
        );
        assert_eq!(rx.recv().await, Some(Action::VerificationRejected(2)));
    }

    #[tokio::test]
    async fn test_rate_limit_is_a_payment_error() {
        let mut gateway = MockDonationGateway::new();
        gateway
            .expect_verify()
            .returning(|_| Ok(VerificationOutcome::Accepted));
        gateway
            .expect_create_session()
            .returning(|_| Ok(SessionOutcome::RateLimited));
        let mut redirector = MockCheckoutRedirector::new();
        redirector.expect_redirect().never();

        let (tx, mut rx) = mpsc::channel(8);
        checkout(flow(token_verifier(), gateway, redirector), 4, 9, 100, tx);
        assert_eq!(rx.recv().await, Some(Action::CheckoutFailed(4)));
    }

    #[tokio::test]
    async fn test_theme_change_resets_verifier() {
        let mut verifier = MockBotVerifier::new();
        verifier
            .expect_reset()
            .with(eq(PaletteType::CatppuccinLatte))
            .times(1)
            .return_const(());

        let (theme_tx, theme_rx) = watch::channel(PaletteType::CatppuccinMocha);
        let handle = watch_theme(theme_rx, Arc::new(verifier));
        theme_tx.send(PaletteType::CatppuccinLatte).unwrap();
        drop(theme_tx);
        handle.await.unwrap();
    }
}
