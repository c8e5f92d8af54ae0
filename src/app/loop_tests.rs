use super::*;
use crate::app::command::Command;
use crate::config::Config;
use crate::domain::checkout::{
    CheckoutFlow, DonationError, PAYMENT_ERROR_RESET, PROCESSING_RESET,
};
use crate::domain::content::ContentIndex;
use crate::domain::donation::DonationStatus;
use crate::domain::ports::{
    MockBotVerifier, MockCheckoutRedirector, MockDonationGateway, MockNavigator, SessionId,
    SessionOutcome, VerificationOutcome, VerificationToken,
};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;

fn services(
    navigator: MockNavigator,
    verifier: MockBotVerifier,
    gateway: MockDonationGateway,
    redirector: MockCheckoutRedirector,
) -> Services {
    Services {
        navigator: Arc::new(navigator),
        checkout: CheckoutFlow::new(Arc::new(verifier), Arc::new(gateway), Arc::new(redirector)),
    }
}

fn idle_services() -> Services {
    let mut verifier = MockBotVerifier::new();
    verifier.expect_reset().return_const(());
    services(
        MockNavigator::new(),
        verifier,
        MockDonationGateway::new(),
        MockCheckoutRedirector::new(),
    )
}

fn app_state() -> AppState {
    AppState::new(&Config::default(), ContentIndex::bundled().unwrap())
}

#[tokio::test]
async fn test_navigation_error_reaches_state() {
    let mut navigator = MockNavigator::new();
    navigator
        .expect_open()
        .returning(|_| Err(anyhow::anyhow!("could not open browser for link")));
    let mut verifier = MockBotVerifier::new();
    verifier.expect_reset().return_const(());
    let services = services(
        navigator,
        verifier,
        MockDonationGateway::new(),
        MockCheckoutRedirector::new(),
    );

    let (tx, mut rx) = mpsc::channel(1);
    let mut state = app_state();
    features::handle_command(
        Command::Navigate("https://carbonplan.org/about".to_string()),
        &services,
        tx,
    );

    let action = rx.recv().await.unwrap();
    assert!(matches!(action, Action::NavigationFailed(_)));
    reducer::update(&mut state, action);
    let err = state.last_error.unwrap();
    assert!(err.message.contains("could not open browser"));
    assert!(!err.suggestions.is_empty());
}

#[tokio::test]
async fn test_navigation_success_sets_status() {
    let mut navigator = MockNavigator::new();
    navigator
        .expect_open()
        .with(mockall::predicate::eq("https://carbonplan.org/about"))
        .returning(|_| Ok(()));
    let mut verifier = MockBotVerifier::new();
    verifier.expect_reset().return_const(());
    let services = services(
        navigator,
        verifier,
        MockDonationGateway::new(),
        MockCheckoutRedirector::new(),
    );

    let (tx, mut rx) = mpsc::channel(1);
    let mut state = app_state();
    features::handle_command(
        Command::Navigate("https://carbonplan.org/about".to_string()),
        &services,
        tx,
    );
    reducer::update(&mut state, rx.recv().await.unwrap());
    assert_eq!(
        state.status_message.as_deref(),
        Some("Opened https://carbonplan.org/about")
    );
}

/// Runs a command, then feeds every resulting action back through the reducer
/// and handler until the channel goes quiet, like the loop does.
async fn drive(state: &mut AppState, services: &Services, first: Command) {
    let (tx, mut rx) = mpsc::channel(16);
    features::handle_command(first, services, tx.clone());
    while let Ok(Some(action)) =
        tokio::time::timeout(Duration::from_secs(10), rx.recv()).await
    {
        if let Some(cmd) = reducer::update(state, action) {
            features::handle_command(cmd, services, tx.clone());
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_rejected_verification_is_not_clobbered_by_processing_timer() {
    let mut verifier = MockBotVerifier::new();
    verifier
        .expect_execute()
        .returning(|| Ok(VerificationToken("tok".to_string())));
    let mut gateway = MockDonationGateway::new();
    gateway
        .expect_verify()
        .returning(|_| Ok(VerificationOutcome::Rejected));
    gateway.expect_create_session().never();
    let services = services(
        MockNavigator::new(),
        verifier,
        gateway,
        MockCheckoutRedirector::new(),
    );

    let mut state = app_state();
    let cmd = reducer::update(&mut state, Action::SubmitPreset(10)).unwrap();

    let (tx, mut rx) = mpsc::channel(16);
    features::handle_command(cmd, &services, tx.clone());

    // Rejection arrives immediately.
    let action = rx.recv().await.unwrap();
    assert_eq!(action, Action::VerificationRejected(1));
    let reset = reducer::update(&mut state, action).unwrap();
    assert_eq!(state.donation.status, DonationStatus::VerificationFailed);
    features::handle_command(reset, &services, tx.clone());

    // At 1200 ms the processing timer fires but belongs to an older write.
    let action = rx.recv().await.unwrap();
    assert_eq!(action, Action::StatusExpired(1));
    reducer::update(&mut state, action);
    assert_eq!(state.donation.status, DonationStatus::VerificationFailed);

    // At 3000 ms the failure's own timer returns to idle.
    let action = rx.recv().await.unwrap();
    assert_eq!(action, Action::StatusExpired(2));
    reducer::update(&mut state, action);
    assert_eq!(state.donation.status, DonationStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_rate_limited_checkout_shows_payment_error_then_idle() {
    let mut verifier = MockBotVerifier::new();
    verifier
        .expect_execute()
        .returning(|| Ok(VerificationToken("tok".to_string())));
    let mut gateway = MockDonationGateway::new();
    gateway
        .expect_verify()
        .returning(|_| Ok(VerificationOutcome::Accepted));
    gateway
        .expect_create_session()
        .times(1)
        .returning(|_| Ok(SessionOutcome::RateLimited));
    let mut redirector = MockCheckoutRedirector::new();
    redirector.expect_redirect().never();
    let services = services(MockNavigator::new(), verifier, gateway, redirector);

    let mut state = app_state();
    let start = tokio::time::Instant::now();
    let cmd = reducer::update(&mut state, Action::SubmitPreset(20)).unwrap();

    let (tx, mut rx) = mpsc::channel(16);
    features::handle_command(cmd, &services, tx.clone());

    // The 429 comes back before any timer fires.
    let action = rx.recv().await.unwrap();
    assert_eq!(action, Action::CheckoutFailed(1));
    let reset = reducer::update(&mut state, action).unwrap();
    assert_eq!(state.donation.status, DonationStatus::PaymentError);
    assert!(start.elapsed() < PAYMENT_ERROR_RESET);
    features::handle_command(reset, &services, tx.clone());

    // 500 ms later the error's own timer returns to idle.
    let action = rx.recv().await.unwrap();
    assert_eq!(action, Action::StatusExpired(2));
    assert!(start.elapsed() >= PAYMENT_ERROR_RESET);
    assert!(start.elapsed() < PROCESSING_RESET);
    reducer::update(&mut state, action);
    assert_eq!(state.donation.status, DonationStatus::Idle);

    // The processing timer still fires at 1200 ms and changes nothing.
    let action = rx.recv().await.unwrap();
    assert_eq!(action, Action::StatusExpired(1));
    assert!(start.elapsed() >= PROCESSING_RESET);
    reducer::update(&mut state, action);
    assert_eq!(state.donation.status, DonationStatus::Idle);
    assert_eq!(state.donation.attempt, 1);
}

#[tokio::test(start_paused = true)]
async fn test_successful_checkout_redirects_with_session() {
    let mut verifier = MockBotVerifier::new();
    verifier
        .expect_execute()
        .returning(|| Ok(VerificationToken("tok".to_string())));
    let mut gateway = MockDonationGateway::new();
    gateway
        .expect_verify()
        .returning(|_| Ok(VerificationOutcome::Accepted));
    gateway
        .expect_create_session()
        .with(mockall::predicate::eq(1000))
        .returning(|_| Ok(SessionOutcome::Created(SessionId("cs_live".to_string()))));
    let mut redirector = MockCheckoutRedirector::new();
    redirector
        .expect_redirect()
        .withf(|session| session.0 == "cs_live")
        .times(1)
        .returning(|_| Ok(()));
    let services = services(MockNavigator::new(), verifier, gateway, redirector);

    let mut state = app_state();
    reducer::update(&mut state, Action::FocusCustom);
    for c in "1,000".chars() {
        reducer::update(&mut state, Action::DonateAmountInput(c));
    }
    let cmd = reducer::update(&mut state, Action::SubmitCustomAmount).unwrap();
    drive(&mut state, &services, cmd).await;

    assert_eq!(state.donation.status, DonationStatus::Idle);
}

#[tokio::test(start_paused = true)]
async fn test_verifier_failure_is_a_payment_error() {
    let mut verifier = MockBotVerifier::new();
    verifier
        .expect_execute()
        .returning(|| Err(DonationError::Verifier("helper missing".to_string())));
    let services = services(
        MockNavigator::new(),
        verifier,
        MockDonationGateway::new(),
        MockCheckoutRedirector::new(),
    );

    let mut state = app_state();
    let cmd = reducer::update(&mut state, Action::SubmitPreset(50)).unwrap();

    let (tx, mut rx) = mpsc::channel(16);
    features::handle_command(cmd, &services, tx);
    let action = rx.recv().await.unwrap();
    assert_eq!(action, Action::CheckoutFailed(1));
    reducer::update(&mut state, action);
    assert_eq!(state.donation.status, DonationStatus::PaymentError);
}

#[tokio::test]
async fn test_loop_exits_on_quit_and_resets_verifier_on_theme_change() {
    let mut verifier = MockBotVerifier::new();
    verifier
        .expect_reset()
        .with(mockall::predicate::eq(crate::theme::PaletteType::CatppuccinLatte))
        .times(1)
        .return_const(());
    let services = services(
        MockNavigator::new(),
        verifier,
        MockDonationGateway::new(),
        MockCheckoutRedirector::new(),
    );

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(16);
    let keys = [
        KeyEvent::new(KeyCode::Char('t'), KeyModifiers::CONTROL),
        KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
        KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
        KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
    ];
    for key in keys {
        event_tx.send(Ok(Event::Key(key))).await.unwrap();
    }

    tokio::time::timeout(
        Duration::from_secs(5),
        run_loop_with_events(&mut terminal, app_state(), services, event_rx),
    )
    .await
    .expect("loop did not exit")
    .unwrap();
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut navigator = MockNavigator::new();
    navigator.expect_open().returning(|_| Ok(()));
    let mut verifier = MockBotVerifier::new();
    verifier.expect_reset().return_const(());
    verifier
        .expect_execute()
        .returning(|| Ok(VerificationToken("tok".to_string())));
    let mut gateway = MockDonationGateway::new();
    gateway
        .expect_verify()
        .returning(|_| Ok(VerificationOutcome::Accepted));
    gateway
        .expect_create_session()
        .returning(|_| Ok(SessionOutcome::RateLimited));
    let mut redirector = MockCheckoutRedirector::new();
    redirector.expect_redirect().returning(|_| Ok(()));
    let services = services(navigator, verifier, gateway, redirector);

    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..10000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=15 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            // Yield to allow the loop to process events
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        // Ctrl+C quits from any mode
        let _ = event_tx
            .send(Ok(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL,
            ))))
            .await;
    });

    let result = tokio::time::timeout(
        Duration::from_secs(30),
        run_loop_with_events(&mut terminal, app_state(), services, event_rx),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::PageUp,
        9 => KeyCode::PageDown,
        10 => KeyCode::Tab,
        11 => KeyCode::BackTab,
        12 => KeyCode::Delete,
        13 => KeyCode::Backspace,
        _ => {
            let c = rng.gen_range(b' '..=b'~') as char;
            KeyCode::Char(c)
        }
    };

    let mut modifiers = KeyModifiers::empty();
    // Ctrl+C would end the run early.
    if rng.gen_bool(0.1) && code != KeyCode::Char('c') {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    // Plain `q` quits from the donate screen; send it to the amount field instead.
    if code == KeyCode::Char('q') {
        return Event::Key(KeyEvent::new(KeyCode::Char('7'), modifiers));
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..5) {
        0 => MouseEventKind::Down(MouseButton::Left),
        1 => MouseEventKind::Down(MouseButton::Right),
        2 => MouseEventKind::ScrollUp,
        3 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    let column = rng.gen_range(0..size.width);
    let row = rng.gen_range(0..size.height);

    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}
