use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;

use sitedeck::app::{features::Services, r#loop::run_loop, state::AppState};
use sitedeck::config::Config;
use sitedeck::domain::checkout::CheckoutFlow;
use sitedeck::domain::content::ContentIndex;
use sitedeck::domain::ports::Navigator;
use sitedeck::infrastructure::{
    browser::{BrowserNavigator, HostedCheckout},
    http_gateway::HttpDonationGateway,
    verifier::CommandVerifier,
};
use tracing::{error, info};

fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        original_hook(panic_info);
    }));
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_panic_hook();
    let log_path = sitedeck::logging::init()?;

    // Everything that can fail on bad config happens BEFORE terminal setup,
    // so we never leave the terminal in raw mode.
    let config = Config::load()?;
    let content = ContentIndex::load(config.content.index_path.as_deref())?;
    info!(records = content.len(), log = %log_path.display(), "starting");

    let navigator: Arc<dyn Navigator> = Arc::new(BrowserNavigator);
    let checkout = CheckoutFlow::new(
        Arc::new(CommandVerifier::new(&config.verification, config.theme)),
        Arc::new(HttpDonationGateway::new(&config.donation)?),
        Arc::new(HostedCheckout::new(
            &config.donation.checkout_url,
            navigator.clone(),
        )),
    );
    let services = Services {
        navigator,
        checkout,
    };
    let app_state = AppState::new(&config, content);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_loop(&mut terminal, app_state, services).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = %err, "event loop failed");
        println!("{:?}", err);
    }

    Ok(())
}
