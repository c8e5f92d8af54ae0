use crate::app::{
    action::Action,
    features::{self, donation::watch_theme, Services},
    input::map_event_to_action,
    listener::{EventResult, InputListener},
    reducer,
    state::AppState,
    ui,
};

use anyhow::Result;
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::time::interval;
use tracing::info;

const TICK_RATE: Duration = Duration::from_millis(250);

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app_state: AppState,
    services: Services,
) -> Result<()> {
    // Lives exactly as long as the loop below.
    let (_listener, event_rx) = InputListener::spawn();
    run_loop_with_events(terminal, app_state, services, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app_state: AppState,
    services: Services,
    mut event_rx: mpsc::Receiver<EventResult>,
) -> Result<()> {
    let (action_tx, mut action_rx) = mpsc::channel(100);
    let mut interval = interval(TICK_RATE);

    // Theme signal for the bot verification widget
    let (theme_tx, theme_rx) = watch::channel(app_state.palette_type);
    let theme_watch = watch_theme(theme_rx, services.checkout.verifier());

    info!(records = app_state.content.len(), "event loop started");

    loop {
        // --- 1. Render ---
        terminal.draw(|f| ui::draw(f, &app_state))?;

        // --- 2. Event Handling (TEA Runtime) ---
        let action = tokio::select! {
            _ = interval.tick() => Some(Action::Tick),

            // User Input
            res = event_rx.recv() => match res {
                Some(Ok(event)) => map_event_to_action(event, &app_state, terminal.size()?),
                Some(Err(e)) => return Err(e.into()),
                None => break,
            },

            // Async Results
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update (Reducer) ---
        if let Some(action) = action {
            let command = reducer::update(&mut app_state, action);

            if app_state.should_quit {
                break;
            }

            theme_tx.send_if_modified(|theme| {
                let changed = *theme != app_state.palette_type;
                *theme = app_state.palette_type;
                changed
            });

            if let Some(cmd) = command {
                features::handle_command(cmd, &services, action_tx.clone());
            }
        }
    }

    // Let the watcher see the last theme, then release the verifier.
    drop(theme_tx);
    let _ = theme_watch.await;

    info!("event loop stopped");
    Ok(())
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
