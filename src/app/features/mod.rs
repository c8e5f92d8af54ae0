use crate::app::{action::Action, command::Command};
use crate::domain::checkout::CheckoutFlow;
use crate::domain::ports::Navigator;
use std::sync::Arc;
use tokio::sync::mpsc;

pub mod donation;
pub mod palette;
pub mod ui;

/// Outside-world collaborators, built once at startup and shared by every command.
#[derive(Clone)]
pub struct Services {
    pub navigator: Arc<dyn Navigator>,
    pub checkout: CheckoutFlow,
}

pub fn handle_command(command: Command, services: &Services, tx: mpsc::Sender<Action>) {
    match command {
        Command::Navigate(url) => palette::navigate(url, services.navigator.clone(), tx),
        Command::Checkout {
            attempt,
            status_seq,
            amount,
        } => donation::checkout(services.checkout.clone(), attempt, status_seq, amount, tx),
        Command::RedirectToCheckout(session) => {
            donation::redirect(services.checkout.clone(), session);
        }
        Command::ResetStatusAfter { status_seq, delay } => {
            donation::schedule_status_reset(status_seq, delay, tx);
        }
    }
}
