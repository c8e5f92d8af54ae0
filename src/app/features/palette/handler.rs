use crate::app::action::Action;
use crate::domain::ports::Navigator;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{info, warn};

/// Opens `url` in the browser and reports back whether that worked.
pub fn navigate(url: String, navigator: Arc<dyn Navigator>, tx: mpsc::Sender<Action>) {
    tokio::spawn(async move {
        info!(%url, "navigating");
        match navigator.open(&url).await {
            Ok(()) => {
                let _ = tx.send(Action::Navigated(url)).await;
            }
            Err(e) => {
                warn!(%url, error = %e, "navigation failed");
                let _ = tx.send(Action::NavigationFailed(format!("{e:#}"))).await;
            }
        }
    });
}
