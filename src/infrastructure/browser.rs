use crate::domain::ports::{CheckoutRedirector, Navigator, SessionId};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::sync::Arc;

/// Opens URLs in the system browser.
pub struct BrowserNavigator;

#[async_trait]
impl Navigator for BrowserNavigator {
    async fn open(&self, url: &str) -> Result<()> {
        let target = url.to_string();
        tokio::task::spawn_blocking(move || webbrowser::open(&target))
            .await?
            .with_context(|| format!("could not open browser for {url}"))?;
        tracing::info!(url, "opened in browser");
        Ok(())
    }
}

/// Hosted checkout page reached by substituting the session id into a URL template.
pub struct HostedCheckout {
    url_template: String,
    navigator: Arc<dyn Navigator>,
}

impl HostedCheckout {
    pub const SESSION_PLACEHOLDER: &'static str = "{session_id}";

    pub fn new(url_template: &str, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            url_template: url_template.to_string(),
            navigator,
        }
    }

    #[must_use]
    pub fn checkout_url(&self, session: &SessionId) -> String {
        self.url_template
            .replace(Self::SESSION_PLACEHOLDER, &session.0)
    }
}

#[async_trait]
impl CheckoutRedirector for HostedCheckout {
    async fn redirect(&self, session: &SessionId) -> Result<()> {
        self.navigator.open(&self.checkout_url(session)).await
    }
}
