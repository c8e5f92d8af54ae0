use crate::config::VerificationConfig;
use crate::domain::checkout::DonationError;
use crate::domain::ports::{BotVerifier, VerificationToken};
use crate::theme::PaletteType;
use async_trait::async_trait;
use std::process::Stdio;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock};
use tokio::process::Command;

/// Bot verification through an external helper that prints a one-time token on stdout.
///
/// The helper learns the widget theme and render generation from
/// `SITEDECK_WIDGET_THEME` and `SITEDECK_WIDGET_GENERATION`.
pub struct CommandVerifier {
    program: String,
    args: Vec<String>,
    theme: RwLock<PaletteType>,
    generation: AtomicU64,
}

impl CommandVerifier {
    #[must_use]
    pub fn new(config: &VerificationConfig, theme: PaletteType) -> Self {
        Self {
            program: config.command.clone(),
            args: config.args.clone(),
            theme: RwLock::new(theme),
            generation: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::SeqCst)
    }

    fn theme(&self) -> PaletteType {
        *self.theme.read().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl BotVerifier for CommandVerifier {
    async fn execute(&self) -> Result<VerificationToken, DonationError> {
        let output = Command::new(&self.program)
            .args(&self.args)
            .env("SITEDECK_WIDGET_THEME", self.theme().color_mode())
            .env("SITEDECK_WIDGET_GENERATION", self.generation().to_string())
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| DonationError::Verifier(format!("failed to run {}: {e}", self.program)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(DonationError::Verifier(format!(
                "{} exited with {}: {}",
                self.program,
                output.status,
                stderr.trim()
            )));
        }

        let token = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if token.is_empty() {
            return Err(DonationError::Verifier(format!(
                "{} printed no token",
                self.program
            )));
        }
        Ok(VerificationToken(token))
    }

    fn reset(&self, theme: PaletteType) {
        *self.theme.write().unwrap_or_else(PoisonError::into_inner) = theme;
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::debug!(?theme, generation, "bot verification widget reset");
    }
}
