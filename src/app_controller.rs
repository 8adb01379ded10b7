use anyhow::{anyhow, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, info, warn};
use std::sync::Arc;
use std::time::Duration;

use crate::app_config::Config;
use crate::chain::{ChainOutcome, ChainRunner, StepResult};
use crate::languages;
use crate::providers::libre::LibreTranslate;
use crate::providers::Translator;

// @module: Application controller for chain translation runs

/// Main application controller for telephone-game translation
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Chain runner over the configured backend
    runner: ChainRunner,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let client = LibreTranslate::new(
            config.endpoint.clone(),
            Duration::from_secs(config.timeout_secs),
        )
        .with_api_key(config.api_key.clone());

        let runner = ChainRunner::with_anchor(Arc::new(client), config.anchor_language.clone());

        Ok(Self { config, runner })
    }

    /// Create a controller over an arbitrary translator, used by tests
    pub fn with_translator(config: Config, translator: Arc<dyn Translator>) -> Self {
        let runner = ChainRunner::with_anchor(translator, config.anchor_language.clone());
        Self { config, runner }
    }

    /// The configuration this controller was built from
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run a chain and render each step as it completes.
    ///
    /// Returns the final text on success. A failed hop becomes an error after
    /// the completed steps have already been printed, so the partial trail
    /// stays visible.
    pub async fn run(&self, source_text: &str, intermediates: &[String]) -> Result<String> {
        for code in intermediates {
            if !languages::is_supported(code) {
                warn!("Language '{}' is not in the built-in table; passing it through as-is", code);
            }
        }

        let total_hops = intermediates.len() as u64 + 1;
        let progress = ProgressBar::new(total_hops);
        progress.set_style(
            ProgressStyle::with_template("{spinner:.green} [{bar:40.cyan/blue}] hop {pos}/{len} {msg}")
                .or_else(|_| ProgressStyle::with_template("{spinner} [{bar:40}] hop {pos}/{len} {msg}"))
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        progress.enable_steady_tick(Duration::from_millis(120));

        let outcome = self
            .runner
            .run_with_progress(source_text, intermediates, |step| {
                progress.println(render_step(step));
                progress.inc(1);
            })
            .await?;

        progress.finish_and_clear();

        match outcome {
            ChainOutcome::Completed { final_text, steps } => {
                info!("Chain completed after {} hop(s)", steps.len());
                debug!("Final text: {}", final_text);
                Ok(final_text)
            }
            ChainOutcome::Failed {
                completed_steps,
                failed_hop,
                cause,
            } => Err(anyhow!(
                "Chain failed at hop {} after {} completed step(s): {}",
                failed_hop,
                completed_steps.len(),
                cause
            )),
        }
    }
}

/// Render one completed step the way the step trail shows it
pub fn render_step(step: &StepResult) -> String {
    format!(
        "➡️ {} → {}:\n{}",
        step.source.to_uppercase(),
        step.target.to_uppercase(),
        step.output
    )
}
