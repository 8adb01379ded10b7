/*!
 * Chain orchestration for telephone-game translation.
 *
 * A chain routes text from the anchor language through an ordered list of
 * intermediate languages and back to the anchor. This module derives the hop
 * sequence from a chain specification and drives a [`Translator`] hop by hop,
 * producing a closed [`ChainOutcome`] instead of throwing partway through.
 *
 * Hops are strictly sequential: each hop's input is the previous hop's output,
 * so nothing here runs concurrently within one invocation. The runner itself
 * holds no per-invocation state, so independent invocations may run at the
 * same time. Cancellation is cooperative and drop-based: dropping the future
 * returned by [`ChainRunner::run`] abandons the in-flight request and no
 * further hops are started; hops that already completed are not rolled back.
 */

use log::{debug, info};
use std::sync::Arc;

use crate::errors::{ClientError, ConfigurationError};
use crate::providers::Translator;

/// The language every chain starts from and returns to by default
pub const DEFAULT_ANCHOR: &str = "ja";

/// One source-to-target translation request within a chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hop {
    /// Source language code
    pub source: String,
    /// Target language code
    pub target: String,
}

impl Hop {
    /// Create a hop between two language codes
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

impl std::fmt::Display for Hop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} → {}", self.source, self.target)
    }
}

/// The outcome of one completed hop. Immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    /// Source language code of the hop
    pub source: String,
    /// Target language code of the hop
    pub target: String,
    /// Text that went into the hop
    pub input: String,
    /// Text the translator returned
    pub output: String,
}

/// Result of running a whole chain.
///
/// `Failed.completed_steps` is exactly the prefix of hops that succeeded,
/// in execution order, with no gaps.
#[derive(Debug)]
pub enum ChainOutcome {
    /// Every hop succeeded
    Completed {
        /// Output of the final hop
        final_text: String,
        /// One entry per hop, in execution order
        steps: Vec<StepResult>,
    },
    /// A hop failed; no later hop was attempted
    Failed {
        /// Steps that completed before the failure
        completed_steps: Vec<StepResult>,
        /// The hop whose translation call failed
        failed_hop: Hop,
        /// The underlying client error
        cause: ClientError,
    },
}

/// Derive the full hop sequence for a chain.
///
/// The chain is `[anchor] + intermediates + [anchor]` and hops are its
/// consecutive pairs, so n intermediates always yield n+1 hops. Pure function:
/// the same input produces the same hops every time. Intermediates are passed
/// through untouched - duplicates stay, and an intermediate equal to the
/// anchor is not rejected here (callers filter that if they care).
pub fn build_hops(anchor: &str, intermediates: &[String]) -> Vec<Hop> {
    let mut hops = Vec::with_capacity(intermediates.len() + 1);
    let mut last = anchor;
    for lang in intermediates {
        hops.push(Hop::new(last, lang.as_str()));
        last = lang;
    }
    hops.push(Hop::new(last, anchor));
    hops
}

/// Drives a [`Translator`] through every hop of a chain
#[derive(Debug, Clone)]
pub struct ChainRunner {
    /// Backend that performs the individual translations
    translator: Arc<dyn Translator>,
    /// Language the chain starts from and returns to
    anchor: String,
}

impl ChainRunner {
    /// Create a runner with the default anchor language
    pub fn new(translator: Arc<dyn Translator>) -> Self {
        Self::with_anchor(translator, DEFAULT_ANCHOR)
    }

    /// Create a runner with a custom anchor language
    pub fn with_anchor(translator: Arc<dyn Translator>, anchor: impl Into<String>) -> Self {
        Self {
            translator,
            anchor: anchor.into(),
        }
    }

    /// The anchor language of this runner
    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    /// Run a chain, discarding progress notifications.
    ///
    /// See [`ChainRunner::run_with_progress`].
    pub async fn run(
        &self,
        source_text: &str,
        intermediates: &[String],
    ) -> Result<ChainOutcome, ConfigurationError> {
        self.run_with_progress(source_text, intermediates, |_| {}).await
    }

    /// Run a chain, invoking `on_step` after each successful hop.
    ///
    /// The callback receives each [`StepResult`] as soon as its hop completes,
    /// so callers can render intermediate progress instead of waiting for the
    /// final outcome.
    ///
    /// Preconditions are checked before any network activity: blank source
    /// text and an empty intermediate list both fail fast with a
    /// [`ConfigurationError`]. Everything after that is reported through
    /// [`ChainOutcome`] - a hop failure stops the chain immediately and yields
    /// `Failed` with the completed prefix, the failing hop and its cause.
    pub async fn run_with_progress<F>(
        &self,
        source_text: &str,
        intermediates: &[String],
        mut on_step: F,
    ) -> Result<ChainOutcome, ConfigurationError>
    where
        F: FnMut(&StepResult),
    {
        if source_text.trim().is_empty() {
            return Err(ConfigurationError::BlankSourceText);
        }
        if intermediates.is_empty() {
            return Err(ConfigurationError::EmptyChain);
        }

        let hops = build_hops(&self.anchor, intermediates);
        info!(
            "Running chain with {} hop(s): {} → {} → {}",
            hops.len(),
            self.anchor,
            intermediates.join(" → "),
            self.anchor
        );

        let mut steps: Vec<StepResult> = Vec::with_capacity(hops.len());
        let mut text = source_text.to_string();

        for hop in hops {
            debug!("Hop {}: translating {} chars", hop, text.chars().count());

            match self.translator.translate(&text, &hop.source, &hop.target).await {
                Ok(output) => {
                    let step = StepResult {
                        source: hop.source,
                        target: hop.target,
                        input: text,
                        output: output.clone(),
                    };
                    on_step(&step);
                    steps.push(step);
                    text = output;
                }
                Err(cause) => {
                    return Ok(ChainOutcome::Failed {
                        completed_steps: steps,
                        failed_hop: hop,
                        cause,
                    });
                }
            }
        }

        Ok(ChainOutcome::Completed {
            final_text: text,
            steps,
        })
    }
}
