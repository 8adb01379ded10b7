/*!
 * Mock translator implementations for testing.
 *
 * This module provides mock translators that simulate different behaviors:
 * - `MockTranslator::working()` - Always succeeds with tagged text
 * - `MockTranslator::failing()` - Always fails with an API error
 * - `MockTranslator::failing_at(n)` - Succeeds until the nth call, then fails
 *
 * Every call is recorded so tests can assert how many network calls a chain
 * would have made and with which language pairs.
 */

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use crate::errors::ClientError;
use crate::providers::Translator;

/// One recorded call to the mock translator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Text that was passed in
    pub text: String,
    /// Source language code
    pub source: String,
    /// Target language code
    pub target: String,
}

/// Behavior mode for the mock translator
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MockBehavior {
    /// Always succeeds, tagging the text with the target language
    Working,
    /// Always fails with a transport error
    Failing,
    /// Fails on the nth call (1-indexed), succeeds before that
    FailingAt(usize),
    /// Succeeds after a delay (for cancellation and timeout tests)
    Slow { delay_ms: u64 },
}

/// Mock translator for testing chain behavior without network access
#[derive(Debug)]
pub struct MockTranslator {
    /// Behavior mode
    behavior: MockBehavior,
    /// Number of calls received so far
    call_count: Arc<AtomicUsize>,
    /// Every call received, in order
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockTranslator {
    /// Create a new mock translator with the specified behavior
    pub fn new(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            call_count: Arc::new(AtomicUsize::new(0)),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a working mock translator that always succeeds
    pub fn working() -> Self {
        Self::new(MockBehavior::Working)
    }

    /// Create a failing mock translator that always errors
    pub fn failing() -> Self {
        Self::new(MockBehavior::Failing)
    }

    /// Create a mock translator that fails on the nth call (1-indexed)
    pub fn failing_at(call: usize) -> Self {
        Self::new(MockBehavior::FailingAt(call))
    }

    /// Create a mock translator that succeeds after a delay
    pub fn slow(delay_ms: u64) -> Self {
        Self::new(MockBehavior::Slow { delay_ms })
    }

    /// Number of calls received so far
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Snapshot of every call received, in order
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The canned output for a successful call
    pub fn expected_output(text: &str, target: &str) -> String {
        format!("[{}] {}", target, text)
    }
}

impl Clone for MockTranslator {
    fn clone(&self) -> Self {
        Self {
            behavior: self.behavior,
            call_count: Arc::clone(&self.call_count),
            calls: Arc::clone(&self.calls),
        }
    }
}

#[async_trait]
impl Translator for MockTranslator {
    async fn translate(&self, text: &str, source: &str, target: &str)
        -> Result<String, ClientError>
    {
        let count = self.call_count.fetch_add(1, Ordering::SeqCst) + 1;
        self.calls.lock().unwrap().push(RecordedCall {
            text: text.to_string(),
            source: source.to_string(),
            target: target.to_string(),
        });

        match self.behavior {
            MockBehavior::Working => Ok(Self::expected_output(text, target)),

            MockBehavior::Failing => Err(ClientError::Transport {
                status_code: 500,
                body: "Simulated translator failure".to_string(),
            }),

            MockBehavior::FailingAt(call) => {
                if count == call {
                    Err(ClientError::Transport {
                        status_code: 503,
                        body: format!("Simulated failure on call #{}", count),
                    })
                } else {
                    Ok(Self::expected_output(text, target))
                }
            }

            MockBehavior::Slow { delay_ms } => {
                tokio::time::sleep(tokio::time::Duration::from_millis(delay_ms)).await;
                Ok(Self::expected_output(text, target))
            }
        }
    }

    async fn test_connection(&self) -> Result<(), ClientError> {
        match self.behavior {
            MockBehavior::Failing => Err(ClientError::Network(
                "Simulated connection failure".to_string(),
            )),
            _ => Ok(()),
        }
    }
}
