/*!
 * Tests for the translator implementations
 */

use std::time::Duration;

use dengon::errors::ClientError;
use dengon::providers::libre::LibreTranslate;
use dengon::providers::mock::MockTranslator;
use dengon::providers::Translator;

#[tokio::test]
async fn test_mockTranslator_working_shouldSucceedForAnyPair() {
    let translator = MockTranslator::working();

    let output = translator.translate("こんにちは", "ja", "ug").await.unwrap();
    assert_eq!(output, MockTranslator::expected_output("こんにちは", "ug"));
}

#[tokio::test]
async fn test_mockTranslator_withEmptyText_shouldPassThroughToBackend() {
    // Empty input is delegated to the backend, not rejected locally
    let translator = MockTranslator::working();

    let result = translator.translate("", "ja", "en").await;
    assert!(result.is_ok());
    assert_eq!(translator.call_count(), 1);
}

#[tokio::test]
async fn test_mockTranslator_testConnection_shouldReflectBehavior() {
    assert!(MockTranslator::working().test_connection().await.is_ok());
    assert!(MockTranslator::failing().test_connection().await.is_err());
}

#[tokio::test]
async fn test_libreTranslate_withClosedPort_shouldReturnNetworkError() {
    // Nothing listens on this port; connection is refused or times out
    let client = LibreTranslate::new("http://127.0.0.1:1/translate", Duration::from_millis(200));

    let result = client.translate("hello", "ja", "en").await;
    match result {
        Err(ClientError::Network(_)) => {}
        other => panic!("expected network error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_libreTranslate_languages_withClosedPort_shouldReturnNetworkError() {
    let client = LibreTranslate::new("http://127.0.0.1:1/translate", Duration::from_millis(200));

    assert!(matches!(client.languages().await, Err(ClientError::Network(_))));
}

/// Round trip against a live endpoint, only run on demand
#[tokio::test]
#[ignore]
async fn test_libreTranslate_againstLiveEndpoint_shouldTranslate() {
    let _ = env_logger::builder().is_test(true).try_init();

    let endpoint = std::env::var("DENGON_TEST_ENDPOINT").unwrap_or_default();
    if endpoint.is_empty() {
        return;
    }

    let client = LibreTranslate::new(endpoint, Duration::from_secs(30));
    let output = client.translate("こんにちは", "ja", "en").await.unwrap();

    assert!(!output.is_empty());
    println!("Live translation: {}", output);
}
