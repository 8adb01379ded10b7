/*!
 * End-to-end chain runs through the controller, backed by the mock translator
 */

use std::sync::Arc;

use dengon::app_config::Config;
use dengon::app_controller::Controller;
use dengon::providers::mock::MockTranslator;

use crate::common::chain_spec;

#[tokio::test]
async fn test_controllerRun_fullChain_shouldEndBackAtAnchor() {
    let translator = MockTranslator::working();
    let controller = Controller::with_translator(Config::default(), Arc::new(translator.clone()));

    let final_text = controller
        .run("こんにちは", &chain_spec(&["ug", "la", "ky"]))
        .await
        .unwrap();

    assert!(final_text.starts_with("[ja]"));
    assert_eq!(translator.call_count(), 4);

    // Last call targets the anchor language
    let calls = translator.calls();
    assert_eq!(calls.last().unwrap().target, "ja");
}

#[tokio::test]
async fn test_controllerRun_withCustomAnchor_shouldUseConfiguredLanguage() {
    let translator = MockTranslator::working();
    let mut config = Config::default();
    config.anchor_language = "en".to_string();
    let controller = Controller::with_translator(config, Arc::new(translator.clone()));

    controller.run("hello", &chain_spec(&["fr"])).await.unwrap();

    let calls = translator.calls();
    assert_eq!(calls.first().unwrap().source, "en");
    assert_eq!(calls.last().unwrap().target, "en");
}

#[tokio::test]
async fn test_controllerRun_midChainFailure_shouldSurfaceHopAndPrefix() {
    let translator = MockTranslator::failing_at(3);
    let controller = Controller::with_translator(Config::default(), Arc::new(translator.clone()));

    let err = controller
        .run("こんにちは", &chain_spec(&["ug", "la", "ky"]))
        .await
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("la → ky"));
    assert!(message.contains("2 completed step(s)"));
    // The fourth hop was never attempted
    assert_eq!(translator.call_count(), 3);
}

#[tokio::test]
async fn test_controllerRun_twoConcurrentChains_shouldNotInterfere() {
    let first = MockTranslator::working();
    let second = MockTranslator::working();

    let controller_a =
        Controller::with_translator(Config::default(), Arc::new(first.clone()));
    let controller_b =
        Controller::with_translator(Config::default(), Arc::new(second.clone()));

    let spec_a = chain_spec(&["ug", "la"]);
    let spec_b = chain_spec(&["ky"]);
    let (a, b) = tokio::join!(
        controller_a.run("こんにちは", &spec_a),
        controller_b.run("おはよう", &spec_b),
    );

    assert!(a.is_ok());
    assert!(b.is_ok());
    assert_eq!(first.call_count(), 3);
    assert_eq!(second.call_count(), 2);
}
