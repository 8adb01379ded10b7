use log::error;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::errors::ClientError;
use crate::providers::Translator;

/// Client for a LibreTranslate-compatible translation endpoint
#[derive(Debug)]
pub struct LibreTranslate {
    /// Full URL of the translate route, e.g. "https://translate.argosopentech.com/translate"
    endpoint: String,
    /// API key, sent only when non-empty
    api_key: String,
    /// HTTP client for making requests
    client: Client,
}

/// Translation request body for the LibreTranslate API
#[derive(Debug, Serialize)]
pub struct TranslateRequest<'a> {
    /// Text to translate
    q: &'a str,
    /// Source language code
    source: &'a str,
    /// Target language code
    target: &'a str,
    /// Response format, always plain text
    format: &'a str,
    /// API key, omitted when the instance does not require one
    #[serde(skip_serializing_if = "Option::is_none")]
    api_key: Option<&'a str>,
}

/// Translation response from the LibreTranslate API
#[derive(Debug, Deserialize)]
pub struct TranslateResponse {
    /// Translated text
    #[serde(rename = "translatedText")]
    pub translated_text: String,
}

/// One entry of the remote language list served next to the translate route
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteLanguage {
    /// Language code
    pub code: String,
    /// Human-readable name as reported by the instance
    pub name: String,
}

impl LibreTranslate {
    /// Create a new client for the given translate endpoint URL
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: String::new(),
            client: Client::builder()
                .timeout(timeout)
                .build()
                .unwrap_or_default(),
        }
    }

    /// Set the API key to send with every request
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// The endpoint URL this client talks to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Derive the URL of the language-list route from the translate endpoint.
    ///
    /// LibreTranslate serves `GET /languages` as a sibling of `POST /translate`.
    fn languages_url(&self) -> Result<Url, ClientError> {
        let mut url = Url::parse(&self.endpoint)
            .map_err(|e| ClientError::Protocol(format!("Invalid endpoint URL: {}", e)))?;
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| ClientError::Protocol("Endpoint URL cannot be a base".to_string()))?;
            // A trailing slash leaves an empty final segment; drop it before the route name
            segments.pop_if_empty().pop();
            segments.push("languages");
        }
        Ok(url)
    }

    /// Fetch the language list supported by the remote instance
    pub async fn languages(&self) -> Result<Vec<RemoteLanguage>, ClientError> {
        let url = self.languages_url()?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Language list request failed ({}): {}", status, body);
            return Err(ClientError::Transport {
                status_code: status.as_u16(),
                body,
            });
        }

        serde_json::from_str::<Vec<RemoteLanguage>>(&body)
            .map_err(|e| ClientError::Protocol(format!("Invalid language list: {}", e)))
    }
}

#[async_trait::async_trait]
impl Translator for LibreTranslate {
    async fn translate(&self, text: &str, source: &str, target: &str)
        -> Result<String, ClientError>
    {
        let request = TranslateRequest {
            q: text,
            source,
            target,
            format: "text",
            api_key: if self.api_key.is_empty() {
                None
            } else {
                Some(&self.api_key)
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Translation API error ({}): {}", status, body);
            return Err(ClientError::Transport {
                status_code: status.as_u16(),
                body,
            });
        }

        let parsed: TranslateResponse = serde_json::from_str(&body).map_err(|e| {
            error!(
                "Failed to parse translation response: {}. Raw response (first 500 chars): {}",
                e,
                body.chars().take(500).collect::<String>()
            );
            ClientError::Protocol(e.to_string())
        })?;

        Ok(parsed.translated_text)
    }

    async fn test_connection(&self) -> Result<(), ClientError> {
        self.languages().await.map(|_| ())
    }
}
