use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;

use crate::application::ports::{ProviderClient, ProviderClientError};
use crate::domain::ProviderResponse;

use super::data_url::DataUrl;
use super::generation_options::GenerationOptions;
use super::provider_http::{parse_envelope, send_request};

const PROVIDER_NAME: &str = "lmstudio";

/// Client for a local LM Studio server through its native `/api/v1/chat`
/// endpoint, which takes an `input` array and answers with an `output` array.
pub struct LmStudioClient {
    client: Client,
    base_url: String,
    model: String,
    options: GenerationOptions,
}

impl LmStudioClient {
    pub fn new(
        base_url: &str,
        model: &str,
        options: GenerationOptions,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(options.timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            options,
        })
    }
}

#[derive(Deserialize)]
struct ChatResponse {
    output: Vec<OutputItem>,
}

#[derive(Deserialize)]
struct OutputItem {
    #[serde(rename = "type", default)]
    kind: Option<String>,
    #[serde(default)]
    content: Option<Value>,
}

#[async_trait]
impl ProviderClient for LmStudioClient {
    #[tracing::instrument(
        skip(self, document, prompt),
        fields(provider = PROVIDER_NAME, model = %self.model)
    )]
    async fn process_document(
        &self,
        document: &[u8],
        content_type: &str,
        prompt: &str,
    ) -> Result<ProviderResponse, ProviderClientError> {
        let data_url = DataUrl::encode(document, content_type)?;

        let body = serde_json::json!({
            "model": self.model,
            "input": [
                {
                    "type": "text",
                    "content": prompt
                },
                {
                    "type": "image",
                    "data_url": data_url.to_string()
                }
            ],
            "temperature": self.options.temperature,
            "max_output_tokens": self.options.max_tokens
        });

        tracing::info!(
            content_type,
            base64_length = data_url.payload_len(),
            data_url_preview = %data_url.preview(),
            "Sending document to LM Studio"
        );

        let url = format!("{}/api/v1/chat", self.base_url);
        let request = self.client.post(&url).json(&body);

        let raw = send_request(request, PROVIDER_NAME).await?;
        let response: ChatResponse = parse_envelope(&raw, PROVIDER_NAME)?;

        let message = response
            .output
            .into_iter()
            .find(|item| item.kind.as_deref() == Some("message"));
        let Some(message) = message else {
            tracing::error!("LM Studio output has no message item");
            return Err(ProviderClientError::InvalidResponse(
                "no message item in output".to_string(),
            ));
        };

        let content = match message.content {
            Some(Value::String(text)) => text,
            _ => String::new(),
        };
        if content.trim().is_empty() {
            tracing::error!("LM Studio message item carries no content");
            return Err(ProviderClientError::InvalidResponse(
                "empty message content".to_string(),
            ));
        }

        tracing::info!(length = content.len(), "LM Studio response received");

        Ok(ProviderResponse::new(content))
    }

    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }
}
