use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::application::ports::{ProviderClient, ProviderClientError};
use crate::domain::ProviderResponse;

use super::data_url::DataUrl;
use super::generation_options::GenerationOptions;
use super::provider_http::{parse_envelope, send_request};

/// Client for hosted backends speaking the OpenAI chat-completions protocol
/// (DeepSeek and compatibles). Authenticates with a bearer token.
pub struct OpenAiClient {
    client: Client,
    name: &'static str,
    base_url: String,
    model: String,
    api_key: String,
    options: GenerationOptions,
}

impl OpenAiClient {
    pub fn new(
        name: &'static str,
        base_url: &str,
        model: &str,
        api_key: &str,
        options: GenerationOptions,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(options.timeout).build()?;
        Ok(Self {
            client,
            name,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
            options,
        })
    }
}

#[derive(Deserialize)]
struct ChatCompletion {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ChatMessage,
}

#[derive(Deserialize)]
struct ChatMessage {
    content: Option<String>,
}

#[async_trait]
impl ProviderClient for OpenAiClient {
    #[tracing::instrument(
        skip(self, document, prompt),
        fields(provider = self.name, model = %self.model)
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
            "messages": [
                {
                    "role": "user",
                    "content": [
                        {
                            "type": "text",
                            "text": prompt
                        },
                        {
                            "type": "image_url",
                            "image_url": { "url": data_url.to_string() }
                        }
                    ]
                }
            ],
            "temperature": self.options.temperature,
            "max_tokens": self.options.max_tokens
        });

        tracing::info!(
            content_type,
            base64_length = data_url.payload_len(),
            data_url_preview = %data_url.preview(),
            "Sending document to provider"
        );

        let url = format!("{}/v1/chat/completions", self.base_url);
        let request = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body);

        let raw = send_request(request, self.name).await?;
        let completion: ChatCompletion = parse_envelope(&raw, self.name)?;

        let Some(choice) = completion.choices.into_iter().next() else {
            return Err(ProviderClientError::InvalidResponse(
                "response has no choices".to_string(),
            ));
        };

        let content = choice.message.content.unwrap_or_default();
        if content.trim().is_empty() {
            tracing::error!("Provider choice carries no content");
            return Err(ProviderClientError::InvalidResponse(
                "empty message content".to_string(),
            ));
        }

        tracing::info!(length = content.len(), "Provider response received");

        Ok(ProviderResponse::new(content))
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
