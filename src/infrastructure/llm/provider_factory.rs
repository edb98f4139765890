use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::ProviderClient;
use crate::presentation::config::{AiSettings, ProviderSettings};

use super::generation_options::GenerationOptions;
use super::lm_studio_client::LmStudioClient;
use super::openai_client::OpenAiClient;

pub const DEEPSEEK_API_KEY_ENV: &str = "DEEPSEEK_API_KEY";
pub const DEEPSEEK_DEFAULT_BASE_URL: &str = "https://api.deepseek.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    LmStudio,
    DeepSeek,
}

impl ProviderKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LmStudio => "lmstudio",
            Self::DeepSeek => "deepseek",
        }
    }
}

impl TryFrom<&str> for ProviderKind {
    type Error = ProviderFactoryError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        match name.trim().to_lowercase().as_str() {
            "lmstudio" => Ok(Self::LmStudio),
            "deepseek" => Ok(Self::DeepSeek),
            other => Err(ProviderFactoryError::UnknownProvider(other.to_string())),
        }
    }
}

/// Startup-time configuration failures. None of these can occur per request.
#[derive(Debug, thiserror::Error)]
pub enum ProviderFactoryError {
    #[error("unsupported AI provider: {0}")]
    UnknownProvider(String),
    #[error("no settings block for the {0} provider")]
    MissingSettings(&'static str),
    #[error("model is required for the {0} provider")]
    MissingModel(&'static str),
    #[error("base_url is required for the {0} provider")]
    MissingBaseUrl(&'static str),
    #[error("API key for the {provider} provider is not configured; set {env_var} or ai.{provider}.api_key")]
    MissingApiKey {
        provider: &'static str,
        env_var: &'static str,
    },
    #[error("HTTP client initialization failed: {0}")]
    InitializationFailed(String),
}

pub struct ProviderFactory;

impl ProviderFactory {
    /// Builds the single provider client the process serves with.
    pub fn create(settings: &AiSettings) -> Result<Arc<dyn ProviderClient>, ProviderFactoryError> {
        Self::create_with_env(settings, |key| std::env::var(key).ok())
    }

    /// Same as [`ProviderFactory::create`] with an explicit environment lookup.
    pub fn create_with_env<E>(
        settings: &AiSettings,
        env: E,
    ) -> Result<Arc<dyn ProviderClient>, ProviderFactoryError>
    where
        E: Fn(&str) -> Option<String>,
    {
        let kind = ProviderKind::try_from(settings.provider.as_str())?;
        let name = kind.as_str();

        match kind {
            ProviderKind::LmStudio => {
                let provider = settings
                    .lmstudio
                    .as_ref()
                    .ok_or(ProviderFactoryError::MissingSettings(name))?;
                let model = required(provider.model.as_deref())
                    .ok_or(ProviderFactoryError::MissingModel(name))?;
                let base_url = required(provider.base_url.as_deref())
                    .ok_or(ProviderFactoryError::MissingBaseUrl(name))?;

                tracing::info!(provider = name, model, base_url, "Loading AI provider");
                let client = LmStudioClient::new(base_url, model, generation_options(provider))
                    .map_err(|e| ProviderFactoryError::InitializationFailed(e.to_string()))?;
                Ok(Arc::new(client))
            }
            ProviderKind::DeepSeek => {
                let provider = settings
                    .deepseek
                    .as_ref()
                    .ok_or(ProviderFactoryError::MissingSettings(name))?;
                let model = required(provider.model.as_deref())
                    .ok_or(ProviderFactoryError::MissingModel(name))?;
                let api_key = env(DEEPSEEK_API_KEY_ENV)
                    .filter(|key| !key.trim().is_empty())
                    .or_else(|| required(provider.api_key.as_deref()).map(str::to_string))
                    .ok_or(ProviderFactoryError::MissingApiKey {
                        provider: name,
                        env_var: DEEPSEEK_API_KEY_ENV,
                    })?;
                let base_url =
                    required(provider.base_url.as_deref()).unwrap_or(DEEPSEEK_DEFAULT_BASE_URL);

                tracing::info!(provider = name, model, base_url, "Loading AI provider");
                let client = OpenAiClient::new(
                    name,
                    base_url,
                    model,
                    &api_key,
                    generation_options(provider),
                )
                .map_err(|e| ProviderFactoryError::InitializationFailed(e.to_string()))?;
                Ok(Arc::new(client))
            }
        }
    }
}

fn required(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn generation_options(settings: &ProviderSettings) -> GenerationOptions {
    GenerationOptions {
        timeout: Duration::from_millis(settings.timeout_ms),
        temperature: settings.temperature,
        max_tokens: settings.max_tokens,
    }
}
