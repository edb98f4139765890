mod data_url;
mod generation_options;
mod lm_studio_client;
mod openai_client;
mod provider_factory;
mod provider_http;

pub use data_url::DataUrl;
pub use generation_options::GenerationOptions;
pub use lm_studio_client::LmStudioClient;
pub use openai_client::OpenAiClient;
pub use provider_factory::{
    DEEPSEEK_API_KEY_ENV, DEEPSEEK_DEFAULT_BASE_URL, ProviderFactory, ProviderFactoryError,
    ProviderKind,
};
