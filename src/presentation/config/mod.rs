mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    AiSettings, CorsSettings, LoggingSettings, ProviderSettings, ServerSettings, Settings,
};
