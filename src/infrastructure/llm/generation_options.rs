use std::time::Duration;

/// Per-provider sampling limits and request deadline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationOptions {
    pub timeout: Duration,
    pub temperature: f32,
    pub max_tokens: u32,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            temperature: 0.1,
            max_tokens: 2000,
        }
    }
}
