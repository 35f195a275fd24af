pub mod api;
pub mod config;
pub mod error;
pub mod llm;
pub mod prompt;

use std::sync::Arc;
use config::Config;
use error::Result;
use llm::OpenAiClient;

/// Application state that will be shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub llm: Arc<OpenAiClient>,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let llm = OpenAiClient::new(&config)?;

        Ok(Self {
            config: Arc::new(config),
            llm: Arc::new(llm),
        })
    }
}
