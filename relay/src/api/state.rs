use crate::config::Config;
use crate::error::Result;
use crate::llm::MessagesClient;

#[derive(Clone)]
pub struct AppState {
    /// Shared upstream client; only pools connections, holds no per-request state.
    pub llm: MessagesClient,
}

impl AppState {
    pub fn new(config: &Config) -> Result<Self> {
        let llm = MessagesClient::new(&config.upstream)?;

        Ok(Self { llm })
    }
}
