mod api;

pub use api::{
    preview, MessagesClient, ANTHROPIC_VERSION, DEFAULT_API_URL, MAX_TOKENS, MODEL,
};
