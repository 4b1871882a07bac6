use log::debug;

use crate::config::Config;
use crate::llm::perplexity::PerplexityClient;
use crate::llm::{NoopClient, SuggestionClient};

/// Build the LLM client based on CLI + config.
pub fn build_suggestion_client(cfg: &Config, no_model: bool) -> Box<dyn SuggestionClient> {
    if no_model {
        debug!("Using NoopClient (no model calls)");
        return Box::new(NoopClient);
    }

    debug!("Using PerplexityClient with model: {}", cfg.model);

    Box::new(PerplexityClient::new(cfg))
}
