pub mod perplexity;
pub mod prompt_builder;
mod prompts;

/// Trait for asking an LLM to draft test suggestions.
///
/// The contract never fails past this boundary: transport errors, bad
/// response shapes, and missing credentials all come back as readable
/// strings so the report pipeline keeps going.
pub trait SuggestionClient {
    fn suggest(&self, prompt: &str, max_tokens: u32) -> String;
}

/// No-op / dummy client for `--no-model` dry runs and offline CI.
pub struct NoopClient;

impl SuggestionClient for NoopClient {
    fn suggest(&self, prompt: &str, max_tokens: u32) -> String {
        format!(
            "[DUMMY SUGGESTIONS] model disabled; prompt was {} chars, budget {} tokens",
            prompt.len(),
            max_tokens
        )
    }
}
