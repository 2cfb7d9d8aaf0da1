//! The submit pipeline: one user message in, one classified outcome out.

use std::time::Instant;

use neurochat_core::{ChatConfig, Transcript};

use crate::client::CompletionClient;
use crate::error::RequestError;
use crate::limiter::RateLimiter;
use crate::prompt::build_prompt;
use crate::wire::CompletionRequest;

/// A successful completion.
///
/// The pipeline never writes to the transcript itself: the caller commits
/// the exchange with [`Transcript::commit_exchange`] after rendering, so
/// the history is unchanged on every failure path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    pub text: String,
}

/// Run one turn against the completion endpoint.
///
/// Steps: rate gate, window the last `max_history_messages` transcript
/// entries, mark the limiter, issue the single HTTP attempt, classify.
/// The transcript is only read; both shared state values are passed in
/// explicitly. Empty `user_text` is the caller's job to filter out.
pub async fn submit(
    client: &CompletionClient,
    config: &ChatConfig,
    transcript: &Transcript,
    limiter: &mut RateLimiter,
    user_text: &str,
) -> Result<AssistantReply, RequestError> {
    debug_assert!(!user_text.trim().is_empty());

    let now = Instant::now();
    if let Err(wait) = limiter.check(now) {
        log::debug!("rate limited, {:.1}s remaining", wait.as_secs_f64());
        return Err(RequestError::RateLimited { wait });
    }

    let window = transcript.window(config.max_history_messages);
    let request = CompletionRequest {
        model: config.model.clone(),
        prompt: build_prompt(&config.system_prompt, window, user_text),
        max_tokens: config.max_tokens,
        temperature: config.temperature,
        stop: CompletionRequest::stop_sequences(),
    };

    // The attempt counts against the limit whether or not it succeeds, so
    // a caller cannot retry-storm a server that is already down.
    limiter.mark(now);

    log::debug!(
        "POST {} ({} history messages in window)",
        client.api_url(),
        window.len()
    );
    let text = client.complete(&request).await?;
    Ok(AssistantReply { text })
}
