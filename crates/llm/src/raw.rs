//! Raw Debug Call
//!
//! A bypass POST to the provider's chat-completions endpoint, made before the
//! primary agent call purely so raw text is on hand if the primary path later
//! fails. Capped at 512 completion tokens with a 15-second timeout, no
//! retries. Failures come back as `Err`; the caller logs and moves on.

use std::time::Duration;

use tracing::debug;

use super::provider::parse_http_error;
use super::types::{LlmError, LlmResult, ProviderConfig};

/// Token cap for the debug completion.
const RAW_CALL_MAX_TOKENS: u32 = 512;

/// Hard per-request timeout for the debug completion.
const RAW_CALL_TIMEOUT: Duration = Duration::from_secs(15);

/// POST the prompt straight to `<base_url>/v1/chat/completions` and return
/// the raw response body, unparsed.
pub async fn fetch_raw_completion(
    client: &reqwest::Client,
    config: &ProviderConfig,
    prompt: &str,
) -> LlmResult<String> {
    let url = format!(
        "{}/v1/chat/completions",
        config.base_url.trim_end_matches('/')
    );
    let body = serde_json::json!({
        "model": config.model,
        "messages": [{"role": "user", "content": prompt}],
        "max_tokens": RAW_CALL_MAX_TOKENS,
    });

    debug!(%url, model = %config.model, "debug completion request");

    let response = client
        .post(&url)
        .timeout(RAW_CALL_TIMEOUT)
        .json(&body)
        .send()
        .await?;

    let status = response.status().as_u16();
    let body_text = response.text().await?;

    if status != 200 {
        return Err(parse_http_error(status, &body_text));
    }

    Ok(body_text)
}

/// Extract `choices[0].message.content` from a stored completion body.
///
/// Anything short of a string at that path is an extraction error; the
/// handler treats it as "no fallback text available".
pub fn extract_chat_content(raw_body: &str) -> LlmResult<String> {
    let envelope: serde_json::Value = serde_json::from_str(raw_body)
        .map_err(|e| LlmError::InvalidResponse(format!("debug body is not JSON: {e}")))?;

    envelope["choices"][0]["message"]["content"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| {
            LlmError::InvalidResponse("debug body has no message content".to_string())
        })
}
