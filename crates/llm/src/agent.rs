//! Agent Orchestration
//!
//! Runs the primary model call for a solve request: fixed system prompt,
//! bounded retries for transient transport failures, and retry-with-repair
//! when the model's output does not parse into the plan shape. Exhausting
//! either budget is an error; the request handler owns the fallback from
//! there.

use std::sync::Arc;

use tracing::{debug, warn};

use pathlens_core::{AgentOutput, Plan};

use super::provider::LlmProvider;
use super::types::{LlmError, LlmResult, Message};

// ============================================================================
// System Prompt
// ============================================================================

pub const AGENT_SYSTEM_PROMPT: &str = r#"You are an assistant that analyzes file metadata only.
Return ONLY valid JSON with the EXACT schema: {"steps": ["..."], "answer": "..."}

Rules:
- Do NOT read any file.
- Do NOT claim you opened or accessed the file.
- Infer the file type AND its likely role from the filepath, name, and extension.

No extra text, markdown, or commentary. Return RAW JSON only."#;

// ============================================================================
// Agent
// ============================================================================

/// Retries allowed after the initial attempt for transient transport errors.
const DEFAULT_MAX_RETRIES: u32 = 2;

/// Repair rounds allowed when output fails shape validation.
const DEFAULT_OUTPUT_RETRIES: u32 = 2;

/// Orchestrates one plan-producing conversation with a provider.
pub struct Agent {
    provider: Arc<dyn LlmProvider>,
    max_retries: u32,
    output_retries: u32,
}

impl Agent {
    /// Create an agent with the default retry budgets.
    pub fn new(provider: Arc<dyn LlmProvider>) -> Self {
        Self {
            provider,
            max_retries: DEFAULT_MAX_RETRIES,
            output_retries: DEFAULT_OUTPUT_RETRIES,
        }
    }

    /// Name of the provider backing this agent.
    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Run the conversation until the model yields plan-shaped output or a
    /// retry budget runs out.
    pub async fn run(&self, prompt: &str) -> LlmResult<AgentOutput> {
        let mut messages = vec![Message::user(prompt)];
        let mut attempts = 0u32;

        loop {
            let response_text = self.send_with_retry(&messages).await?;
            attempts += 1;

            match parse_agent_output(&response_text) {
                Ok(output) => {
                    debug!(provider = self.provider.name(), attempts, "agent produced plan output");
                    return Ok(output);
                }
                Err(parse_error) => {
                    if attempts > self.output_retries {
                        return Err(LlmError::OutputValidation {
                            attempts,
                            detail: parse_error,
                        });
                    }
                    debug!(error = %parse_error, "agent output parse failed, retrying with repair prompt");
                    let repair = build_repair_prompt(&response_text, &parse_error);
                    messages.push(Message::assistant(response_text));
                    messages.push(Message::user(repair));
                }
            }
        }
    }

    /// One conversation round, re-sent for transient failures only.
    async fn send_with_retry(&self, messages: &[Message]) -> LlmResult<String> {
        let mut attempt = 0u32;
        loop {
            match self
                .provider
                .send_message(Some(AGENT_SYSTEM_PROMPT), messages)
                .await
            {
                Ok(text) => return Ok(text),
                Err(e) if e.is_transient() && attempt < self.max_retries => {
                    attempt += 1;
                    warn!(attempt, error = %e, "transient provider failure, retrying");
                }
                Err(e) => return Err(e),
            }
        }
    }
}

// ============================================================================
// Output Parsing
// ============================================================================

/// Parse model text into raw agent output.
///
/// Strict parse first, then fenced/brace extraction. Anything that still is
/// not plan-shaped comes back as an error message for the repair prompt.
fn parse_agent_output(response_text: &str) -> Result<AgentOutput, String> {
    let trimmed = response_text.trim();
    if trimmed.is_empty() {
        return Err("model returned an empty response".to_string());
    }

    if let Ok(plan) = serde_json::from_str::<Plan>(trimmed) {
        return Ok(AgentOutput::Plan(plan));
    }

    let json_str = extract_json_block(trimmed);
    match serde_json::from_str::<Plan>(&json_str) {
        Ok(plan) => Ok(AgentOutput::Plan(plan)),
        Err(e) => Err(format!(
            "response is not a valid plan: {} (starts with: {:?})",
            e,
            trimmed.chars().take(100).collect::<String>()
        )),
    }
}

/// Extract a JSON object from response text, handling markdown fences and
/// surrounding prose.
fn extract_json_block(response_text: &str) -> String {
    let trimmed = response_text.trim();

    // Try markdown code fences
    if let Some(start) = trimmed.find("```") {
        let after_fence = &trimmed[start + 3..];
        let content_start = if let Some(nl) = after_fence.find('\n') {
            nl + 1
        } else {
            0
        };
        let content = &after_fence[content_start..];
        if let Some(end) = content.find("```") {
            return content[..end].trim().to_string();
        }
    }

    // Try the first { and last } for a JSON object
    if let (Some(start), Some(end)) = (trimmed.find('{'), trimmed.rfind('}')) {
        if start <= end {
            return trimmed[start..=end].to_string();
        }
    }

    trimmed.to_string()
}

fn build_repair_prompt(original_response: &str, parse_error: &str) -> String {
    format!(
        "Your previous response could not be parsed as the required plan JSON.\n\n\
         Parse error: {}\n\n\
         Your previous response was:\n{}\n\n\
         Respond with ONLY a valid JSON object with keys \"steps\" (list of strings) \
         and \"answer\" (string). No markdown fences, no explanatory text. Just the \
         raw JSON object starting with {{ and ending with }}.",
        parse_error, original_response
    )
}
