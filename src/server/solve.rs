//! Solve Endpoint
//!
//! The primary/fallback state machine around a single agent invocation. The
//! target file is never opened; the model sees only the filepath string.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use pathlens_core::{coerce_to_plan, parse_plain_text, Plan};
use pathlens_llm::{extract_chat_content, fetch_raw_completion};
use serde::Deserialize;
use tracing::{debug, error};

use crate::error::ApiError;
use crate::state::AppState;

/// Placeholder substituted into the prompt when no filepath is supplied.
const MISSING_FILEPATH_MARKER: &str = "[missing]";

/// Longest raw-output slice included in a log line.
const LOG_PREVIEW_CHARS: usize = 200;

// ============================================================================
// Request Types
// ============================================================================

/// Body of `POST /agent/solve`.
#[derive(Debug, Deserialize)]
pub struct SolveRequest {
    pub instruction: String,
    #[serde(default)]
    pub filepath: Option<String>,
}

// ============================================================================
// Handler
// ============================================================================

/// Produce a plan for one instruction.
///
/// The agent is the primary path. When it fails, the raw completion captured
/// before the agent ran is parsed with line heuristics instead. Only when
/// both paths are unusable does the request fail.
pub async fn solve(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SolveRequest>,
) -> Result<Json<Plan>, ApiError> {
    let prompt = build_prompt(&request);
    debug!(prompt = %prompt, "solve prompt");

    // Captured up front so the fallback has raw text to parse if the agent
    // fails later. Failures here are logged and ignored.
    let raw_debug = if state.config.use_ollama {
        match fetch_raw_completion(&state.debug_client, &state.provider_config, &prompt).await {
            Ok(body) => {
                debug!(preview = %preview(&body), "raw completion captured");
                Some(body)
            }
            Err(e) => {
                debug!(error = %e, "raw completion call failed");
                None
            }
        }
    } else {
        None
    };

    let agent_error = match state.agent.run(&prompt).await {
        Ok(output) => return Ok(Json(coerce_to_plan(output))),
        Err(e) => e,
    };
    error!(error = %agent_error, "agent run failed");

    if let Some(body) = raw_debug.as_deref() {
        match extract_chat_content(body) {
            Ok(content) => {
                let plan = parse_plain_text(Some(&content));
                debug!(?plan, "fallback plan");
                return Ok(Json(plan));
            }
            Err(e) => error!(error = %e, "fallback extraction failed"),
        }
    }

    Err(ApiError::AgentFailed(agent_error.to_string()))
}

// ============================================================================
// Prompt Building
// ============================================================================

/// Build the analysis prompt sent to both the raw call and the agent.
///
/// Instruction and filepath are trimmed; a blank or absent filepath becomes
/// the `[missing]` marker rather than an error.
fn build_prompt(request: &SolveRequest) -> String {
    let filepath = request
        .filepath
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(MISSING_FILEPATH_MARKER);

    format!(
        "Analyze file TYPE and likely ROLE or PURPOSE based ONLY on the filepath string.\n\
         Rules:\n\
         - Do not read the file.\n\
         - Do not claim you opened the file.\n\
         - Base your answer on extension/name only.\n\n\
         Instruction: {}\n\
         Filepath: {}\n\n\
         Return JSON only in this exact format:\n\
         {{\"steps\": [\"...\"], \"answer\": \"...\"}}\n\
         IMPORTANT:\n\
         - Do NOT use Markdown\n\
         - Do NOT use code blocks\n\
         - Do NOT wrap output in ``` or ```json\n\
         - Return raw JSON only",
        request.instruction.trim(),
        filepath,
    )
}

fn preview(text: &str) -> String {
    text.chars().take(LOG_PREVIEW_CHARS).collect()
}
