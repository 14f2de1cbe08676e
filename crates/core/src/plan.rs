//! Plan Model & Output Coercion
//!
//! The `Plan` shape is the only entity this service returns: an ordered list
//! of step descriptions plus a final answer string. Model output arrives in
//! unpredictable forms, so `coerce_to_plan` normalizes any `AgentOutput`
//! variant into a valid `Plan` with progressively looser strategies and a
//! last-resort degenerate plan. Coercion is total: it never fails and has no
//! side effects.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Step text used when a string output could not be parsed as JSON.
pub const UNFORMATTED_TEXT_NOTICE: &str = "Model returned unformatted text; applied fallback.";

/// Step text used when the output was neither a plan, an object, nor a string.
pub const UNKNOWN_OUTPUT_NOTICE: &str = "Unknown output; fallback.";

/// Character cap applied to raw text carried into a degenerate plan's answer.
const MAX_RAW_ANSWER_CHARS: usize = 500;

/// Concise plan plus final answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Steps in order.
    pub steps: Vec<String>,
    /// Final answer, unconstrained text (may be numeric text or empty).
    pub answer: String,
}

impl Plan {
    pub fn new(steps: Vec<String>, answer: impl Into<String>) -> Self {
        Self {
            steps,
            answer: answer.into(),
        }
    }
}

/// Raw output of an agent run, before normalization.
///
/// Each variant maps to one parsing strategy in [`coerce_to_plan`]. The agent
/// normally produces `Plan`, but the adapter accepts every shape a model
/// round-trip can yield.
#[derive(Debug, Clone)]
pub enum AgentOutput {
    /// Output that already conforms to the plan shape.
    Plan(Plan),
    /// A JSON object that has not been validated against the plan shape.
    Mapping(serde_json::Map<String, Value>),
    /// Free-form model text.
    Text(String),
    /// Any other JSON value (number, array, bool, null).
    Other(Value),
}

/// Normalize any agent output into a valid `Plan`.
///
/// Strategies, first match wins:
/// 1. Already a plan: returned unchanged.
/// 2. JSON object: strict validation against the plan shape, falling through
///    to the unknown-output plan when the shape does not fit.
/// 3. String: strict JSON parse, then a greedy first-`{`-to-last-`}` substring
///    parse, then a degenerate plan carrying the first 500 characters of the
///    original text.
/// 4. Anything else: a degenerate unknown-output plan carrying the value's
///    JSON rendering, capped at 500 characters.
pub fn coerce_to_plan(output: AgentOutput) -> Plan {
    match output {
        AgentOutput::Plan(plan) => plan,
        AgentOutput::Mapping(map) => {
            let value = Value::Object(map);
            match serde_json::from_value::<Plan>(value.clone()) {
                Ok(plan) => plan,
                Err(_) => unknown_output_plan(&value),
            }
        }
        AgentOutput::Text(text) => coerce_text(&text),
        AgentOutput::Other(value) => unknown_output_plan(&value),
    }
}

fn coerce_text(text: &str) -> Plan {
    if let Ok(plan) = serde_json::from_str::<Plan>(text) {
        return plan;
    }
    if let Some(candidate) = extract_embedded_object(text) {
        if let Ok(plan) = serde_json::from_str::<Plan>(candidate) {
            return plan;
        }
    }
    Plan {
        steps: vec![UNFORMATTED_TEXT_NOTICE.to_string()],
        answer: truncate_chars(text, MAX_RAW_ANSWER_CHARS),
    }
}

fn unknown_output_plan(value: &Value) -> Plan {
    Plan {
        steps: vec![UNKNOWN_OUTPUT_NOTICE.to_string()],
        answer: truncate_chars(&value.to_string(), MAX_RAW_ANSWER_CHARS),
    }
}

/// Greedy object span: first opening brace through last closing brace,
/// newlines included. Returns `None` when no such span exists.
fn extract_embedded_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }
    Some(&text[start..=end])
}

/// Truncate to at most `max` characters, never splitting a code point.
pub(crate) fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
