//! Fallback Text Parser
//!
//! Converts free-form model text into a `Plan` when the structured path has
//! already failed. A short chain of line heuristics: normalize escaped
//! newlines, strip escape artifacts, hunt for a numeric answer from the
//! bottom up, then collect the remaining lines as steps. Best effort and
//! total; garbage in still produces a valid `Plan`.

use std::sync::OnceLock;

use regex::Regex;

use crate::plan::{truncate_chars, Plan};

/// Single step reported when there was no text to parse at all.
pub const NO_CONTENT_NOTICE: &str = "No content returned.";

/// Upper bound on collected steps.
const MAX_STEPS: usize = 6;

/// Character cap on an answer taken from the last line.
const MAX_ANSWER_LINE_CHARS: usize = 200;

/// Character cap on the synthetic single step built from the whole text.
const MAX_SINGLE_STEP_CHARS: usize = 500;

/// `= <number>` anywhere in a line, integer or decimal, optional sign.
fn equals_number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"=\s*([+-]?\d+(?:\.\d+)?)").unwrap())
}

/// A bare number anchored at end of line, same numeric shape.
fn trailing_number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"([+-]?\d+(?:\.\d+)?)\s*$").unwrap())
}

/// Escaped bracket and parenthesis artifacts left by some models.
fn escape_artifact_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\\\[|\\\]|\\\(|\\\)").unwrap())
}

/// Characters treated as line separators, beyond `\n` and `\r\n`.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{b}'
            | '\u{c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Parse raw natural-language text into a best-effort `Plan`.
///
/// `None` yields the no-content plan. Otherwise:
/// 1. Replace escaped `\n` sequences with real newlines; split on any line
///    separator into trimmed, non-empty lines; strip `\[` `\]` `\(` `\)`
///    artifacts from each.
/// 2. Scan lines bottom-up for an answer, trying `= <number>` then a bare
///    trailing number on each line; if no line matches, the last line capped
///    at 200 characters.
/// 3. Collect up to 6 lines as steps, skipping any line equal to the answer.
///    If none remain, the whole normalized text (capped at 500 characters)
///    becomes the single step.
pub fn parse_plain_text(raw: Option<&str>) -> Plan {
    let Some(text) = raw else {
        return Plan {
            steps: vec![NO_CONTENT_NOTICE.to_string()],
            answer: String::new(),
        };
    };

    let normalized = text.replace("\\n", "\n");
    let cleaned: Vec<String> = normalized
        .split(is_line_break)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| escape_artifact_regex().replace_all(line, "").into_owned())
        .collect();

    let mut answer = String::new();
    for line in cleaned.iter().rev() {
        if let Some(caps) = equals_number_regex().captures(line) {
            answer = caps[1].to_string();
            break;
        }
        if let Some(caps) = trailing_number_regex().captures(line) {
            answer = caps[1].to_string();
            break;
        }
    }

    if answer.is_empty() {
        if let Some(last) = cleaned.last() {
            answer = truncate_chars(last, MAX_ANSWER_LINE_CHARS);
        }
    }

    let mut steps = Vec::new();
    for line in &cleaned {
        // Artifact stripping can expose fresh edge whitespace, so compare trimmed.
        if line.trim() == answer {
            continue;
        }
        steps.push(line.clone());
        if steps.len() >= MAX_STEPS {
            break;
        }
    }

    if steps.is_empty() {
        steps.push(truncate_chars(&normalized, MAX_SINGLE_STEP_CHARS));
    }

    Plan { steps, answer }
}
