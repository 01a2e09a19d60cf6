//! Response Parser — turns the model's free-text reply into question strings.
//!
//! The prompt asks for a bare JSON array, but models drift: code fences,
//! numbered lists, stray prose. Both outcomes are modelled as variants of one
//! result type, so no error crosses this boundary — the heuristic branch
//! absorbs every structured-parse failure.

/// Outcome of parsing model output. Both variants carry the same list type;
/// the discriminant records which path produced it (useful in logs).
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedQuestions {
    /// The reply parsed strictly as a JSON array of strings.
    Structured(Vec<String>),
    /// The reply was line-split with ordinal prefixes stripped.
    Heuristic(Vec<String>),
}

impl ParsedQuestions {
    pub fn into_list(self) -> Vec<String> {
        match self {
            ParsedQuestions::Structured(questions) | ParsedQuestions::Heuristic(questions) => {
                questions
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ParsedQuestions::Structured(_) => "structured",
            ParsedQuestions::Heuristic(_) => "heuristic",
        }
    }
}

/// Parses model output. Always yields a list (possibly empty), never fails.
pub fn parse_questions(text: &str) -> ParsedQuestions {
    let stripped = strip_json_fences(text);
    if let Ok(questions) = serde_json::from_str::<Vec<String>>(stripped) {
        return ParsedQuestions::Structured(questions);
    }
    ParsedQuestions::Heuristic(split_into_lines(text))
}

/// Line-splitting fallback: split on newlines, strip a leading `N.` / `N`
/// ordinal, trim, and drop empty lines.
fn split_into_lines(text: &str) -> Vec<String> {
    text.split('\n')
        .map(strip_ordinal_prefix)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Strips a leading run of digits with an optional dot (`"1. "`, `"12 "`)
/// and surrounding whitespace.
fn strip_ordinal_prefix(line: &str) -> &str {
    let line = line.trim();
    let rest = line.trim_start_matches(|c: char| c.is_ascii_digit());
    if rest.len() == line.len() {
        return line;
    }
    rest.strip_prefix('.').unwrap_or(rest).trim_start()
}

/// Strips ```json ... ``` or ``` ... ``` code fences from model output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
