//! Request Normalizer — resolves the interview parameters from the several
//! payload shapes the voice-agent platform produces.
//!
//! Instead of merging objects and destructuring, each known shape gets a
//! typed extractor, and extractors are consulted in a fixed precedence order
//! per field. The first source that carries the key wins; the hardcoded
//! default applies only when no source carries it at all. A key present with
//! an empty string is a real value and does NOT fall through to the default.

use serde_json::Value;

/// The flat parameter set driving prompt construction and the persisted record.
#[derive(Debug, Clone, PartialEq)]
pub struct InterviewParams {
    pub role: String,
    pub interview_type: String,
    pub level: String,
    /// Raw comma-separated value as sent; split via [`InterviewParams::techstack_list`].
    pub techstack: String,
    pub amount: String,
    pub user_id: String,
    pub user_name: String,
}

impl InterviewParams {
    /// Resolves parameters from an arbitrary request body.
    /// A non-object body (including `null`) yields all defaults.
    pub fn from_body(body: &Value) -> Self {
        let sources = collect_sources(body);

        InterviewParams {
            role: find_string(&sources, &["role"]).unwrap_or_else(|| "unknown".to_string()),
            interview_type: find_string(&sources, &["type"])
                .unwrap_or_else(|| "technical".to_string()),
            level: find_string(&sources, &["level"]).unwrap_or_else(|| "junior".to_string()),
            techstack: find_techstack(&sources),
            amount: find_amount(&sources).unwrap_or_else(|| "5".to_string()),
            user_id: find_string(&sources, &["userid", "userId"])
                .unwrap_or_else(|| "anonymous".to_string()),
            user_name: find_string(&sources, &["username", "userName"])
                .unwrap_or_else(|| "Unknown User".to_string()),
        }
    }

    /// Comma-splits the raw techstack into trimmed, non-empty entries.
    pub fn techstack_list(&self) -> Vec<String> {
        self.techstack
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect()
    }
}

/// Builds the ordered source list, highest precedence first:
/// tool-call arguments, assistant variable values, top-level variable values,
/// then the top-level body itself.
fn collect_sources(body: &Value) -> Vec<Value> {
    let mut sources = Vec::new();

    if let Some(args) = tool_call_arguments(body) {
        sources.push(args);
    }
    if let Some(vars) = nested_object(body, &["message", "assistant", "variableValues"]) {
        sources.push(vars.clone());
    }
    if let Some(vars) = nested_object(body, &["variableValues"]) {
        sources.push(vars.clone());
    }
    if body.is_object() {
        sources.push(body.clone());
    }

    sources
}

/// Pulls the first tool call's function arguments, checking the `toolCalls`
/// spelling before `toolCallList`. Arguments arrive either as an object or as
/// a JSON-encoded string holding one.
fn tool_call_arguments(body: &Value) -> Option<Value> {
    let message = body.get("message")?;

    for list_key in ["toolCalls", "toolCallList"] {
        let args = message
            .get(list_key)
            .and_then(|calls| calls.get(0))
            .and_then(|call| call.get("function"))
            .and_then(|function| function.get("arguments"));

        match args {
            Some(Value::Object(_)) => return args.cloned(),
            Some(Value::String(raw)) => {
                if let Ok(parsed @ Value::Object(_)) = serde_json::from_str::<Value>(raw) {
                    return Some(parsed);
                }
            }
            _ => {}
        }
    }

    None
}

fn nested_object<'a>(body: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = body;
    for key in path {
        current = current.get(key)?;
    }
    current.is_object().then_some(current)
}

/// First string value found for any of `keys`, scanning sources in
/// precedence order. Null and non-string values count as absent.
fn find_string(sources: &[Value], keys: &[&str]) -> Option<String> {
    for source in sources {
        for key in keys {
            if let Some(Value::String(s)) = source.get(key) {
                return Some(s.clone());
            }
        }
    }
    None
}

/// `amount` is advisory text: strings pass through, numbers are stringified.
fn find_amount(sources: &[Value]) -> Option<String> {
    for source in sources {
        match source.get("amount") {
            Some(Value::String(s)) => return Some(s.clone()),
            Some(Value::Number(n)) => return Some(n.to_string()),
            _ => {}
        }
    }
    None
}

/// `techstack` keeps first-present-wins semantics across value types: a
/// present non-string value resolves to the empty string (so the record gets
/// an empty list) rather than falling through to a lower-precedence source.
fn find_techstack(sources: &[Value]) -> String {
    for source in sources {
        match source.get("techstack") {
            Some(Value::String(s)) => return s.clone(),
            Some(Value::Null) | None => {}
            Some(_) => return String::new(),
        }
    }
    String::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_for_empty_body() {
        let params = InterviewParams::from_body(&json!({}));
        assert_eq!(params.role, "unknown");
        assert_eq!(params.interview_type, "technical");
        assert_eq!(params.level, "junior");
        assert_eq!(params.techstack, "");
        assert_eq!(params.amount, "5");
        assert_eq!(params.user_id, "anonymous");
        assert_eq!(params.user_name, "Unknown User");
    }

    #[test]
    fn test_defaults_for_null_body() {
        let params = InterviewParams::from_body(&Value::Null);
        assert_eq!(params.role, "unknown");
        assert_eq!(params.techstack_list(), Vec::<String>::new());
    }

    #[test]
    fn test_top_level_fields() {
        let params = InterviewParams::from_body(&json!({
            "role": "Backend Engineer",
            "type": "behavioural",
            "level": "senior",
            "techstack": "Rust, Postgres",
            "amount": "3",
            "userid": "u-1"
        }));
        assert_eq!(params.role, "Backend Engineer");
        assert_eq!(params.interview_type, "behavioural");
        assert_eq!(params.level, "senior");
        assert_eq!(params.amount, "3");
        assert_eq!(params.user_id, "u-1");
        assert_eq!(params.techstack_list(), vec!["Rust", "Postgres"]);
    }

    #[test]
    fn test_tool_call_arguments_beat_all_other_sources() {
        let params = InterviewParams::from_body(&json!({
            "role": "X",
            "variableValues": { "role": "Y" },
            "message": {
                "assistant": { "variableValues": { "role": "Y2" } },
                "toolCalls": [
                    { "function": { "arguments": { "role": "Z" } } }
                ]
            }
        }));
        assert_eq!(params.role, "Z");
    }

    #[test]
    fn test_variable_values_beat_top_level() {
        let params = InterviewParams::from_body(&json!({
            "role": "X",
            "variableValues": { "role": "Y" }
        }));
        assert_eq!(params.role, "Y");
    }

    #[test]
    fn test_assistant_variable_values_beat_top_level_variable_values() {
        let params = InterviewParams::from_body(&json!({
            "variableValues": { "level": "mid" },
            "message": { "assistant": { "variableValues": { "level": "staff" } } }
        }));
        assert_eq!(params.level, "staff");
    }

    #[test]
    fn test_tool_call_list_spelling() {
        let params = InterviewParams::from_body(&json!({
            "message": {
                "toolCallList": [
                    { "function": { "arguments": { "amount": "7" } } }
                ]
            }
        }));
        assert_eq!(params.amount, "7");
    }

    #[test]
    fn test_tool_call_arguments_as_json_string() {
        let params = InterviewParams::from_body(&json!({
            "message": {
                "toolCalls": [
                    { "function": { "arguments": "{\"role\": \"SRE\", \"amount\": 4}" } }
                ]
            }
        }));
        assert_eq!(params.role, "SRE");
        assert_eq!(params.amount, "4");
    }

    #[test]
    fn test_present_empty_string_wins_over_default() {
        let params = InterviewParams::from_body(&json!({ "role": "" }));
        assert_eq!(params.role, "");
    }

    #[test]
    fn test_null_and_non_string_values_fall_through() {
        let params = InterviewParams::from_body(&json!({
            "role": null,
            "variableValues": { "level": 3 }
        }));
        assert_eq!(params.role, "unknown");
        assert_eq!(params.level, "junior");
    }

    #[test]
    fn test_numeric_amount_is_stringified() {
        let params = InterviewParams::from_body(&json!({ "amount": 10 }));
        assert_eq!(params.amount, "10");
    }

    #[test]
    fn test_techstack_non_string_yields_empty_list() {
        let params = InterviewParams::from_body(&json!({
            "techstack": ["Rust", "Go"],
            "variableValues": { "techstack": "Python" }
        }));
        assert_eq!(params.techstack, "");
        assert_eq!(params.techstack_list(), Vec::<String>::new());
    }

    #[test]
    fn test_techstack_splitting_trims_and_drops_empties() {
        let params = InterviewParams::from_body(&json!({ "techstack": " Rust , , Tokio ," }));
        assert_eq!(params.techstack_list(), vec!["Rust", "Tokio"]);
    }
}
