//! Parse platform CLI JSON output into names and locations.

use super::CatalogError;

/// Strip surrounding whitespace and quote characters from a CLI string value.
pub fn strip_quotes(raw: &str) -> &str {
    raw.trim().trim_matches('"')
}

fn parse_error(operation: &str, reason: impl Into<String>) -> CatalogError {
    CatalogError::Parse {
        operation: operation.to_string(),
        reason: reason.into(),
    }
}

/// Parse `list-functions --query Functions[].FunctionName --output json`.
///
/// Expects a JSON array of strings; `null` or empty output is an empty listing.
pub fn parse_function_names(stdout: &str) -> Result<Vec<String>, CatalogError> {
    const OP: &str = "lambda list-functions";
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }
    let names: Option<Vec<String>> =
        serde_json::from_str(trimmed).map_err(|e| parse_error(OP, e.to_string()))?;
    let names = names.unwrap_or_default();
    if names.iter().any(|n| n.is_empty()) {
        return Err(parse_error(OP, "empty function name in listing"));
    }
    Ok(names)
}

/// Parse `get-function --query Code.Location --output json`.
///
/// Returns `Ok(None)` when the function has no location (`null`, empty).
/// A value that is not valid JSON is taken as text with its quotes stripped.
pub fn parse_code_location(stdout: &str) -> Result<Option<String>, CatalogError> {
    const OP: &str = "lambda get-function";
    let trimmed = stdout.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let location = match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Null) => return Ok(None),
        Ok(serde_json::Value::String(s)) => s,
        Ok(other) => {
            return Err(parse_error(
                OP,
                format!("expected a string location, got {}", json_kind(&other)),
            ))
        }
        Err(_) => strip_quotes(trimmed).to_string(),
    };
    if location.is_empty() {
        Ok(None)
    } else {
        Ok(Some(location))
    }
}

fn json_kind(v: &serde_json::Value) -> &'static str {
    match v {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
