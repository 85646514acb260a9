use serde_json::Value;

use crate::error::ChefError;
use crate::model::RecipeSuggestion;

/// Pull the JSON array payload out of a free-form model reply.
///
/// Models regularly wrap the array in markdown fences or surround it with
/// commentary despite being told not to; everything outside the first `[`
/// and the last `]` is discarded.
fn extract_array_text(raw: &str) -> Result<String, ChefError> {
    // Remove any leading/trailing whitespace and code-fence markers,
    // wherever they appear
    let cleaned = raw.trim().replace("```json", "").replace("```", "");

    let start = cleaned.find('[');
    let end = cleaned.rfind(']');
    match (start, end) {
        (Some(start), Some(end)) if start <= end => Ok(cleaned[start..=end].to_string()),
        _ => Err(ChefError::malformed("no array found", raw)),
    }
}

/// Parse the reply down to a non-empty JSON array.
fn parse_array(raw: &str) -> Result<Vec<Value>, ChefError> {
    let slice = extract_array_text(raw)?;

    let value: Value = serde_json::from_str(&slice)
        .map_err(|e| ChefError::malformed(format!("invalid JSON: {e}"), slice.as_str()))?;

    match value {
        Value::Array(items) if !items.is_empty() => Ok(items),
        _ => Err(ChefError::EmptyResult),
    }
}

/// Parse a generation reply into recipe suggestions.
///
/// All-or-nothing: one record failing validation fails the whole batch.
/// When `cap` is given, entries beyond it are dropped before validation
/// rather than treated as an error.
pub fn parse_recipes(raw: &str, cap: Option<usize>) -> Result<Vec<RecipeSuggestion>, ChefError> {
    let mut items = parse_array(raw)?;
    if let Some(cap) = cap {
        items.truncate(cap);
    }

    items
        .into_iter()
        .map(serde_json::from_value)
        .collect::<Result<Vec<RecipeSuggestion>, _>>()
        .map_err(|e| ChefError::malformed(format!("recipe record rejected: {e}"), raw))
}

/// Parse a scan reply into a flat list of ingredient names.
///
/// No schema beyond "array of scalars": strings pass through, numbers and
/// booleans are stringified. Compound elements fail the whole batch.
pub fn parse_ingredients(raw: &str) -> Result<Vec<String>, ChefError> {
    parse_array(raw)?
        .into_iter()
        .map(|item| match item {
            Value::String(s) => Ok(s),
            Value::Number(n) => Ok(n.to_string()),
            Value::Bool(b) => Ok(b.to_string()),
            other => Err(ChefError::malformed(
                format!("ingredient entry is not a scalar: {other}"),
                raw,
            )),
        })
        .collect()
}
