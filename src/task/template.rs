use std::collections::HashMap;

/// Kickoff inputs, e.g. `{"topic": "..."}`.
pub type Inputs = HashMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemplateError {
    #[error("template variable '{0}' has no matching input")]
    MissingInput(String),
}

/// Replace `{name}` placeholders with values from `inputs`.
///
/// Only identifiers count as placeholders; any other braced text (JSON
/// samples, `{}`, `{ a }`) is copied through. Substituted values are not
/// re-scanned.
pub fn interpolate(template: &str, inputs: &Inputs) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) if is_identifier(&after[..close]) => {
                let key = &after[..close];
                let value = inputs
                    .get(key)
                    .ok_or_else(|| TemplateError::MissingInput(key.to_string()))?;
                out.push_str(value);
                rest = &after[close + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }
    out.push_str(rest);
    Ok(out)
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
