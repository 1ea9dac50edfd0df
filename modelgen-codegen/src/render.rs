//! Single-pass `{{ token }}` substitution.
//!
//! The template is scanned once and every placeholder is resolved against
//! a fixed token map, so a substituted value containing placeholder-like
//! text is never re-substituted. Unknown placeholders pass through
//! untouched.

enum TokenValue {
    /// Replace the placeholder with this text
    Text(String),
    /// Drop the placeholder along with its trailing blank line
    Remove,
}

/// Fixed mapping of placeholder name to replacement
#[derive(Default)]
pub struct TokenMap {
    entries: Vec<(String, TokenValue)>,
}

impl TokenMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, token: &str, value: impl Into<String>) {
        self.entries
            .push((token.to_string(), TokenValue::Text(value.into())));
    }

    /// Mark a placeholder block for removal instead of substitution.
    pub fn remove_block(&mut self, token: &str) {
        self.entries.push((token.to_string(), TokenValue::Remove));
    }

    fn get(&self, token: &str) -> Option<&TokenValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == token)
            .map(|(_, value)| value)
    }
}

/// Render a template against a token map in a single pass.
pub fn render_tokens(template: &str, tokens: &TokenMap) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        let Some(close) = rest[start + 2..].find("}}") else {
            break;
        };
        let end = start + 2 + close + 2;
        let token = rest[start + 2..start + 2 + close].trim();

        match tokens.get(token) {
            Some(TokenValue::Text(value)) => {
                out.push_str(&rest[..start]);
                out.push_str(value);
                rest = &rest[end..];
            }
            Some(TokenValue::Remove) => {
                out.push_str(&rest[..start]);
                rest = &rest[end..];
                for _ in 0..2 {
                    match rest.strip_prefix('\n') {
                        Some(stripped) => rest = stripped,
                        None => break,
                    }
                }
            }
            None => {
                out.push_str(&rest[..end]);
                rest = &rest[end..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Render a list of identifiers as a source array literal.
///
/// Empty lists collapse to `[]`; otherwise one quoted element per line,
/// in stable order.
pub fn array_literal(items: &[String]) -> String {
    if items.is_empty() {
        return "[]".to_string();
    }

    let mut out = String::from("[\n        '");
    out.push_str(&items.join("',\n        '"));
    out.push_str("'\n    ]");
    out
}

/// Render a boolean as a lowercase source literal.
pub fn bool_literal(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
