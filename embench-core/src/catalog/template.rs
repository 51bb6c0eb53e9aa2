use crate::error::{Error, Result};
use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Placeholder token -> resolved table reference
pub type TableBindings = HashMap<String, String>;

fn token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\{([A-Z][A-Z0-9_]*)\}").expect("static regex"))
}

/// Returns the `{TOKEN}` names referenced by a statement, in order of appearance.
///
/// A token is an upper-case identifier (`[A-Z][A-Z0-9_]*`) wrapped in braces.
/// Anything else in braces (JSON literals, lower-case words) is left alone.
pub fn placeholders(template: &str) -> Vec<&str> {
    token_regex()
        .captures_iter(template)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Fill every placeholder in `template` from `bindings`.
///
/// Fails on the first token without a binding.
pub fn fill(template: &str, bindings: &TableBindings) -> Result<String> {
    let mut out = String::with_capacity(template.len() + 64);
    let mut last = 0;

    for caps in token_regex().captures_iter(template) {
        let (Some(whole), Some(token)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let value = bindings
            .get(token.as_str())
            .ok_or_else(|| Error::MissingBinding {
                placeholder: token.as_str().to_string(),
                statement: summarize(template),
            })?;
        out.push_str(&template[last..whole.start()]);
        out.push_str(value);
        last = whole.end();
    }

    out.push_str(&template[last..]);
    Ok(out)
}

// First line of the statement, for error messages
fn summarize(template: &str) -> String {
    let line = template
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("");
    if line.len() > 80 {
        let cut = line
            .char_indices()
            .map(|(i, _)| i)
            .take_while(|i| *i <= 77)
            .last()
            .unwrap_or(0);
        format!("{}...", &line[..cut])
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bindings(pairs: &[(&str, &str)]) -> TableBindings {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_fill_replaces_every_token() {
        let b = bindings(&[("ORDERS_TABLE", "db.s.orders"), ("LINEITEM_TABLE", "db.s.lineitem")]);
        let sql = "SELECT * FROM {ORDERS_TABLE} o JOIN {LINEITEM_TABLE} l ON o.k = l.k JOIN {ORDERS_TABLE} o2";
        let filled = fill(sql, &b).unwrap();
        assert_eq!(
            filled,
            "SELECT * FROM db.s.orders o JOIN db.s.lineitem l ON o.k = l.k JOIN db.s.orders o2"
        );
    }

    #[test]
    fn test_fill_missing_binding() {
        let b = bindings(&[("ORDERS_TABLE", "orders")]);
        let err = fill("SELECT 1 FROM {PART_TABLE}", &b).unwrap_err();
        match err {
            Error::MissingBinding { placeholder, .. } => assert_eq!(placeholder, "PART_TABLE"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_non_token_braces_untouched() {
        let b = TableBindings::new();
        let sql = "SELECT PARSE_JSON('{\"a\": 1}'), '{lower}', '{}' FROM t";
        assert_eq!(fill(sql, &b).unwrap(), sql);
        assert!(placeholders(sql).is_empty());
    }

    #[test]
    fn test_placeholders_in_order() {
        let sql = "{A_TABLE} x {B2_TABLE} {A_TABLE} {not_one}";
        assert_eq!(placeholders(sql), vec!["A_TABLE", "B2_TABLE", "A_TABLE"]);
    }
}
