//! Split freeform text into raw tokens
//!
//! Values are separated by commas, semicolons or newlines. When the first
//! value starts with a number and contains a space (e.g. `"4 8 15 16"`),
//! whitespace is treated as a separator too.

use regex::Regex;
use std::sync::OnceLock;

fn list_separator() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[,;\n]+").expect("valid regex"))
}

fn list_or_space_separator() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[\s,;]+").expect("valid regex"))
}

fn leading_number() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^-?\d").expect("valid regex"))
}

fn split_with(text: &str, separator: &Regex) -> Vec<String> {
    separator
        .split(text)
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Tokenize input text into trimmed, non-empty values in input order
pub fn tokenize(text: &str) -> Vec<String> {
    let text = text.trim();
    let tokens = split_with(text, list_separator());
    let Some(first) = tokens.first() else {
        return tokens;
    };

    if leading_number().is_match(first) && first.contains(' ') {
        return split_with(text, list_or_space_separator());
    }
    tokens
}
