//! Author field normalisation.

use crate::models::{AuthorField, AuthorInfo};

/// Normalises either author shape into discrete name/email/url parts.
pub fn normalize(field: &AuthorField) -> AuthorInfo {
    match field {
        AuthorField::Object(info) => info.clone(),
        AuthorField::Text(text) => parse_author(text),
    }
}

/// Parses an npm person string: `"Name <email> (url)"`, every part optional.
///
/// Malformed input degrades to whatever parts can be found.
pub fn parse_author(text: &str) -> AuthorInfo {
    let email = delimited(text, '<', '>');
    let url = delimited(text, '(', ')');

    let name_end = text.find(['<', '(']).unwrap_or(text.len());
    let name = non_empty(&text[..name_end]);

    AuthorInfo { name, email, url }
}

fn delimited(text: &str, open: char, close: char) -> Option<String> {
    let start = text.find(open)? + open.len_utf8();
    let len = text[start..].find(close)?;
    non_empty(&text[start..start + len])
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}
