//! Property name case conversion
//!
//! Entries store camelCase keys (`fontSize`); rules are written in
//! dash-case (`font-size`).

/// `font-size` -> `fontSize`, `-webkit-transform` -> `WebkitTransform`.
///
/// A dash not followed by a lowercase letter is dropped.
pub fn camel_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut chars = name.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '-' {
            out.push(c);
            continue;
        }
        if let Some(&next) = chars.peek() {
            if next.is_ascii_lowercase() {
                out.push(next.to_ascii_uppercase());
                chars.next();
            }
        }
    }
    out
}

/// `fontSize` -> `font-size`, `WebkitTransform` -> `-webkit-transform`
pub fn dash_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
