//! Conversion between selector strings and selector parts.
//!
//! A selector string is a dot-separated list whose first part is the tag
//! (`node` or `relationship`) and whose remaining parts are classifiers:
//!
//! ```text
//! node.Person.Employee
//! relationship.WORKS_AT
//! ```
//!
//! A classifier that contains a literal dot is written with the dot escaped
//! as `\.`, so `node.v1\.2` is the tag `node` with the classifier `v1.2`.

/// Splits a selector string into `[tag, ...classifiers]`.
///
/// Dots preceded by a backslash are kept as literal dots. Empty segments
/// (leading, trailing or doubled dots) are dropped.
///
/// # Example
///
/// ```rust
/// use graphstyle::selector::parse_selector_string;
///
/// assert_eq!(parse_selector_string("node.Person"), vec!["node", "Person"]);
/// assert_eq!(parse_selector_string(r"node.v1\.2"), vec!["node", "v1.2"]);
/// ```
pub fn parse_selector_string(selector: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut chars = selector.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' if chars.peek() == Some(&'.') => {
                chars.next();
                current.push('.');
            }
            '.' => {
                if !current.is_empty() {
                    parts.push(std::mem::take(&mut current));
                }
            }
            _ => current.push(c),
        }
    }
    if !current.is_empty() {
        parts.push(current);
    }
    parts
}

/// Joins selector parts into a selector string, escaping literal dots.
///
/// This is the inverse of [`parse_selector_string`] for every string it
/// produces.
pub fn selector_array_to_string<S: AsRef<str>>(parts: &[S]) -> String {
    parts
        .iter()
        .map(|part| part.as_ref().replace('.', "\\."))
        .collect::<Vec<_>>()
        .join(".")
}
