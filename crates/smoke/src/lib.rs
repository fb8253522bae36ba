//! Helpers for the browser smoke tests.
//!
//! The browser script itself lives in `tests/`; this crate holds the pieces
//! that can be unit-tested without a WebDriver session.

/// The two mutually exclusive theme tokens the frontend applies to `<body>`.
pub const THEME_CLASSES: [&str; 2] = ["dark-theme", "light-theme"];

/// Detect which theme token a `class` attribute carries.
///
/// Returns the token when exactly one of the two is present, `None` when
/// neither is applied yet (theme still loading) or when both are (broken
/// state, since the tokens are mutually exclusive).
pub fn detect_theme(class_attr: &str) -> Option<&'static str> {
    let present: Vec<&'static str> = THEME_CLASSES
        .into_iter()
        .filter(|token| class_attr.split_whitespace().any(|c| c == *token))
        .collect();

    match present.as_slice() {
        [one] => Some(one),
        _ => None,
    }
}
