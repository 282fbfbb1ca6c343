use once_cell::sync::Lazy;
use regex::Regex;

// Runs of allowed characters. Everything between two runs is a separator.
static TOKEN_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-z0-9äöüß'\-]+").expect("token pattern is valid"));

/// Returns `true` if `c` may appear inside a token (after lowercasing).
pub fn is_allowed(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | 'ä' | 'ö' | 'ü' | 'ß' | '\'' | '-')
}

/// Lowercase `text` and split it into tokens of allowed characters.
///
/// Works the same on a whole document and on a single line. Input without any
/// allowed character yields an empty vector.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    TOKEN_REGEX
        .find_iter(&lowered)
        .map(|m| m.as_str().to_owned())
        .collect()
}
