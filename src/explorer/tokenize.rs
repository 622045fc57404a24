/// Splits free-text input into normalized ingredient tokens.
///
/// Tokens are split on whitespace and lower-cased. Repeats are kept: each one
/// costs an extra catalog request but cannot change an intersection.
pub fn tokenize_ingredients(input: &str) -> Vec<String> {
    input
        .split_whitespace()
        .map(str::to_lowercase)
        .collect()
}
