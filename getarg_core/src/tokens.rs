use crate::constant::{DASH, SEPARATOR, SLASH};
use crate::model::{canonical_key, Token};

/// Split a token at its first `=` into the raw key and value.
/// The value is empty when there is no `=`.
pub(crate) fn split_token(token: &str) -> (&str, &str) {
    match token.split_once(SEPARATOR) {
        Some((raw_key, value)) => (raw_key, value),
        None => (token, ""),
    }
}

/// Interpret a single Cli token as an option.
///
/// Returns `None` for a positional token (one which does not begin with a dash), which ends option scanning.
/// When `slash_prefix` is set, a leading `/` stands in for the first dash.
pub(crate) fn scan_token(token: &str, slash_prefix: bool) -> Option<Token<'_>> {
    let (raw_key, value) = split_token(token);

    let key = if raw_key.starts_with(DASH) {
        canonical_key(raw_key)
    } else if slash_prefix && raw_key.starts_with(SLASH) {
        let body = &raw_key[SLASH.len_utf8()..];
        body.strip_prefix(DASH).unwrap_or(body)
    } else {
        return None;
    };

    Some(Token { key, value })
}
