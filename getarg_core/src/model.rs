use crate::constant::{DASH, NEGATION_PREFIX};

/// An option token, split into its canonical key and raw value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token<'t> {
    pub key: &'t str,
    pub value: &'t str,
}

/// Strip one leading dash, and then a second if present.
/// Anything without a leading dash is returned as is.
pub(crate) fn canonical_key(raw: &str) -> &str {
    let key = raw.strip_prefix(DASH).unwrap_or(raw);
    key.strip_prefix(DASH).unwrap_or(key)
}

/// The key negated by `key`, if it is of the form `no<name>` with a non-empty `<name>`.
pub(crate) fn negation_target(key: &str) -> Option<&str> {
    key.strip_prefix(NEGATION_PREFIX)
        .filter(|target| !target.is_empty())
}
