// Keys of the form `no<name>` negate `<name>`.
pub(crate) const NEGATION_PREFIX: &str = "no";

// Values written when a negated flag is resolved onto its target.
pub(crate) const TRUE_VALUE: &str = "1";
pub(crate) const FALSE_VALUE: &str = "0";

pub(crate) const DASH: char = '-';
pub(crate) const SLASH: char = '/';
pub(crate) const SEPARATOR: char = '=';
