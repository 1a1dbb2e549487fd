use std::borrow::Cow;
use std::collections::HashMap;
use std::env;

use crate::api::Loader;
use crate::model::canonical_key;

pub(crate) mod raw;
pub(crate) mod resolve;

use raw::RawTable;
use resolve::resolve_negations;

/// The option table produced by loading a Cli argument vector.
///
/// Built once via [`ArgTable::load`] (or a configured [`Loader`]), then queried any number of times through the typed accessors.
/// Loading again produces a new, independent table.
///
/// ### Example
/// ```
/// use getarg_core::ArgTable;
///
/// let table = ArgTable::load(["program", "-pac", "--bar=12", "-nofo"]);
///
/// assert!(table.get_flag("-pac"));
/// assert_eq!(table.get_int_arg("-bar", 0), 12);
/// assert!(!table.get_bool_arg("-fo", true));
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ArgTable {
    values: HashMap<String, String>,
    multi: HashMap<String, Vec<String>>,
    order: Vec<String>,
    remaining: Vec<String>,
    lowercase_keys: bool,
}

impl ArgTable {
    /// Load the option table from a Cli argument vector.
    /// The first element is taken to be the program name, and is skipped.
    ///
    /// Option scanning stops at the first token that does not begin with a dash.
    /// Loading never fails; see [`Loader`] to configure the token conventions.
    ///
    /// ### Example
    /// ```
    /// use getarg_core::ArgTable;
    ///
    /// let table = ArgTable::load(vec!["program", "-pac=11", "file.txt", "-bar"]);
    ///
    /// assert_eq!(table.get_arg("-pac", ""), "11");
    /// // Tokens after the first positional are not options.
    /// assert!(!table.is_set("-bar"));
    /// assert_eq!(table.remaining(), ["file.txt", "-bar"]);
    /// ```
    pub fn load<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Loader::default().load(args)
    }

    /// Load the option table from [`env::args`].
    pub fn from_env() -> Self {
        Self::load(env::args())
    }

    /// Build a table directly from `(key, value)` pairs, as though each were supplied as `-key=value`.
    /// Negations are resolved in the same way as [`ArgTable::load`].
    #[cfg(any(test, feature = "unit_test"))]
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut raw = RawTable::default();

        for (key, value) in pairs {
            raw.insert(key, value);
        }

        Self::from_raw(raw, Vec::default(), false)
    }

    pub(crate) fn from_raw(raw: RawTable, remaining: Vec<String>, lowercase_keys: bool) -> Self {
        let values = resolve_negations(&raw);
        let (_, multi, order) = raw.consume();

        Self {
            values,
            multi,
            order,
            remaining,
            lowercase_keys,
        }
    }

    /// Normalize an accessor key (ex: `"-pac"`) into its table key.
    pub(crate) fn lookup_key<'k>(&self, key: &'k str) -> Cow<'k, str> {
        let key = canonical_key(key);

        if self.lowercase_keys {
            Cow::Owned(key.to_ascii_lowercase())
        } else {
            Cow::Borrowed(key)
        }
    }

    pub(crate) fn value(&self, key: &str) -> Option<&str> {
        self.values
            .get(self.lookup_key(key).as_ref())
            .map(String::as_str)
    }

    pub(crate) fn multi_values(&self, key: &str) -> Option<&[String]> {
        self.multi
            .get(self.lookup_key(key).as_ref())
            .map(Vec::as_slice)
    }

    pub(crate) fn values_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.values
    }

    pub(crate) fn order(&self) -> &[String] {
        &self.order
    }

    pub(crate) fn remaining_tokens(&self) -> &[String] {
        &self.remaining
    }

    pub(crate) fn size(&self) -> usize {
        self.values.len()
    }
}
