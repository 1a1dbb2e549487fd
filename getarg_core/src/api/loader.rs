use crate::table::raw::RawTable;
use crate::table::ArgTable;
use crate::tokens::scan_token;

#[cfg(feature = "tracing_debug")]
use tracing::debug;

/// A configurable loader for the option table.
///
/// The default loader reads the conventional `-key[=value]` / `--key[=value]` syntax, skipping the program name.
/// [`ArgTable::load`] is shorthand for `Loader::default().load(..)`.
///
/// ### Example
/// ```
/// use getarg_core::Loader;
///
/// let table = Loader::new()
///     .slash_prefix(true)
///     .lowercase_keys(true)
///     .load(["program", "/PAC=1", "-Bar=Eleven"]);
///
/// assert!(table.get_flag("-pac"));
/// assert_eq!(table.get_arg("-bar", ""), "Eleven");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loader {
    skip_program_name: bool,
    slash_prefix: bool,
    lowercase_keys: bool,
}

impl Default for Loader {
    fn default() -> Self {
        Self {
            skip_program_name: true,
            slash_prefix: false,
            lowercase_keys: false,
        }
    }
}

impl Loader {
    /// Create a loader with the default conventions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the first token is the program name, and so is skipped (default: `true`).
    ///
    /// ### Example
    /// ```
    /// use getarg_core::Loader;
    ///
    /// let table = Loader::new()
    ///     .skip_program_name(false)
    ///     .load(["-pac"]);
    ///
    /// assert!(table.get_flag("-pac"));
    /// ```
    pub fn skip_program_name(mut self, skip: bool) -> Self {
        self.skip_program_name = skip;
        self
    }

    /// Whether a leading `/` introduces an option, in the manner of Windows programs (default: `false`).
    /// When set, `/key=value` is equivalent to `-key=value`.
    pub fn slash_prefix(mut self, slash_prefix: bool) -> Self {
        self.slash_prefix = slash_prefix;
        self
    }

    /// Whether option keys are case-insensitive (default: `false`).
    /// When set, keys are ASCII lowercased, both when loaded and when looked up.
    /// Values are never altered.
    pub fn lowercase_keys(mut self, lowercase_keys: bool) -> Self {
        self.lowercase_keys = lowercase_keys;
        self
    }

    /// Load the option table from the Cli argument vector.
    ///
    /// Loading happens in two passes:
    /// 1. Tokens are scanned into the raw table, until the first positional token.
    /// Each option overwrites the single-value table and appends to the multi-value table.
    /// 2. Negated flags (`-no<name>`) are resolved onto `<name>`, unless `<name>` was supplied directly.
    pub fn load<I, S>(&self, args: I) -> ArgTable
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tokens = args.into_iter();

        if self.skip_program_name {
            tokens.next();
        }

        let mut raw = RawTable::default();
        let mut remaining: Vec<String> = Vec::default();

        for token in tokens.by_ref() {
            let token = token.as_ref();

            match scan_token(token, self.slash_prefix) {
                Some(option) => {
                    if self.lowercase_keys {
                        raw.insert(option.key.to_ascii_lowercase(), option.value);
                    } else {
                        raw.insert(option.key, option.value);
                    }
                }
                None => {
                    #[cfg(feature = "tracing_debug")]
                    {
                        debug!("Positional token '{token}' ends option scanning.");
                    }

                    remaining.push(token.to_string());
                    break;
                }
            }
        }

        remaining.extend(tokens.map(|token| token.as_ref().to_string()));
        ArgTable::from_raw(raw, remaining, self.lowercase_keys)
    }
}
