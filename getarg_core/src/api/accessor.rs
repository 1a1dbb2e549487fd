use crate::coerce::{atoi, interpret_bool};
use crate::table::ArgTable;

impl ArgTable {
    /// Get the string value of an option, or `default` when it was not supplied.
    ///
    /// Keys are given with their leading dash (ex: `"-pac"`); `"--pac"` and `"pac"` look up the same option.
    /// A bare flag (ex: `-pac`) has the empty string as its value.
    ///
    /// ### Example
    /// ```
    /// use getarg_core::ArgTable;
    ///
    /// let table = ArgTable::load(["program", "-pac", "-bar=eleven"]);
    ///
    /// assert_eq!(table.get_arg("-pac", "default"), "");
    /// assert_eq!(table.get_arg("-bar", "default"), "eleven");
    /// assert_eq!(table.get_arg("-fo", "default"), "default");
    /// ```
    pub fn get_arg<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.value(key).unwrap_or(default)
    }

    /// Get the integer value of an option, or `default` when it was not supplied.
    ///
    /// The value is converted leniently via [`atoi`](crate::coerce::atoi): a bare flag or non-numeric value is `0`.
    /// Use [`ArgTable::try_get_int_arg`] to detect malformed values.
    ///
    /// ### Example
    /// ```
    /// use getarg_core::ArgTable;
    ///
    /// let table = ArgTable::load(["program", "-pac=11", "-bar=NaN"]);
    ///
    /// assert_eq!(table.get_int_arg("-pac", 0), 11);
    /// assert_eq!(table.get_int_arg("-bar", 1), 0);
    /// assert_eq!(table.get_int_arg("-fo", 5), 5);
    /// ```
    pub fn get_int_arg(&self, key: &str, default: i64) -> i64 {
        self.value(key).map(atoi).unwrap_or(default)
    }

    /// Get the boolean value of an option, or `default` when it was not supplied.
    ///
    /// The value is interpreted via [`interpret_bool`](crate::coerce::interpret_bool): a bare flag is `true`, otherwise any non-zero integer.
    /// A negated flag `-no<name>` supplies the opposite state for `<name>`, unless `<name>` was given directly.
    ///
    /// ### Example
    /// ```
    /// use getarg_core::ArgTable;
    ///
    /// let table = ArgTable::load(["program", "-pac", "-nofo", "-bar=0", "-nobar"]);
    ///
    /// assert!(table.get_bool_arg("-pac", false));
    /// assert!(!table.get_bool_arg("-fo", true));
    /// assert!(!table.get_bool_arg("-bar", true));
    /// assert!(table.get_bool_arg("-other", true));
    /// ```
    pub fn get_bool_arg(&self, key: &str, default: bool) -> bool {
        self.value(key).map(interpret_bool).unwrap_or(default)
    }

    /// Get the boolean value of an option, defaulting to `false`.
    pub fn get_flag(&self, key: &str) -> bool {
        self.get_bool_arg(key, false)
    }

    /// Whether the option is present, either directly or via its negation.
    ///
    /// This distinguishes an absent option from one whose value happens to match the default.
    pub fn is_set(&self, key: &str) -> bool {
        self.value(key).is_some()
    }

    /// Get every value directly supplied for an option, in Cli order.
    ///
    /// ### Example
    /// ```
    /// use getarg_core::ArgTable;
    ///
    /// let table = ArgTable::load(["program", "-connect=a", "-connect=b", "-noconnect"]);
    ///
    /// assert_eq!(table.get_arg("-connect", ""), "b");
    /// assert_eq!(table.get_multi_arg("-connect"), ["a", "b"]);
    /// assert!(table.get_multi_arg("-other").is_empty());
    /// ```
    pub fn get_multi_arg(&self, key: &str) -> &[String] {
        self.multi_values(key).unwrap_or_default()
    }

    /// The keys supplied on the Cli, without dashes, in the order first supplied.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order().iter().map(String::as_str)
    }

    /// The positional token that ended option scanning, and every token after it.
    pub fn remaining(&self) -> &[String] {
        self.remaining_tokens()
    }

    /// The number of options in the table, including those resolved from negations.
    pub fn len(&self) -> usize {
        self.size()
    }

    /// Whether the table holds no options.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }
}
