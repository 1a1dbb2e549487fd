use std::num::ParseIntError;

use thiserror::Error;

use crate::coerce::strict_int;
use crate::table::ArgTable;

/// An option value that does not convert to the requested type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidValue {
    /// The value is not a decimal integer in the range of `i64`.
    #[error("'{value}' for option '{key}' is not an integer: {source}.")]
    NotAnInteger {
        /// The option key, as it was queried.
        key: String,
        /// The stored value.
        value: String,
        /// The underlying conversion failure.
        #[source]
        source: ParseIntError,
    },
}

impl ArgTable {
    /// Get the integer value of an option, rejecting malformed values.
    ///
    /// Returns `Ok(None)` when the option was not supplied.
    /// Unlike [`ArgTable::get_int_arg`], the whole value must be a decimal integer; a bare flag is an error.
    ///
    /// ### Example
    /// ```
    /// use getarg_core::ArgTable;
    ///
    /// let table = ArgTable::load(["program", "-pac=11", "-bar=NaN"]);
    ///
    /// assert_eq!(table.try_get_int_arg("-pac"), Ok(Some(11)));
    /// assert!(table.try_get_int_arg("-bar").is_err());
    /// assert_eq!(table.try_get_int_arg("-fo"), Ok(None));
    /// ```
    pub fn try_get_int_arg(&self, key: &str) -> Result<Option<i64>, InvalidValue> {
        self.value(key)
            .map(|value| {
                strict_int(value).map_err(|source| InvalidValue::NotAnInteger {
                    key: key.to_string(),
                    value: value.to_string(),
                    source,
                })
            })
            .transpose()
    }

    /// Get the boolean value of an option, rejecting malformed values.
    ///
    /// Returns `Ok(None)` when the option was not supplied.
    /// A bare flag is `true`; otherwise the value must be a decimal integer, and is `true` iff non-zero.
    pub fn try_get_bool_arg(&self, key: &str) -> Result<Option<bool>, InvalidValue> {
        match self.value(key) {
            Some("") => Ok(Some(true)),
            Some(_) => Ok(self.try_get_int_arg(key)?.map(|n| n != 0)),
            None => Ok(None),
        }
    }
}
