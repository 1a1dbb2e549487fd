use crate::constant::{FALSE_VALUE, TRUE_VALUE};
use crate::table::ArgTable;

impl ArgTable {
    /// Set an option value, unless the option is already present.
    /// Returns whether the value was set.
    ///
    /// This lets a program apply computed defaults after loading, without overriding what the user supplied.
    /// The multi-value table is not affected.
    ///
    /// ### Example
    /// ```
    /// use getarg_core::ArgTable;
    ///
    /// let mut table = ArgTable::load(["program", "-pac=1"]);
    ///
    /// assert!(!table.soft_set_arg("-pac", "2"));
    /// assert!(table.soft_set_arg("-bar", "3"));
    /// assert_eq!(table.get_int_arg("-pac", 0), 1);
    /// assert_eq!(table.get_int_arg("-bar", 0), 3);
    /// ```
    pub fn soft_set_arg(&mut self, key: &str, value: impl Into<String>) -> bool {
        if self.is_set(key) {
            return false;
        }

        let key = self.lookup_key(key).into_owned();
        self.values_mut().insert(key, value.into());
        true
    }

    /// Set an option to a boolean value (`"1"` or `"0"`), unless the option is already present.
    /// Returns whether the value was set.
    pub fn soft_set_bool_arg(&mut self, key: &str, value: bool) -> bool {
        self.soft_set_arg(key, if value { TRUE_VALUE } else { FALSE_VALUE })
    }
}

#[cfg(test)]
mod tests {
    use crate::table::ArgTable;
    use rstest::rstest;

    #[test]
    fn soft_set_absent() {
        let mut table = ArgTable::default();
        assert!(table.soft_set_arg("-pac", "eleven"));
        assert_eq!(table.get_arg("-pac", ""), "eleven");
        assert!(table.get_multi_arg("-pac").is_empty());
        assert!(!table.soft_set_arg("--pac", "twelve"));
        assert_eq!(table.get_arg("-pac", ""), "eleven");
    }

    #[rstest]
    #[case(vec![("pac", "")])]
    #[case(vec![("pac", "0")])]
    #[case(vec![("nopac", "")])]
    fn soft_set_present(#[case] pairs: Vec<(&str, &str)>) {
        let mut table = ArgTable::from_pairs(pairs);
        let before = table.clone();
        assert!(!table.soft_set_arg("-pac", "1"));
        assert!(!table.soft_set_bool_arg("-pac", true));
        assert_eq!(table, before);
    }

    #[rstest]
    #[case(true, "1")]
    #[case(false, "0")]
    fn soft_set_bool(#[case] value: bool, #[case] expected: &str) {
        let mut table = ArgTable::default();
        assert!(table.soft_set_bool_arg("-pac", value));
        assert_eq!(table.get_arg("-pac", ""), expected);
        assert_eq!(table.get_flag("-pac"), value);
    }
}
