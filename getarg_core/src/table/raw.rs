use std::collections::HashMap;

/// The option tables exactly as supplied on the Cli, before any negation is resolved.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct RawTable {
    values: HashMap<String, String>,
    multi: HashMap<String, Vec<String>>,
    order: Vec<String>,
}

impl RawTable {
    pub(crate) fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();

        match self.multi.get_mut(&key) {
            Some(values) => values.push(value.clone()),
            None => {
                self.order.push(key.clone());
                self.multi.insert(key.clone(), vec![value.clone()]);
            }
        }

        self.values.insert(key, value);
    }

    pub(crate) fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Keys and their final values, in the order the keys were first supplied.
    pub(crate) fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order.iter().filter_map(|key| {
            self.values
                .get(key)
                .map(|value| (key.as_str(), value.as_str()))
        })
    }

    pub(crate) fn consume(
        self,
    ) -> (
        HashMap<String, String>,
        HashMap<String, Vec<String>>,
        Vec<String>,
    ) {
        let RawTable {
            values,
            multi,
            order,
        } = self;
        (values, multi, order)
    }
}
