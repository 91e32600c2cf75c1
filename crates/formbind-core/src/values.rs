use std::collections::{BTreeMap, HashMap};

use crate::prelude_internal::*;

/// Flat form data: each key maps to its values in submission order.
///
/// Keys keep the order they were first seen in, so decoding and encoding
/// visit them deterministically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Plural)]
#[plural(len, is_empty, into_iter, into_iter_ref, new)]
pub struct FormValues(IndexMap<String, Vec<String>>);

impl FormValues {
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    /// The first value under `key`.
    pub fn first(&self, key: &str) -> Option<&str> {
        self.0.get(key)?.first().map(String::as_str)
    }

    /// Replaces every value under `key`.
    pub fn insert(&mut self, key: impl Into<String>, values: Vec<String>) -> Option<Vec<String>> {
        self.0.insert(key.into(), values)
    }

    /// Adds one more value under `key`.
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.entry(key.into()).or_default().push(value.into());
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Vec<String>> {
        self.0.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Parses `application/x-www-form-urlencoded` bytes, such as a query string.
    pub fn from_urlencoded(input: &[u8]) -> Self {
        form_urlencoded::parse(input)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }

    /// Serializes to `application/x-www-form-urlencoded`, one pair per value.
    pub fn to_urlencoded(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, values) in &self.0 {
            for value in values {
                serializer.append_pair(key, value);
            }
        }
        serializer.finish()
    }
}

impl FromIterator<(String, String)> for FormValues {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut values = FormValues::new();
        for (key, value) in iter {
            values.append(key, value);
        }
        values
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for FormValues {
    fn from_iter<T: IntoIterator<Item = (&'a str, &'a str)>>(iter: T) -> Self {
        iter.into_iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, Vec<V>); N]> for FormValues {
    fn from(entries: [(K, Vec<V>); N]) -> Self {
        FormValues(
            entries
                .into_iter()
                .map(|(key, values)| (key.into(), values.into_iter().map(Into::into).collect()))
                .collect(),
        )
    }
}

impl From<HashMap<String, Vec<String>>> for FormValues {
    fn from(map: HashMap<String, Vec<String>>) -> Self {
        FormValues(map.into_iter().collect())
    }
}

impl From<BTreeMap<String, Vec<String>>> for FormValues {
    fn from(map: BTreeMap<String, Vec<String>>) -> Self {
        FormValues(map.into_iter().collect())
    }
}

impl From<IndexMap<String, Vec<String>>> for FormValues {
    fn from(map: IndexMap<String, Vec<String>>) -> Self {
        FormValues(map)
    }
}

impl From<FormValues> for IndexMap<String, Vec<String>> {
    fn from(values: FormValues) -> Self {
        values.0
    }
}
