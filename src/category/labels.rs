use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::core::Numeric;
use crate::error::{Error, Result};

/// One value with its label, as stored in JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueLabel<T> {
    pub value: T,
    pub label: String,
}

/// Bijective mapping between data and string labels.
///
/// Each value has at most one label and each label names at most one value.
/// Iteration follows insertion order.
#[derive(Debug, Clone)]
pub struct DataLabelCollection<D: Eq + Hash + Clone> {
    entries: Vec<(D, String)>,
    by_value: HashMap<D, usize>,
    by_label: HashMap<String, usize>,
}

impl<D: Eq + Hash + Clone + Debug> DataLabelCollection<D> {
    pub fn new() -> Self {
        DataLabelCollection {
            entries: Vec::new(),
            by_value: HashMap::new(),
            by_label: HashMap::new(),
        }
    }

    /// Adds a pair. Fails with `DuplicateKey` if either side is already mapped.
    pub fn add(&mut self, value: D, label: impl Into<String>) -> Result<()> {
        let label = label.into();
        if self.by_value.contains_key(&value) {
            return Err(Error::DuplicateKey(format!(
                "value {:?} already has a label",
                value
            )));
        }
        if self.by_label.contains_key(&label) {
            return Err(Error::DuplicateKey(format!(
                "label '{}' is already assigned",
                label
            )));
        }

        let position = self.entries.len();
        self.by_value.insert(value.clone(), position);
        self.by_label.insert(label.clone(), position);
        self.entries.push((value, label));
        Ok(())
    }

    pub fn try_get_label(&self, value: &D) -> Option<&str> {
        self.by_value
            .get(value)
            .map(|&i| self.entries[i].1.as_str())
    }

    pub fn try_get_value(&self, label: &str) -> Option<&D> {
        self.by_label.get(label).map(|&i| &self.entries[i].0)
    }

    pub fn contains_value(&self, value: &D) -> bool {
        self.by_value.contains_key(value)
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.by_label.contains_key(label)
    }

    /// Removes the pair for `value`, returning its label
    pub fn remove(&mut self, value: &D) -> Option<String> {
        let position = self.by_value.remove(value)?;
        let (_, label) = self.entries.remove(position);
        self.by_label.remove(&label);

        // positions after the removed entry shift down by one
        for (i, (v, l)) in self.entries.iter().enumerate().skip(position) {
            self.by_value.insert(v.clone(), i);
            self.by_label.insert(l.clone(), i);
        }
        Some(label)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.by_value.clear();
        self.by_label.clear();
    }

    /// Independent copy
    pub fn copied(&self) -> Self {
        self.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&D, &str)> + '_ {
        self.entries.iter().map(|(v, l)| (v, l.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<D: Eq + Hash + Clone + Debug> Default for DataLabelCollection<D> {
    fn default() -> Self {
        Self::new()
    }
}

// Same pairs, in any order
impl<D: Eq + Hash + Clone + Debug> PartialEq for DataLabelCollection<D> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(v, l)| other.try_get_label(v) == Some(l))
    }
}

// Hash/Eq by value equality so floats can key the collection
#[derive(Debug, Clone, Copy)]
struct ValueKey<T: Numeric>(T);

impl<T: Numeric> PartialEq for ValueKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0.lookup_key() == other.0.lookup_key()
    }
}

impl<T: Numeric> Eq for ValueKey<T> {}

impl<T: Numeric> Hash for ValueKey<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.lookup_key().hash(state);
    }
}

/// Labels for numeric values, e.g. `1 => "agree"`.
///
/// NaN values share one entry and `-0.0` is looked up as `0.0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "Vec<ValueLabel<T>>",
    into = "Vec<ValueLabel<T>>",
    bound = "T: Numeric"
)]
pub struct ValueLabelCollection<T: Numeric> {
    inner: DataLabelCollection<ValueKey<T>>,
}

impl<T: Numeric> ValueLabelCollection<T> {
    pub fn new() -> Self {
        ValueLabelCollection {
            inner: DataLabelCollection::new(),
        }
    }

    /// Adds a pair. Fails with `DuplicateKey` if either side is already mapped.
    pub fn add(&mut self, value: T, label: impl Into<String>) -> Result<()> {
        self.inner.add(ValueKey(value), label)
    }

    pub fn try_get_label(&self, value: T) -> Option<&str> {
        self.inner.try_get_label(&ValueKey(value))
    }

    pub fn try_get_value(&self, label: &str) -> Option<T> {
        self.inner.try_get_value(label).map(|k| k.0)
    }

    pub fn contains_value(&self, value: T) -> bool {
        self.inner.contains_value(&ValueKey(value))
    }

    pub fn contains_label(&self, label: &str) -> bool {
        self.inner.contains_label(label)
    }

    pub fn remove(&mut self, value: T) -> Option<String> {
        self.inner.remove(&ValueKey(value))
    }

    pub fn clear(&mut self) {
        self.inner.clear();
    }

    pub fn copied(&self) -> Self {
        self.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = (T, &str)> + '_ {
        self.inner.iter().map(|(k, l)| (k.0, l))
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl<T: Numeric> Default for ValueLabelCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Numeric> TryFrom<Vec<ValueLabel<T>>> for ValueLabelCollection<T> {
    type Error = Error;

    fn try_from(pairs: Vec<ValueLabel<T>>) -> Result<Self> {
        let mut collection = Self::new();
        for pair in pairs {
            collection.add(pair.value, pair.label)?;
        }
        Ok(collection)
    }
}

impl<T: Numeric> From<ValueLabelCollection<T>> for Vec<ValueLabel<T>> {
    fn from(collection: ValueLabelCollection<T>) -> Self {
        collection
            .inner
            .entries
            .into_iter()
            .map(|(k, label)| ValueLabel { value: k.0, label })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bidirectional_lookup() {
        let mut labels = ValueLabelCollection::new();
        labels.add(1, "agree").unwrap();
        labels.add(2, "disagree").unwrap();

        assert_eq!(labels.try_get_label(1), Some("agree"));
        assert_eq!(labels.try_get_value("disagree"), Some(2));
        assert_eq!(labels.try_get_label(3), None);
        assert!(labels.contains_label("agree"));
    }

    #[test]
    fn test_duplicates_rejected_either_side() {
        let mut labels = ValueLabelCollection::new();
        labels.add(1.0, "one").unwrap();
        assert!(matches!(labels.add(1.0, "uno"), Err(Error::DuplicateKey(_))));
        assert!(matches!(labels.add(2.0, "one"), Err(Error::DuplicateKey(_))));
        assert_eq!(labels.len(), 1);
    }

    #[test]
    fn test_nan_and_signed_zero_keys() {
        let mut labels = ValueLabelCollection::new();
        labels.add(f64::NAN, "missing").unwrap();
        labels.add(0.0, "zero").unwrap();
        assert_eq!(labels.try_get_label(f64::NAN), Some("missing"));
        assert_eq!(labels.try_get_label(-0.0), Some("zero"));
    }

    #[test]
    fn test_remove_keeps_indices_consistent() {
        let mut labels = DataLabelCollection::new();
        labels.add("a", "first").unwrap();
        labels.add("b", "second").unwrap();
        labels.add("c", "third").unwrap();

        assert_eq!(labels.remove(&"a"), Some("first".to_string()));
        assert_eq!(labels.try_get_label(&"c"), Some("third"));
        assert_eq!(labels.try_get_value("second"), Some(&"b"));
        assert!(!labels.contains_label("first"));

        labels.add("a", "first").unwrap();
        let order: Vec<_> = labels.iter().map(|(v, _)| *v).collect();
        assert_eq!(order, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_copied_is_independent() {
        let mut labels = ValueLabelCollection::new();
        labels.add(1u8, "x").unwrap();
        let mut copy = labels.copied();
        copy.clear();
        assert_eq!(labels.len(), 1);
        assert!(copy.is_empty());
    }
}
