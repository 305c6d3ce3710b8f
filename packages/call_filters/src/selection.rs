//! Per-dimension option selections.
//!
//! A selection is either [`Selection::Unrestricted`], which accepts every
//! value, or [`Selection::RestrictedTo`] a non-empty set. There is no way to
//! build an empty restriction: removing the last value falls back to
//! `Unrestricted`. On the wire a selection is a plain list where `[]` means
//! unrestricted. Values serialize in sorted order, not the order they were
//! toggled on, and duplicates collapse.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Borrow;
use std::collections::BTreeSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T: Ord> {
    Unrestricted,
    RestrictedTo(Restriction<T>),
}

impl<T: Ord> Default for Selection<T> {
    fn default() -> Self {
        Self::Unrestricted
    }
}

/// A non-empty set of accepted values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Restriction<T: Ord>(BTreeSet<T>);

impl<T: Ord> Restriction<T> {
    /// Returns `None` when `values` is empty.
    pub fn new(values: impl IntoIterator<Item = T>) -> Option<Self> {
        let set: BTreeSet<T> = values.into_iter().collect();
        if set.is_empty() { None } else { Some(Self(set)) }
    }

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.0.contains(value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

impl<T: Ord> Selection<T> {
    /// Builds a selection from a store-style list: empty means unrestricted.
    pub fn from_values(values: impl IntoIterator<Item = T>) -> Self {
        match Restriction::new(values) {
            Some(restriction) => Self::RestrictedTo(restriction),
            None => Self::Unrestricted,
        }
    }

    pub fn is_unrestricted(&self) -> bool {
        matches!(self, Self::Unrestricted)
    }

    /// Whether a record carrying `value` passes this selection.
    pub fn allows<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self {
            Self::Unrestricted => true,
            Self::RestrictedTo(restriction) => restriction.contains(value),
        }
    }

    /// Whether `value` is explicitly selected (the checkbox state).
    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        match self {
            Self::Unrestricted => false,
            Self::RestrictedTo(restriction) => restriction.contains(value),
        }
    }

    /// Number of explicitly selected values; zero when unrestricted.
    pub fn len(&self) -> usize {
        match self {
            Self::Unrestricted => 0,
            Self::RestrictedTo(restriction) => restriction.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        match self {
            Self::Unrestricted => None,
            Self::RestrictedTo(restriction) => Some(restriction.iter()),
        }
        .into_iter()
        .flatten()
    }

    /// Checks or unchecks a single value.
    pub fn toggle(&mut self, value: T, checked: bool) {
        let mut values = std::mem::take(self).into_set();
        if checked {
            values.insert(value);
        } else {
            values.remove(&value);
        }
        *self = Self::from_values(values);
    }

    pub fn select_all(&mut self, values: impl IntoIterator<Item = T>) {
        *self = Self::from_values(values);
    }

    pub fn clear(&mut self) {
        *self = Self::Unrestricted;
    }

    fn into_set(self) -> BTreeSet<T> {
        match self {
            Self::Unrestricted => BTreeSet::new(),
            Self::RestrictedTo(Restriction(set)) => set,
        }
    }
}

impl<T: Ord> FromIterator<T> for Selection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T: Ord + Serialize> Serialize for Selection<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Ord + Deserialize<'de>> Deserialize<'de> for Selection<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<T>::deserialize(deserializer).map(Self::from_values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrestricted_allows_everything() {
        let selection: Selection<String> = Selection::Unrestricted;
        assert!(selection.allows("anything"));
        assert!(!selection.contains("anything"));
        assert_eq!(selection.len(), 0);
    }

    #[test]
    fn test_empty_list_is_unrestricted() {
        let selection: Selection<String> = Selection::from_values(Vec::new());
        assert!(selection.is_unrestricted());
        assert!(Restriction::<String>::new(Vec::new()).is_none());
    }

    #[test]
    fn test_restricted_allows_only_members() {
        let selection: Selection<String> = ["closed".to_string(), "open".to_string()]
            .into_iter()
            .collect();
        assert!(selection.allows("closed"));
        assert!(!selection.allows("pending"));
        assert_eq!(selection.len(), 2);
    }

    #[test]
    fn test_toggle_last_value_off_unrestricts() {
        let mut selection: Selection<String> = Selection::Unrestricted;
        selection.toggle("parent".to_string(), true);
        assert!(selection.contains("parent"));
        assert!(!selection.allows("staff"));

        selection.toggle("parent".to_string(), false);
        assert!(selection.is_unrestricted());
        assert!(selection.allows("staff"));
    }

    #[test]
    fn test_select_all_and_clear() {
        let mut selection: Selection<&str> = Selection::Unrestricted;
        selection.select_all(["a", "b", "c"]);
        assert_eq!(selection.len(), 3);

        selection.clear();
        assert!(selection.is_unrestricted());
    }

    #[test]
    fn test_wire_format_is_a_list() {
        let selection: Selection<String> = Selection::from_values(["b".to_string(), "a".to_string()]);
        assert_eq!(serde_json::to_string(&selection).unwrap(), r#"["a","b"]"#);
        assert_eq!(
            serde_json::to_string(&Selection::<String>::Unrestricted).unwrap(),
            "[]"
        );

        let parsed: Selection<String> = serde_json::from_str("[]").unwrap();
        assert!(parsed.is_unrestricted());
        let parsed: Selection<String> = serde_json::from_str(r#"["x","x"]"#).unwrap();
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn test_wire_order_is_sorted_not_click_order() {
        let mut selection: Selection<&str> = Selection::Unrestricted;
        selection.toggle("zeta", true);
        selection.toggle("alpha", true);
        assert_eq!(serde_json::to_string(&selection).unwrap(), r#"["alpha","zeta"]"#);
    }
}
