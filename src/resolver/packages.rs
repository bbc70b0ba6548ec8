use serde::{Serialize, Serializer};
use std::collections::BTreeSet;

/// Package names required on a platform.
///
/// Keeps insertion order for display; equality ignores order.
#[derive(Debug, Clone, Default)]
pub struct PackageSet {
    names: Vec<String>,
}

impl PackageSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    fn insert(&mut self, name: String) {
        if !self.contains(&name) {
            self.names.push(name);
        }
    }

    fn as_set(&self) -> BTreeSet<&str> {
        self.iter().collect()
    }
}

impl PartialEq for PackageSet {
    fn eq(&self, other: &Self) -> bool {
        self.as_set() == other.as_set()
    }
}

impl Eq for PackageSet {}

impl<S: Into<String>> FromIterator<S> for PackageSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = PackageSet::new();
        for name in iter {
            set.insert(name.into());
        }
        set
    }
}

impl<'a> IntoIterator for &'a PackageSet {
    type Item = &'a str;
    type IntoIter = std::iter::Map<std::slice::Iter<'a, String>, fn(&String) -> &str>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter().map(String::as_str as fn(&String) -> &str)
    }
}

impl Serialize for PackageSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.names.serialize(serializer)
    }
}
