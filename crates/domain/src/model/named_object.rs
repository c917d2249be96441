// crates/domain/src/model/named_object.rs
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An interned catalog value such as a camera model or lens name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedObject {
    pub id: i64,
    pub name: String,
}

impl NamedObject {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NamedObjectList(Vec<NamedObject>);

impl NamedObjectList {
    pub fn new(objects: Vec<NamedObject>) -> Self {
        Self(objects)
    }

    pub fn objects(&self) -> &[NamedObject] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|o| o.name.as_str())
    }

    /// Union by name, sorted by name. On a name clash the object already in
    /// `self` wins, so ids stay those of the first catalog that saw it.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let mut by_name: BTreeMap<&str, &NamedObject> = BTreeMap::new();
        for object in self.0.iter().chain(&other.0) {
            by_name.entry(object.name.as_str()).or_insert(object);
        }
        Self(by_name.into_values().cloned().collect())
    }
}

impl FromIterator<NamedObject> for NamedObjectList {
    fn from_iter<I: IntoIterator<Item = NamedObject>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
