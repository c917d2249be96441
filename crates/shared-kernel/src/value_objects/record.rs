// crates/shared-kernel/src/value_objects/record.rs
use serde::{Deserialize, Serialize, Serializer, ser::SerializeMap};
use serde_json::{Map, Value};

use super::{FieldValue, Tally};
use crate::error::RecordError;

/// Name of the field carrying the per-row photo count.
pub const COUNT_FIELD: &str = "count";

/// One flat query row: field names mapped to text or numbers, in column order.
///
/// Fields are looked up by runtime name, since the grouping hierarchy is
/// chosen by the caller.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a record from `(name, value)` pairs; a repeated name keeps the last value.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        pairs.into_iter().fold(Self::new(), |record, (k, v)| record.with(k, v))
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        let name = name.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((name, value)),
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The row's `count`, parsed leniently.
    pub fn count(&self) -> Tally {
        Tally::from_field(self.get(COUNT_FIELD))
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Narrows a loosely typed object into a record.
    ///
    /// Strings and numbers are kept, booleans become text and `null` drops
    /// the field. Arrays and nested objects are rejected.
    pub fn from_json_map(map: Map<String, Value>) -> Result<Self, RecordError> {
        let mut fields = Vec::with_capacity(map.len());
        for (name, value) in map {
            let narrowed = match value {
                Value::Null => continue,
                Value::Bool(b) => FieldValue::Text(b.to_string()),
                Value::String(s) => FieldValue::Text(s),
                Value::Number(n) => match n.as_i64() {
                    Some(i) => FieldValue::Integer(i),
                    None => FieldValue::Number(n.as_f64().unwrap_or(f64::NAN)),
                },
                Value::Array(_) => {
                    return Err(RecordError::UnsupportedValue { field: name, found: "array" });
                }
                Value::Object(_) => {
                    return Err(RecordError::UnsupportedValue { field: name, found: "object" });
                }
            };
            fields.push((name, narrowed));
        }
        Ok(Self { fields })
    }
}

impl TryFrom<Value> for Record {
    type Error = RecordError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Self::from_json_map(map),
            other => Err(RecordError::NotAnObject { found: json_kind(&other) }),
        }
    }
}

impl TryFrom<Map<String, Value>> for Record {
    type Error = RecordError;

    fn try_from(map: Map<String, Value>) -> Result<Self, Self::Error> {
        Self::from_json_map(map)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (k, v) in &self.fields {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
