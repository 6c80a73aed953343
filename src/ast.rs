use indexmap::IndexMap;
use serde::ser::{Serialize, Serializer};

/// An insertion-ordered dictionary body. Re-inserting an existing key
/// replaces the value but keeps the original position.
pub type Dict = IndexMap<String, Value>;

#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Only meaningful on the write side; the parser never produces it.
    Null,
    /// Only meaningful on the write side; emitted verbatim, unquoted.
    Number(f64),
    String(String),
    /// Both `( ... )` lists and multi-token entries (`a uniform 2;`).
    List(Vec<Value>),
    Dict(Dict),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        if let Value::String(s) = self {
            Some(s)
        } else {
            None
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        if let Value::Number(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    pub fn as_list(&self) -> Option<&Vec<Value>> {
        if let Value::List(items) = self {
            Some(items)
        } else {
            None
        }
    }

    pub fn as_dict(&self) -> Option<&Dict> {
        if let Value::Dict(entries) = self {
            Some(entries)
        } else {
            None
        }
    }

    /// Look up a direct child of a dict value.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_dict().and_then(|entries| entries.get(key))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl From<Dict> for Value {
    fn from(entries: Dict) -> Self {
        Value::Dict(entries)
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::String(s) => serializer.serialize_str(s),
            Value::List(items) => serializer.collect_seq(items),
            Value::Dict(entries) => serializer.collect_map(entries),
        }
    }
}
