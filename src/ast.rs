use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

/// A single configuration value.
///
/// `Null` is the explicit "no result" produced by an empty postfix
/// expression; it never comes out of the literal grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Text(String),
    List(Vec<Value>),
    Null,
}

impl Value {
    pub fn as_integer(&self) -> Option<i64> {
        if let Value::Integer(n) = self {
            Some(*n)
        } else {
            None
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        if let Value::Text(s) = self {
            Some(s)
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

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short label for diagnostics ("integer", "text", ...).
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Integer(_) => "integer",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Null => "null",
        }
    }
}

/// An insertion-ordered mapping from declaration name to value.
///
/// The document doubles as the evaluation context: while a file is being
/// parsed, every accepted declaration is bound here and is visible to the
/// expressions of all later declarations. Rebinding a name overwrites the
/// value but keeps the original position (last-write-wins).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    items: IndexMap<String, Value>,
}

impl Document {
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
        }
    }

    pub fn bind(&mut self, name: String, value: Value) {
        self.items.insert(name, value);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.items.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.items.iter()
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Integer(n) => serializer.serialize_i64(*n),
            Value::Text(s) => serializer.serialize_str(s),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Null => serializer.serialize_unit(),
        }
    }
}

impl Serialize for Document {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Serialized in insertion order, which is the declaration order.
        let mut map = serializer.serialize_map(Some(self.items.len()))?;
        for (key, value) in &self.items {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
