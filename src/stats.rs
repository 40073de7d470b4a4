use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// A single field value of a benchmark record.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Text(_) => None,
        }
    }

    /// Total order: numbers compare numerically and sort before text, text compares
    /// lexicographically.
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Text(_), _) => Ordering::Greater,
            (_, Value::Text(_)) => Ordering::Less,
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(a), Some(b)) => a.total_cmp(&b),
                _ => Ordering::Equal,
            },
        }
    }

    /// Cells arrive as text, so guess the narrowest type that fits.
    pub fn infer(cell: &str) -> Value {
        if let Ok(v) = cell.parse::<i64>() {
            Value::Int(v)
        } else if let Ok(v) = cell.parse::<f64>() {
            Value::Float(v)
        } else {
            Value::Text(cell.to_string())
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(v) => f.write_str(v),
        }
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub framework: String,
    pub fields: BTreeMap<String, Value>,
}

impl Record {
    pub const FRAMEWORK: &'static str = "framework";

    pub fn new(framework: &str) -> Self {
        Self {
            framework: framework.to_string(),
            fields: BTreeMap::new(),
        }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

/// A record reads from a flat map of text cells: the `framework` entry is the label, every
/// other non-empty entry becomes a field with its type inferred from the text.
impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RecordVisitor;

        impl<'de> Visitor<'de> for RecordVisitor {
            type Value = Record;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of framework stats cells")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Record, A::Error> {
                let mut framework = None;
                let mut fields = BTreeMap::new();
                while let Some((key, cell)) = map.next_entry::<String, String>()? {
                    if key == Record::FRAMEWORK {
                        framework = Some(cell);
                    } else if !cell.is_empty() {
                        let value = Value::infer(&cell);
                        fields.insert(key, value);
                    }
                }
                let framework = framework.ok_or_else(|| de::Error::missing_field(Record::FRAMEWORK))?;
                Ok(Record { framework, fields })
            }
        }

        deserializer.deserialize_map(RecordVisitor)
    }
}
