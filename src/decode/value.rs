//! Decoded field values and records

use serde::Serialize;

/// One typed field value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Uint(u64),
    /// 32-bit fields are stored widened after rounding to f32
    Float(f64),
    String(String),
    /// Struct, list and map fields
    Composite(serde_json::Value),
}

impl Value {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Uint(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_composite(&self) -> Option<&serde_json::Value> {
        match self {
            Value::Composite(v) => Some(v),
            _ => None,
        }
    }

    /// Converts to a JSON value; non-finite floats become null
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Int(v) => serde_json::Value::from(*v),
            Value::Uint(v) => serde_json::Value::from(*v),
            Value::Float(v) => serde_json::Number::from_f64(*v)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Composite(v) => v.clone(),
        }
    }
}

/// One decoded data row, positionally matching the schema
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    values: Vec<Value>,
}

impl Record {
    pub(crate) fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Value at a column position
    pub fn get(&self, column: usize) -> Option<&Value> {
        self.values.get(column)
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_accessors_are_kind_strict() {
        assert_eq!(Value::Int(3).as_i64(), Some(3));
        assert_eq!(Value::Int(3).as_u64(), None);
        assert_eq!(Value::Uint(3).as_u64(), Some(3));
        assert_eq!(Value::String("x".into()).as_str(), Some("x"));
        assert_eq!(Value::Bool(true).as_str(), None);
    }

    #[test]
    fn test_to_json() {
        assert_eq!(Value::Int(-4).to_json(), json!(-4));
        assert_eq!(Value::Float(1.5).to_json(), json!(1.5));
        assert_eq!(Value::Float(f64::NAN).to_json(), json!(null));
        assert_eq!(Value::Composite(json!([1, 2])).to_json(), json!([1, 2]));
    }

    #[test]
    fn test_untagged_serialization() {
        let record = vec![Value::String("alice".into()), Value::Uint(30)];
        assert_eq!(serde_json::to_value(&record).unwrap(), json!(["alice", 30]));
    }
}
