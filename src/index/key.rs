//! Typed index keys
//!
//! One variant per indexable kind. Signed and unsigned integers are
//! distinct keys: `Int(1) != Uint(1)`.

use std::fmt;

use crate::decode::Value;

/// Index key representing a decoded scalar field value
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IndexKey {
    Bool(bool),
    Int(i64),
    Uint(u64),
    /// Float value stored as normalized bits
    Float(u64),
    String(String),
}

impl IndexKey {
    /// Create a key from a float.
    ///
    /// `-0.0` and `0.0` share a key; every NaN maps to one canonical NaN.
    pub fn from_float(v: f64) -> Self {
        let normalized = if v == 0.0 {
            0.0
        } else if v.is_nan() {
            f64::NAN
        } else {
            v
        };
        IndexKey::Float(normalized.to_bits())
    }

    /// Create a key from a decoded value; composite values have no key
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(IndexKey::Bool(*b)),
            Value::Int(v) => Some(IndexKey::Int(*v)),
            Value::Uint(v) => Some(IndexKey::Uint(*v)),
            Value::Float(v) => Some(IndexKey::from_float(*v)),
            Value::String(s) => Some(IndexKey::String(s.clone())),
            Value::Composite(_) => None,
        }
    }

    /// The float value of a `Float` key
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            IndexKey::Float(bits) => Some(f64::from_bits(*bits)),
            _ => None,
        }
    }
}

impl fmt::Display for IndexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKey::Bool(b) => write!(f, "{}", b),
            IndexKey::Int(v) => write!(f, "{}", v),
            IndexKey::Uint(v) => write!(f, "{}", v),
            IndexKey::Float(bits) => write!(f, "{}", f64::from_bits(*bits)),
            IndexKey::String(s) => write!(f, "{:?}", s),
        }
    }
}

macro_rules! key_from_int {
    ($variant:ident, $target:ty, $($t:ty),*) => {
        $(
            impl From<$t> for IndexKey {
                fn from(v: $t) -> Self {
                    IndexKey::$variant(v as $target)
                }
            }
        )*
    };
}

key_from_int!(Int, i64, i8, i16, i32, i64);
key_from_int!(Uint, u64, u8, u16, u32, u64);

impl From<bool> for IndexKey {
    fn from(v: bool) -> Self {
        IndexKey::Bool(v)
    }
}

impl From<f64> for IndexKey {
    fn from(v: f64) -> Self {
        IndexKey::from_float(v)
    }
}

impl From<f32> for IndexKey {
    fn from(v: f32) -> Self {
        IndexKey::from_float(f64::from(v))
    }
}

impl From<&str> for IndexKey {
    fn from(v: &str) -> Self {
        IndexKey::String(v.to_string())
    }
}

impl From<String> for IndexKey {
    fn from(v: String) -> Self {
        IndexKey::String(v)
    }
}
