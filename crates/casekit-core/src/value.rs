use crate::float::{Float32, Float64};
use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

///
/// Value
///
/// The wire-shaped carrier for persisted member values. Persistence hooks
/// write members into a `Carrier` as `Value`s and read them back out.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[remain::sorted]
pub enum Value {
    Bool(bool),
    Float32(Float32),
    Float64(Float64),
    Int32(i32),
    Int64(i64),
    List(Vec<Value>),
    Nat32(u32),
    Nat64(u64),
    Null,
    Text(String),
}

impl Value {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Float32(_) => "float32",
            Self::Float64(_) => "float64",
            Self::Int32(_) => "int32",
            Self::Int64(_) => "int64",
            Self::List(_) => "list",
            Self::Nat32(_) => "nat32",
            Self::Nat64(_) => "nat64",
            Self::Null => "null",
            Self::Text(_) => "text",
        }
    }
}

///
/// ValueError
///

#[derive(Debug, ThisError)]
pub enum ValueError {
    #[error("expected {expected}, found {found}")]
    Mismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl ValueError {
    fn mismatch(expected: &'static str, found: &Value) -> Self {
        Self::Mismatch {
            expected,
            found: found.label(),
        }
    }
}

///
/// FieldValue / FromValue
///

pub trait FieldValue {
    fn to_value(&self) -> Value;
}

pub trait FromValue: Sized {
    fn from_value(value: Value) -> Result<Self, ValueError>;
}

macro_rules! value_prim {
    ($ty:ty, $variant:ident, $label:literal) => {
        impl FieldValue for $ty {
            #[allow(clippy::clone_on_copy)]
            fn to_value(&self) -> Value {
                Value::$variant(self.clone())
            }
        }

        impl FromValue for $ty {
            fn from_value(value: Value) -> Result<Self, ValueError> {
                match value {
                    Value::$variant(v) => Ok(v),
                    other => Err(ValueError::mismatch($label, &other)),
                }
            }
        }
    };
}

value_prim!(bool, Bool, "bool");
value_prim!(Float32, Float32, "float32");
value_prim!(Float64, Float64, "float64");
value_prim!(i32, Int32, "int32");
value_prim!(i64, Int64, "int64");
value_prim!(u32, Nat32, "nat32");
value_prim!(u64, Nat64, "nat64");
value_prim!(String, Text, "text");

impl FieldValue for () {
    fn to_value(&self) -> Value {
        Value::Null
    }
}

impl FromValue for () {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Null => Ok(()),
            other => Err(ValueError::mismatch("null", &other)),
        }
    }
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            None => Value::Null,
            Some(inner) => inner.to_value(),
        }
    }
}

impl<T: FromValue> FromValue for Option<T> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }
}

impl<T: FromValue> FromValue for Vec<T> {
    fn from_value(value: Value) -> Result<Self, ValueError> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            other => Err(ValueError::mismatch("list", &other)),
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_round_trip() {
        assert_eq!(i32::from_value(42i32.to_value()).unwrap(), 42);
        assert_eq!(
            String::from_value("Alice".to_string().to_value()).unwrap(),
            "Alice"
        );
    }

    #[test]
    fn absent_option_is_null() {
        assert_eq!(None::<i32>.to_value(), Value::Null);
        assert_eq!(Option::<i32>::from_value(Value::Null).unwrap(), None);
        assert_eq!(
            Option::<i32>::from_value(Value::Int32(7)).unwrap(),
            Some(7)
        );
    }

    #[test]
    fn lists_preserve_order() {
        let v = vec![1i32, 2, 3];
        assert_eq!(Vec::<i32>::from_value(v.to_value()).unwrap(), v);
    }

    #[test]
    fn mismatch_is_reported() {
        let err = i32::from_value(Value::Text("x".into())).unwrap_err();
        assert_eq!(err.to_string(), "expected int32, found text");
    }
}
