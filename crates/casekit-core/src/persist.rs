use crate::value::{FromValue, Value, ValueError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error as ThisError;

///
/// Carrier
///
/// The externally supplied key/value store persistence hooks write into and
/// restore from. Keys are the original member names.
///

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Carrier {
    entries: BTreeMap<String, Value>,
}

impl Carrier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, name: impl Into<String>, value: Value) {
        self.entries.insert(name.into(), value);
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Read a member back out, converting to its concrete type.
    pub fn take_as<T: FromValue>(&self, name: &str) -> Result<T, PersistError> {
        let value = self
            .entries
            .get(name)
            .cloned()
            .ok_or_else(|| PersistError::MissingMember {
                name: name.to_string(),
            })?;

        T::from_value(value).map_err(PersistError::from)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.entries.iter()
    }
}

///
/// PersistError
///

#[derive(Debug, ThisError)]
pub enum PersistError {
    #[error("no persisted value for member '{name}'")]
    MissingMember { name: String },

    #[error(transparent)]
    Value(#[from] ValueError),
}

///
/// Persist
///
/// Implemented by generated case types when persistence hooks are requested.
/// `restore` default-initializes members excluded from persistence.
///

pub trait Persist: Sized {
    fn store(&self, carrier: &mut Carrier);
    fn restore(carrier: &Carrier) -> Result<Self, PersistError>;
}

///
/// TESTS
///
