use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};
use thiserror::Error as ThisError;

///
/// FloatError
///

#[derive(Debug, ThisError)]
pub enum FloatError {
    #[error("non-finite float payload")]
    NonFinite,
}

macro_rules! float_wrapper {
    ($name:ident, $prim:ty) => {
        #[repr(transparent)]
        #[derive(Clone, Copy, Debug, Default, Display, Serialize)]
        pub struct $name($prim);

        impl $name {
            /// Fallible constructor that rejects non-finite values and
            /// normalizes -0.0.
            #[must_use]
            pub fn try_new(v: $prim) -> Option<Self> {
                if !v.is_finite() {
                    return None;
                }

                // canonicalize -0.0 to 0.0 so Eq/Hash/Ord are consistent
                Some(Self(if v == 0.0 { 0.0 } else { v }))
            }

            #[must_use]
            pub const fn get(self) -> $prim {
                self.0
            }
        }

        impl Eq for $name {}

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        impl Ord for $name {
            fn cmp(&self, other: &Self) -> Ordering {
                // safe: no NaN, -0 normalized
                self.0.partial_cmp(&other.0).unwrap()
            }
        }

        impl PartialOrd for $name {
            fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Hash for $name {
            fn hash<H: Hasher>(&self, state: &mut H) {
                self.0.to_bits().hash(state);
            }
        }

        impl TryFrom<$prim> for $name {
            type Error = FloatError;

            fn try_from(v: $prim) -> Result<Self, Self::Error> {
                Self::try_new(v).ok_or(FloatError::NonFinite)
            }
        }

        impl From<$name> for $prim {
            fn from(x: $name) -> Self {
                x.0
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let value = <$prim>::deserialize(deserializer)?;
                Self::try_new(value).ok_or_else(|| {
                    serde::de::Error::custom(format!("invalid {} value: {value}", stringify!($name)))
                })
            }
        }
    };
}

float_wrapper!(Float32, f32);
float_wrapper!(Float64, f64);

///
/// TESTS
///
