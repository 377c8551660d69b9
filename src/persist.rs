//! Serialization blocking.
//!
//! A guard holds a live callback: persisting one makes no sense, and
//! reconstructing one from external bytes would let untrusted data choose
//! the callback that runs on release. Both directions are implemented as
//! unconditional failures, so a containing type deriving serde support
//! fails loudly instead of silently skipping the guard.

use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;
use crate::guard::ScopeGuard;


impl<T, F: FnOnce(T)> Serialize for ScopeGuard<T, F> {
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Err(S::Error::custom(Error::Serialize))
    }
}

impl<'de, T, F: FnOnce(T)> Deserialize<'de> for ScopeGuard<T, F> {
    fn deserialize<D>(_deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // no guard is ever constructed here, so no embedded callback can
        // make it to a release path
        Err(D::Error::custom(Error::Deserialize))
    }
}
