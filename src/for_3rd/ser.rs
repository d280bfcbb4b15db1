//! Serialization of F128.
//! The number is serialized as its bit pattern written in hexadecimal, so the serialization is lossless.

use crate::F128;
use serde::{Serialize, Serializer};

impl Serialize for F128 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}
