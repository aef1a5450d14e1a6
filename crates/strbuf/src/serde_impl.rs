//! `StrBuf` serializes as a byte string.
use core::fmt;

use serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{self, SeqAccess, Visitor},
};

use crate::StrBuf;

impl Serialize for StrBuf {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(self.as_bytes())
    }
}

impl<'de> Deserialize<'de> for StrBuf {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_bytes(StrBufVisitor)
    }
}

struct StrBufVisitor;

impl<'de> Visitor<'de> for StrBufVisitor {
    type Value = StrBuf;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a byte string")
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<StrBuf, E> {
        StrBuf::try_from_bytes(v).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<StrBuf, E> {
        self.visit_bytes(v.as_bytes())
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<StrBuf, A::Error> {
        let mut buf = StrBuf::new();
        while let Some(byte) = seq.next_element::<u8>()? {
            buf.append_char(byte)
                .map_err(<A::Error as de::Error>::custom)?;
        }
        Ok(buf)
    }
}
