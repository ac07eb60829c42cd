use crate::cast::{FromValue, IntoValue};
use memory::obj_type;
use memory::Value;
use std::ops::{Deref, DerefMut};

/// Raw bytes. A plain `Vec<u8>` is a list of integers; this is the
/// byte array type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteArray(pub Vec<u8>);

impl Deref for ByteArray {
    type Target = Vec<u8>;

    fn deref(&self) -> &Vec<u8> {
        &self.0
    }
}

impl DerefMut for ByteArray {
    fn deref_mut(&mut self) -> &mut Vec<u8> {
        &mut self.0
    }
}

impl From<Vec<u8>> for ByteArray {
    fn from(bytes: Vec<u8>) -> Self {
        ByteArray(bytes)
    }
}

impl From<&[u8]> for ByteArray {
    fn from(bytes: &[u8]) -> Self {
        ByteArray(bytes.to_vec())
    }
}

impl FromValue for ByteArray {
    fn expected() -> String {
        "byte array".to_string()
    }

    fn try_cast(value: &Value) -> Option<Self> {
        value.get_bytes().map(ByteArray)
    }

    fn is_exact_type(value: &Value) -> bool {
        value.has_type(&obj_type::BYTEARRAY)
    }
}

impl IntoValue for ByteArray {
    fn into_value(self) -> Value {
        Value::bytes(self.0)
    }
}
