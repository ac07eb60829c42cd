use std::fmt;
use std::ptr;

/// Runtime-visible type identity.
///
/// Descriptors are compared by address: two descriptors with the same name
/// are still different types unless they are the same object. Builtin
/// descriptors are the statics below; native types get theirs from
/// [`crate::registry`].
pub struct ObjType {
    name: &'static str,
}

impl ObjType {
    pub const fn new(name: &'static str) -> Self {
        ObjType { name }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl PartialEq for ObjType {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
    }
}

impl Eq for ObjType {}

impl fmt::Debug for ObjType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjType({})", self.name)
    }
}

// --- Builtin descriptors ---

pub static STRING: ObjType = ObjType::new("string");
pub static INT: ObjType = ObjType::new("int");
pub static DOUBLE: ObjType = ObjType::new("double");
pub static BOOLEAN: ObjType = ObjType::new("boolean");
pub static BIGNUM: ObjType = ObjType::new("bignum");
pub static BYTEARRAY: ObjType = ObjType::new("bytearray");
pub static LIST: ObjType = ObjType::new("list");
pub static DICT: ObjType = ObjType::new("dict");
pub static EXCEPTION: ObjType = ObjType::new("exception");
pub static NULL: ObjType = ObjType::new("null");

pub fn builtins() -> [&'static ObjType; 10] {
    [
        &STRING, &INT, &DOUBLE, &BOOLEAN, &BIGNUM, &BYTEARRAY, &LIST, &DICT, &EXCEPTION, &NULL,
    ]
}

/// True when `ty` is identity-equal to `expected`. An untyped value never
/// matches.
#[inline]
pub fn is(ty: Option<&'static ObjType>, expected: &'static ObjType) -> bool {
    ty.map_or(false, |t| ptr::eq(t, expected))
}
