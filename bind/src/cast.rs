//! The conversion protocol.
//!
//! A native type takes part in argument matching by implementing
//! [`FromValue`] and in result marshalling by implementing [`IntoValue`].
//! The classifier and the dispatcher only ever go through the free
//! functions below, so no concrete type is special-cased outside its own
//! impl.

use crate::error::CastError;
use memory::{ObjType, Value};

pub trait FromValue: Sized {
    /// Types that any value can be read as through its string form.
    /// The convertible tier refuses to stringify typed values into these.
    const STRING_LIKE: bool = false;

    /// Name used in type-mismatch messages.
    fn expected() -> String {
        std::any::type_name::<Self>().to_string()
    }

    /// Read `value` as `Self`. Never fails loudly.
    fn try_cast(value: &Value) -> Option<Self>;

    /// `value` carries exactly this type's canonical descriptor.
    fn is_exact_type(_value: &Value) -> bool {
        false
    }

    /// `ty` names a type logically interchangeable with this one.
    fn is_equivalent_type(_ty: &'static ObjType) -> bool {
        false
    }
}

pub trait IntoValue {
    fn into_value(self) -> Value;
}

pub fn try_cast<T: FromValue>(value: &Value) -> Option<T> {
    T::try_cast(value)
}

/// Like [`try_cast`], but a string-like `T` rejects values carrying a
/// descriptor other than `string`.
pub fn try_cast_no_implicit_string<T: FromValue>(value: &Value) -> Option<T> {
    if T::STRING_LIKE && !value.is_string_like() {
        return None;
    }
    T::try_cast(value)
}

pub fn cast<T: FromValue>(value: &Value) -> Result<T, CastError> {
    T::try_cast(value).ok_or_else(|| CastError {
        expected: T::expected(),
        got: value.as_str().to_string(),
    })
}

#[inline]
pub fn is_exact_type<T: FromValue>(value: &Value) -> bool {
    T::is_exact_type(value)
}

/// Untyped values are never equivalent to anything.
#[inline]
pub fn is_equivalent_type<T: FromValue>(ty: Option<&'static ObjType>) -> bool {
    ty.map_or(false, T::is_equivalent_type)
}

#[inline]
pub fn make_value<T: IntoValue>(value: T) -> Value {
    value.into_value()
}
