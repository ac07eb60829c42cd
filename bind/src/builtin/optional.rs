use crate::cast::{FromValue, IntoValue};
use memory::{ObjType, Value};

/// An untyped empty value reads as `None`; anything else must read as `T`.
impl<T: FromValue> FromValue for Option<T> {
    const STRING_LIKE: bool = T::STRING_LIKE;

    fn expected() -> String {
        format!("optional {}", T::expected())
    }

    fn try_cast(value: &Value) -> Option<Self> {
        if value.is_untyped() && value.as_str().is_empty() {
            return Some(None);
        }
        T::try_cast(value).map(Some)
    }

    fn is_exact_type(value: &Value) -> bool {
        T::is_exact_type(value)
    }

    fn is_equivalent_type(ty: &'static ObjType) -> bool {
        T::is_equivalent_type(ty)
    }
}

impl<T: IntoValue> IntoValue for Option<T> {
    fn into_value(self) -> Value {
        match self {
            Some(v) => v.into_value(),
            None => Value::empty(),
        }
    }
}
