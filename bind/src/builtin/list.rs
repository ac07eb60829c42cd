use crate::cast::{FromValue, IntoValue};
use memory::obj_type::{self, ObjType};
use memory::{Rep, Value};
use std::collections::VecDeque;

impl<T: FromValue> FromValue for Vec<T> {
    fn expected() -> String {
        format!("list of {}", T::expected())
    }

    fn try_cast(value: &Value) -> Option<Self> {
        value.get_list()?.iter().map(T::try_cast).collect()
    }

    fn is_exact_type(value: &Value) -> bool {
        match value.rep() {
            Rep::List(items) if value.has_type(&obj_type::LIST) => {
                items.iter().all(T::is_exact_type)
            }
            _ => false,
        }
    }

    fn is_equivalent_type(ty: &'static ObjType) -> bool {
        ty == &obj_type::LIST
    }
}

impl<T: FromValue> FromValue for VecDeque<T> {
    fn expected() -> String {
        <Vec<T>>::expected()
    }

    fn try_cast(value: &Value) -> Option<Self> {
        <Vec<T>>::try_cast(value).map(VecDeque::from)
    }

    fn is_exact_type(value: &Value) -> bool {
        <Vec<T>>::is_exact_type(value)
    }

    fn is_equivalent_type(ty: &'static ObjType) -> bool {
        <Vec<T>>::is_equivalent_type(ty)
    }
}

impl<T: IntoValue> IntoValue for Vec<T> {
    fn into_value(self) -> Value {
        Value::list(self.into_iter().map(IntoValue::into_value).collect())
    }
}

impl<T: IntoValue> IntoValue for VecDeque<T> {
    fn into_value(self) -> Value {
        Value::list(self.into_iter().map(IntoValue::into_value).collect())
    }
}

impl<T: IntoValue, const N: usize> IntoValue for [T; N] {
    fn into_value(self) -> Value {
        Value::list(self.into_iter().map(IntoValue::into_value).collect())
    }
}
