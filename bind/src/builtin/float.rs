use crate::cast::{FromValue, IntoValue};
use memory::obj_type::{self, ObjType};
use memory::Value;

fn is_number(ty: &'static ObjType) -> bool {
    ty == &obj_type::DOUBLE || ty == &obj_type::INT || ty == &obj_type::BIGNUM
}

impl FromValue for f64 {
    fn expected() -> String {
        "floating-point number".to_string()
    }

    fn try_cast(value: &Value) -> Option<Self> {
        value.get_double()
    }

    fn is_exact_type(value: &Value) -> bool {
        value.has_type(&obj_type::DOUBLE)
    }

    fn is_equivalent_type(ty: &'static ObjType) -> bool {
        is_number(ty)
    }
}

impl FromValue for f32 {
    fn expected() -> String {
        "floating-point number".to_string()
    }

    fn try_cast(value: &Value) -> Option<Self> {
        value.get_double().map(|d| d as f32)
    }

    fn is_exact_type(value: &Value) -> bool {
        value.has_type(&obj_type::DOUBLE)
    }

    fn is_equivalent_type(ty: &'static ObjType) -> bool {
        is_number(ty)
    }
}

impl IntoValue for f64 {
    #[inline]
    fn into_value(self) -> Value {
        Value::double(self)
    }
}

impl IntoValue for f32 {
    #[inline]
    fn into_value(self) -> Value {
        Value::double(f64::from(self))
    }
}
