use crate::cast::{FromValue, IntoValue};
use memory::obj_type::{self, ObjType};
use memory::Value;
use num_bigint::BigInt;

impl FromValue for BigInt {
    fn expected() -> String {
        "integer".to_string()
    }

    fn try_cast(value: &Value) -> Option<Self> {
        value.get_bignum()
    }

    fn is_exact_type(value: &Value) -> bool {
        value.has_type(&obj_type::BIGNUM)
    }

    fn is_equivalent_type(ty: &'static ObjType) -> bool {
        ty == &obj_type::BIGNUM || ty == &obj_type::INT
    }
}

/// Results stay bignum-typed even when they would fit a wide int, so a
/// later call can still tell them apart from plain integers.
impl IntoValue for BigInt {
    fn into_value(self) -> Value {
        Value::bignum(self)
    }
}
