use crate::cast::{FromValue, IntoValue};
use memory::obj_type::{self, ObjType};
use memory::parse::{parse_bignum, parse_int};
use memory::{Rep, Value};
use num_bigint::BigInt;
use num_traits::ToPrimitive;

/// Widest integer reading of a value; every fixed-width type narrows from
/// this and treats overflow as a failed cast.
fn wide(value: &Value) -> Option<i128> {
    match value.rep() {
        Rep::Int(i) => Some(i128::from(*i)),
        Rep::BigInt(b) => b.to_i128(),
        _ => {
            let s = value.as_str();
            parse_int(s)
                .map(i128::from)
                .or_else(|| parse_bignum(s).and_then(|b| b.to_i128()))
        }
    }
}

fn is_int_like(ty: &'static ObjType) -> bool {
    ty == &obj_type::INT || ty == &obj_type::BIGNUM
}

macro_rules! integral_from {
    ($($t:ty),*) => {$(
        impl FromValue for $t {
            fn expected() -> String {
                "integer".to_string()
            }

            fn try_cast(value: &Value) -> Option<Self> {
                <$t>::try_from(wide(value)?).ok()
            }

            fn is_exact_type(value: &Value) -> bool {
                value.has_type(&obj_type::INT)
            }

            fn is_equivalent_type(ty: &'static ObjType) -> bool {
                is_int_like(ty)
            }
        }
    )*};
}

integral_from!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, i128, u128);

macro_rules! integral_into_narrow {
    ($($t:ty),*) => {$(
        impl IntoValue for $t {
            #[inline]
            fn into_value(self) -> Value {
                Value::int(i64::from(self))
            }
        }
    )*};
}

integral_into_narrow!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! integral_into_wide {
    ($($t:ty),*) => {$(
        impl IntoValue for $t {
            fn into_value(self) -> Value {
                match i64::try_from(self) {
                    Ok(i) => Value::int(i),
                    Err(_) => Value::bignum(BigInt::from(self)),
                }
            }
        }
    )*};
}

integral_into_wide!(isize, usize, u64, i128, u128);

impl FromValue for bool {
    fn expected() -> String {
        "boolean".to_string()
    }

    fn try_cast(value: &Value) -> Option<Self> {
        value.get_boolean()
    }

    fn is_exact_type(value: &Value) -> bool {
        value.has_type(&obj_type::BOOLEAN)
    }
}

impl IntoValue for bool {
    #[inline]
    fn into_value(self) -> Value {
        Value::boolean(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::cast::*;
    use memory::Value;
    use num_bigint::BigInt;

    #[test]
    fn narrowing_overflow_fails() {
        assert_eq!(try_cast::<u8>(&Value::int(255)), Some(255));
        assert_eq!(try_cast::<u8>(&Value::int(256)), None);
        assert_eq!(try_cast::<u32>(&Value::int(-1)), None);
        assert_eq!(try_cast::<i16>(&Value::string("-32768")), Some(i16::MIN));
    }

    #[test]
    fn u64_above_i64_goes_through_bignum() {
        let v = make_value(u64::MAX);
        assert_eq!(v.as_str(), "18446744073709551615");
        assert_eq!(try_cast::<u64>(&v), Some(u64::MAX));
        assert_eq!(try_cast::<u64>(&Value::string("18446744073709551615")), Some(u64::MAX));
        assert_eq!(try_cast::<i64>(&v), None);
    }

    #[test]
    fn bignum_descriptor_is_equivalent_not_exact() {
        let v = Value::bignum(BigInt::from(3));
        assert!(!is_exact_type::<i64>(&v));
        assert!(is_equivalent_type::<i64>(v.ty()));
        assert!(is_exact_type::<i32>(&Value::int(3)));
    }

    #[test]
    fn bool_reads() {
        assert_eq!(try_cast::<bool>(&Value::string("no")), Some(false));
        assert!(is_exact_type::<bool>(&Value::boolean(true)));
        assert!(!is_equivalent_type::<bool>(Value::int(1).ty()));
    }
}
