//! `serde_json::Value` as a conversion-protocol participant.
//!
//! Objects map to dicts, arrays to lists, `null` to the `null` type.
//! Untyped values read as JSON strings.

use crate::cast::{FromValue, IntoValue};
use memory::obj_type::{self, ObjType};
use memory::{Rep, Value};
use num_traits::ToPrimitive;
use serde_json::{Map, Number, Value as Json};

fn to_json(value: &Value) -> Option<Json> {
    if value.has_type(&obj_type::NULL) {
        return Some(Json::Null);
    }
    Some(match value.rep() {
        Rep::Int(i) => Json::Number((*i).into()),
        Rep::Double(d) => Json::Number(Number::from_f64(*d)?),
        Rep::Boolean(b) => Json::Bool(*b),
        Rep::BigInt(b) => match (b.to_i64(), b.to_u64()) {
            (Some(i), _) => Json::Number(i.into()),
            (None, Some(u)) => Json::Number(u.into()),
            _ => return None,
        },
        Rep::List(items) => Json::Array(items.iter().map(to_json).collect::<Option<_>>()?),
        Rep::Dict(entries) => Json::Object(
            entries
                .iter()
                .map(|(k, v)| Some((k.as_str().to_string(), to_json(v)?)))
                .collect::<Option<Map<_, _>>>()?,
        ),
        Rep::Pure | Rep::Bytes(_) | Rep::Opaque(_) => Json::String(value.as_str().to_string()),
    })
}

impl FromValue for Json {
    fn expected() -> String {
        "json value".to_string()
    }

    fn try_cast(value: &Value) -> Option<Self> {
        to_json(value)
    }

    fn is_exact_type(value: &Value) -> bool {
        value.has_type(&obj_type::NULL)
    }

    fn is_equivalent_type(ty: &'static ObjType) -> bool {
        ty == &obj_type::DICT || ty == &obj_type::LIST || ty == &obj_type::NULL
    }
}

impl IntoValue for Json {
    fn into_value(self) -> Value {
        match self {
            Json::Null => Value::null(),
            Json::Bool(b) => Value::boolean(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::int(i)
                } else if let Some(u) = n.as_u64() {
                    u.into_value()
                } else {
                    Value::double(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Json::String(s) => Value::string(s),
            Json::Array(items) => Value::list(items.into_iter().map(IntoValue::into_value).collect()),
            Json::Object(map) => Value::dict(
                map.into_iter()
                    .map(|(k, v)| (Value::string(k), v.into_value()))
                    .collect(),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cast::{make_value, try_cast};
    use serde_json::json;

    #[test]
    fn objects_become_dicts() {
        let v = make_value(json!({"a": 1, "b": [true, null, 2.5]}));
        assert!(v.has_type(&obj_type::DICT));
        let back: Json = try_cast(&v).unwrap();
        assert_eq!(back, json!({"a": 1, "b": [true, null, 2.5]}));
    }

    #[test]
    fn untyped_values_are_strings() {
        let back: Json = try_cast(&Value::string("42")).unwrap();
        assert_eq!(back, json!("42"));
    }

    #[test]
    fn nan_has_no_json_form() {
        assert_eq!(try_cast::<Json>(&Value::double(f64::NAN)), None);
    }
}
