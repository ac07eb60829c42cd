use crate::cast::{FromValue, IntoValue};
use memory::obj_type::{self, ObjType};
use memory::Value;

impl FromValue for String {
    const STRING_LIKE: bool = true;

    fn expected() -> String {
        "string".to_string()
    }

    fn try_cast(value: &Value) -> Option<Self> {
        Some(value.as_str().to_owned())
    }

    fn is_exact_type(value: &Value) -> bool {
        value.has_type(&obj_type::STRING)
    }

    fn is_equivalent_type(ty: &'static ObjType) -> bool {
        ty == &obj_type::STRING
    }
}

impl FromValue for char {
    const STRING_LIKE: bool = true;

    fn expected() -> String {
        "single character".to_string()
    }

    fn try_cast(value: &Value) -> Option<Self> {
        let mut chars = value.as_str().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        }
    }
}

impl IntoValue for String {
    fn into_value(self) -> Value {
        Value::string(self)
    }
}

impl IntoValue for &str {
    fn into_value(self) -> Value {
        Value::string(self)
    }
}

impl IntoValue for &String {
    fn into_value(self) -> Value {
        Value::string(self.as_str())
    }
}

impl IntoValue for char {
    fn into_value(self) -> Value {
        Value::string(self.to_string())
    }
}
