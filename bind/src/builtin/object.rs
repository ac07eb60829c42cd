use crate::cast::{FromValue, IntoValue};
use crate::error::Error;
use memory::obj_type::{self, ObjType};
use memory::Value;
use std::rc::Rc;

/// Raw values pass through untouched and match every value at the exact
/// tier, so an earlier `Value` overload shadows later typed ones.
impl FromValue for Value {
    fn expected() -> String {
        "value".to_string()
    }

    fn try_cast(value: &Value) -> Option<Self> {
        Some(value.clone())
    }

    fn is_exact_type(_: &Value) -> bool {
        true
    }

    fn is_equivalent_type(_: &'static ObjType) -> bool {
        true
    }
}

impl IntoValue for Value {
    #[inline]
    fn into_value(self) -> Value {
        self
    }
}

/// Errors travel as exception-typed values that keep the original error
/// for re-throwing. A plain string reads as a script error with that
/// message.
impl FromValue for Rc<Error> {
    fn expected() -> String {
        "exception".to_string()
    }

    fn try_cast(value: &Value) -> Option<Self> {
        if let Some(err) = value.opaque_ref::<Error>() {
            return Some(err);
        }
        if value.is_string_like() {
            return Some(Rc::new(Error::Script(value.as_str().to_owned())));
        }
        None
    }

    fn is_exact_type(value: &Value) -> bool {
        value.has_type(&obj_type::EXCEPTION)
    }
}

impl IntoValue for Rc<Error> {
    fn into_value(self) -> Value {
        let message = self.to_string();
        Value::opaque(&obj_type::EXCEPTION, self, message)
    }
}

impl IntoValue for Error {
    fn into_value(self) -> Value {
        Rc::new(self).into_value()
    }
}
