use crate::cast::{FromValue, IntoValue};
use crate::error::Error;
use crate::interp::Interp;
use memory::Value;

/// A command passed by name, called back from native code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proc {
    name: String,
}

impl Proc {
    pub fn new(name: impl Into<String>) -> Self {
        Proc { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run `name args..` and return its result.
    pub fn call<I>(&self, interp: &mut Interp, args: I) -> Result<Value, Error>
    where
        I: IntoIterator,
        I::Item: IntoValue,
    {
        let mut objv = vec![Value::string(self.name.as_str())];
        objv.extend(args.into_iter().map(IntoValue::into_value));
        interp.invoke(&objv).map(|reply| reply.into_value())
    }
}

impl FromValue for Proc {
    const STRING_LIKE: bool = true;

    fn expected() -> String {
        "command name".to_string()
    }

    fn try_cast(value: &Value) -> Option<Self> {
        let name = value.as_str();
        if name.is_empty() {
            return None;
        }
        Some(Proc::new(name))
    }
}

impl IntoValue for Proc {
    fn into_value(self) -> Value {
        Value::string(self.name)
    }
}
