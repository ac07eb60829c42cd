//! Fieldless native enums.
//!
//! ```ignore
//! #[derive(Clone, Copy, PartialEq, Debug)]
//! enum Color { Red, Green }
//! bind::native_enum!(Color = "color" { Red, Green });
//! interp.create_command("color").add_enum::<Color>();
//! ```

use crate::cast::{FromValue, IntoValue};
use crate::command::Command;
use crate::error::Error;
use memory::{registry, ObjType, Value};
use std::rc::Rc;

pub trait NativeEnum: Copy + PartialEq + 'static {
    const NAME: &'static str;
    const VARIANTS: &'static [(&'static str, Self)];

    fn to_raw(self) -> i64;

    fn from_raw(raw: i64) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .find(|(_, v)| v.to_raw() == raw)
            .map(|(_, v)| *v)
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::VARIANTS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    fn variant_name(self) -> &'static str {
        Self::VARIANTS
            .iter()
            .find(|(_, v)| *v == self)
            .map_or(Self::NAME, |(n, _)| *n)
    }

    fn descriptor() -> &'static ObjType {
        registry::descriptor_for::<Self>(Self::NAME)
    }
}

pub fn is_exact<E: NativeEnum>(value: &Value) -> bool {
    value.has_type(E::descriptor())
}

/// An enum-typed value, a variant name, or a raw integer.
pub fn try_cast<E: NativeEnum>(value: &Value) -> Option<E> {
    if let Some(e) = value.opaque_ref::<E>() {
        return Some(*e);
    }
    if !value.is_string_like() && value.get_int().is_none() {
        return None;
    }
    E::from_name(value.as_str()).or_else(|| E::from_raw(value.get_int()?))
}

pub fn make_value<E: NativeEnum>(e: E) -> Value {
    Value::opaque(E::descriptor(), Rc::new(e), e.variant_name())
}

impl Command {
    /// Add the two standard constructors of an enum value: from its raw
    /// integer and from its variant name.
    pub fn add_enum<E>(&mut self) -> &mut Self
    where
        E: NativeEnum + FromValue + IntoValue,
    {
        self.add_function(|raw: i64| E::from_raw(raw).ok_or_else(|| Error::InvalidEnum(raw.to_string())))
            .add_function(|name: String| E::from_name(&name).ok_or(Error::InvalidEnum(name)))
    }
}

/// Implement [`NativeEnum`] and the conversion protocol for a fieldless
/// enum.
#[macro_export]
macro_rules! native_enum {
    ($ty:ident = $name:literal { $($variant:ident),+ $(,)? }) => {
        impl $crate::NativeEnum for $ty {
            const NAME: &'static str = $name;
            const VARIANTS: &'static [(&'static str, Self)] =
                &[$((stringify!($variant), $ty::$variant)),+];

            fn to_raw(self) -> i64 {
                self as i64
            }
        }

        impl $crate::FromValue for $ty {
            fn expected() -> String {
                $name.to_string()
            }

            fn try_cast(value: &$crate::Value) -> Option<Self> {
                $crate::enumeration::try_cast::<Self>(value)
            }

            fn is_exact_type(value: &$crate::Value) -> bool {
                $crate::enumeration::is_exact::<Self>(value)
            }
        }

        impl $crate::IntoValue for $ty {
            fn into_value(self) -> $crate::Value {
                $crate::enumeration::make_value(self)
            }
        }
    };
}
