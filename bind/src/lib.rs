pub mod builtin;
pub mod cast;
pub mod class;
pub mod classify;
pub mod command;
pub mod dispatch;
pub mod enumeration;
pub mod error;
pub mod interp;
pub mod json;
pub mod overload;
pub mod package;
pub mod proc;

#[cfg(test)]
mod cast_tests;

pub use memory;

pub use builtin::ByteArray;
pub use cast::{cast, is_equivalent_type, is_exact_type, make_value, try_cast, try_cast_no_implicit_string};
pub use cast::{FromValue, IntoValue};
pub use class::{ClassBuilder, Instance};
pub use classify::{ArgPack, Tier};
pub use command::Command;
pub use enumeration::NativeEnum;
pub use error::{CastError, Error};
pub use interp::{Code, Interp};
pub use memory::Value;
pub use overload::{InterpFn, IntoReply, NativeFn, Overload, Reply};
pub use package::Package;
pub use proc::Proc;
