pub mod list;
pub mod obj_type;
pub mod parse;
pub mod registry;
pub mod value;

#[cfg(test)]
mod value_tests;

pub use list::{format_list, parse_list, ListError};
pub use obj_type::ObjType;
pub use value::{Rep, Value};
