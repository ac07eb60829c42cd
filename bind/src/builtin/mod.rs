//! Protocol implementations for the builtin native types.

mod bignum;
mod bytearray;
mod dict;
mod float;
mod integral;
mod list;
mod object;
mod optional;
mod string;

pub use bytearray::ByteArray;
