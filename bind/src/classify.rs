use crate::cast::{cast, is_equivalent_type, is_exact_type, try_cast, try_cast_no_implicit_string};
use crate::cast::FromValue;
use crate::error::CastError;
use memory::Value;

/// Matching tiers, strictest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Every argument carries its parameter type's own descriptor.
    Exact,
    /// Every argument's descriptor is interchangeable with its parameter type.
    Equivalent,
    /// Every argument converts without stringifying a typed value.
    Convertible,
    /// Every argument converts, through its string form if need be.
    String,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Exact, Tier::Equivalent, Tier::Convertible, Tier::String];
}

/// A parameter list, classified and converted as a unit.
///
/// `args` never includes the command word. Implemented for tuples of
/// [`FromValue`] types up to eight elements.
pub trait ArgPack: Sized {
    const ARITY: usize;

    fn all_exact(args: &[Value]) -> bool;

    fn all_equivalent(args: &[Value]) -> bool;

    fn cast_convertible(args: &[Value]) -> Option<Self>;

    fn cast_string(args: &[Value]) -> Option<Self>;

    /// First argument that does not convert, as a type-mismatch error.
    fn first_cast_error(args: &[Value]) -> Option<CastError>;

    /// Classify `args` for `tier` and, when they qualify, convert them.
    /// A tier whose type check passes can still yield `None` if a value
    /// fails to convert.
    fn for_tier(tier: Tier, args: &[Value]) -> Option<Self> {
        match tier {
            Tier::Exact if Self::all_exact(args) => Self::cast_string(args),
            Tier::Equivalent if Self::all_equivalent(args) => Self::cast_string(args),
            Tier::Convertible => Self::cast_convertible(args),
            Tier::String => Self::cast_string(args),
            _ => None,
        }
    }
}

macro_rules! arg_pack {
    ($n:expr; $($T:ident $i:tt),*) => {
        impl<$($T: FromValue),*> ArgPack for ($($T,)*) {
            const ARITY: usize = $n;

            #[allow(unused_variables)]
            fn all_exact(args: &[Value]) -> bool {
                args.len() == $n $(&& is_exact_type::<$T>(&args[$i]))*
            }

            #[allow(unused_variables)]
            fn all_equivalent(args: &[Value]) -> bool {
                args.len() == $n $(&& is_equivalent_type::<$T>(args[$i].ty()))*
            }

            #[allow(unused_variables)]
            fn cast_convertible(args: &[Value]) -> Option<Self> {
                if args.len() != $n {
                    return None;
                }
                Some(($(try_cast_no_implicit_string::<$T>(&args[$i])?,)*))
            }

            #[allow(unused_variables)]
            fn cast_string(args: &[Value]) -> Option<Self> {
                if args.len() != $n {
                    return None;
                }
                Some(($(try_cast::<$T>(&args[$i])?,)*))
            }

            #[allow(unused_variables)]
            fn first_cast_error(args: &[Value]) -> Option<CastError> {
                $(
                    if let Some(arg) = args.get($i) {
                        if let Err(err) = cast::<$T>(arg) {
                            return Some(err);
                        }
                    }
                )*
                None
            }
        }
    };
}

arg_pack!(0;);
arg_pack!(1; A 0);
arg_pack!(2; A 0, B 1);
arg_pack!(3; A 0, B 1, C 2);
arg_pack!(4; A 0, B 1, C 2, D 3);
arg_pack!(5; A 0, B 1, C 2, D 3, E 4);
arg_pack!(6; A 0, B 1, C 2, D 3, E 4, F 5);
arg_pack!(7; A 0, B 1, C 2, D 3, E 4, F 5, G 6);
arg_pack!(8; A 0, B 1, C 2, D 3, E 4, F 5, G 6, H 7);
