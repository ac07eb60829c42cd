use crate::cast::IntoValue;
use crate::classify::{ArgPack, Tier};
use crate::error::{CastError, Error};
use crate::interp::Interp;
use memory::Value;
use std::error::Error as StdError;
use std::fmt;
use std::rc::Rc;

/// Outcome of a successful native call.
#[derive(Debug, Clone)]
pub enum Reply {
    Value(Value),
    NoValue,
}

impl Reply {
    pub fn into_value(self) -> Value {
        match self {
            Reply::Value(v) => v,
            Reply::NoValue => Value::empty(),
        }
    }
}

/// Native return types: any [`IntoValue`], `()` for no value, or a
/// `Result` whose error becomes the command's error.
pub trait IntoReply {
    fn into_reply(self) -> Result<Reply, Error>;
}

impl<T: IntoValue> IntoReply for T {
    fn into_reply(self) -> Result<Reply, Error> {
        Ok(Reply::Value(self.into_value()))
    }
}

impl IntoReply for () {
    fn into_reply(self) -> Result<Reply, Error> {
        Ok(Reply::NoValue)
    }
}

impl<T, E> IntoReply for Result<T, E>
where
    T: IntoReply,
    E: Into<Box<dyn StdError + Send + Sync>>,
{
    fn into_reply(self) -> Result<Reply, Error> {
        match self {
            Ok(v) => v.into_reply(),
            Err(e) => Err(Error::native(e)),
        }
    }
}

type Attempt = dyn Fn(Tier, &mut Interp, &[Value]) -> Option<Result<Reply, Error>>;

/// One native candidate of a command.
///
/// `attempt` classifies and converts the arguments for a tier and, only if
/// they qualify, calls the native function. `None` means the tier rejected
/// the candidate and nothing was called.
#[derive(Clone)]
pub struct Overload {
    arity: usize,
    attempt: Rc<Attempt>,
    diagnose: fn(&[Value]) -> Option<CastError>,
}

impl Overload {
    /// Build a candidate from a converted-argument callback.
    pub fn from_pack<P, F>(call: F) -> Self
    where
        P: ArgPack + 'static,
        F: Fn(&mut Interp, P) -> Result<Reply, Error> + 'static,
    {
        Overload {
            arity: P::ARITY,
            attempt: Rc::new(move |tier: Tier, interp: &mut Interp, args: &[Value]| {
                let pack = P::for_tier(tier, args)?;
                Some(call(interp, pack))
            }),
            diagnose: P::first_cast_error,
        }
    }

    #[inline]
    pub fn arity(&self) -> usize {
        self.arity
    }

    pub fn call(&self, tier: Tier, interp: &mut Interp, args: &[Value]) -> Option<Result<Reply, Error>> {
        (self.attempt)(tier, interp, args)
    }

    pub fn try_exact(&self, interp: &mut Interp, args: &[Value]) -> Option<Result<Reply, Error>> {
        self.call(Tier::Exact, interp, args)
    }

    pub fn try_equivalent(&self, interp: &mut Interp, args: &[Value]) -> Option<Result<Reply, Error>> {
        self.call(Tier::Equivalent, interp, args)
    }

    pub fn try_convertible(&self, interp: &mut Interp, args: &[Value]) -> Option<Result<Reply, Error>> {
        self.call(Tier::Convertible, interp, args)
    }

    /// String-fallback call. Reports the first argument that failed to
    /// convert instead of continuing.
    pub fn invoke_with_string(&self, interp: &mut Interp, args: &[Value]) -> Result<Reply, Error> {
        match self.call(Tier::String, interp, args) {
            Some(result) => result,
            None => Err(match (self.diagnose)(args) {
                Some(err) => Error::Cast(err),
                None => Error::NoMatchingOverload,
            }),
        }
    }
}

impl fmt::Debug for Overload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overload").field("arity", &self.arity).finish()
    }
}

/// Plain native functions: `Fn(A, B, ..) -> R`.
pub trait NativeFn<Args>: 'static {
    fn into_overload(self) -> Overload;
}

/// Native functions that also receive the interpreter:
/// `Fn(&mut Interp, A, B, ..) -> R`.
pub trait InterpFn<Args>: 'static {
    fn into_overload(self) -> Overload;
}

macro_rules! native_fn {
    ($($T:ident),*) => {
        impl<Func, R, $($T,)*> NativeFn<($($T,)*)> for Func
        where
            Func: Fn($($T),*) -> R + 'static,
            R: IntoReply,
            ($($T,)*): ArgPack + 'static,
        {
            #[allow(non_snake_case)]
            fn into_overload(self) -> Overload {
                Overload::from_pack(move |_interp: &mut Interp, ($($T,)*): ($($T,)*)| {
                    self($($T),*).into_reply()
                })
            }
        }

        impl<Func, R, $($T,)*> InterpFn<($($T,)*)> for Func
        where
            Func: Fn(&mut Interp, $($T),*) -> R + 'static,
            R: IntoReply,
            ($($T,)*): ArgPack + 'static,
        {
            #[allow(non_snake_case)]
            fn into_overload(self) -> Overload {
                Overload::from_pack(move |interp: &mut Interp, ($($T,)*): ($($T,)*)| {
                    self(interp, $($T),*).into_reply()
                })
            }
        }
    };
}

native_fn!();
native_fn!(A);
native_fn!(A, B);
native_fn!(A, B, C);
native_fn!(A, B, C, D);
native_fn!(A, B, C, D, E);
native_fn!(A, B, C, D, E, F);
native_fn!(A, B, C, D, E, F, G);
native_fn!(A, B, C, D, E, F, G, H);
