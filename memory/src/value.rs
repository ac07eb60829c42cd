use crate::list::{format_list, parse_list};
use crate::obj_type::{self, ObjType};
use crate::parse;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use once_cell::unsync::OnceCell;
use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Native payload of a value. `Pure` means the string form is all there is.
pub enum Rep {
    Pure,
    Int(i64),
    Double(f64),
    Boolean(bool),
    BigInt(BigInt),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    Dict(Vec<(Value, Value)>),
    Opaque(Rc<dyn Any>),
}

struct Obj {
    ty: Option<&'static ObjType>,
    rep: Rep,
    string: OnceCell<Box<str>>,
}

/// Reference-counted dynamic value.
///
/// A value has an optional type descriptor (none means "implicitly a
/// string"), a payload, and a string form computed on first request.
/// Readers never retag a value; the string cache is the only state a
/// read can fill in.
#[derive(Clone)]
pub struct Value(Rc<Obj>);

impl Value {
    fn make(ty: Option<&'static ObjType>, rep: Rep) -> Self {
        Value(Rc::new(Obj {
            ty,
            rep,
            string: OnceCell::new(),
        }))
    }

    fn make_with_string(ty: Option<&'static ObjType>, rep: Rep, s: String) -> Self {
        Value(Rc::new(Obj {
            ty,
            rep,
            string: OnceCell::from(s.into_boxed_str()),
        }))
    }

    // --- Constructors ---

    /// Untyped string.
    pub fn string(s: impl Into<String>) -> Self {
        Value::make_with_string(None, Rep::Pure, s.into())
    }

    /// String carrying the `string` descriptor.
    pub fn typed_string(s: impl Into<String>) -> Self {
        Value::make_with_string(Some(&obj_type::STRING), Rep::Pure, s.into())
    }

    pub fn empty() -> Self {
        Value::string(String::new())
    }

    pub fn null() -> Self {
        Value::make_with_string(Some(&obj_type::NULL), Rep::Pure, String::new())
    }

    #[inline]
    pub fn int(i: i64) -> Self {
        Value::make(Some(&obj_type::INT), Rep::Int(i))
    }

    #[inline]
    pub fn double(d: f64) -> Self {
        Value::make(Some(&obj_type::DOUBLE), Rep::Double(d))
    }

    #[inline]
    pub fn boolean(b: bool) -> Self {
        Value::make(Some(&obj_type::BOOLEAN), Rep::Boolean(b))
    }

    pub fn bignum(b: BigInt) -> Self {
        Value::make(Some(&obj_type::BIGNUM), Rep::BigInt(b))
    }

    pub fn bytes(b: Vec<u8>) -> Self {
        Value::make(Some(&obj_type::BYTEARRAY), Rep::Bytes(b))
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::make(Some(&obj_type::LIST), Rep::List(items))
    }

    pub fn dict(entries: Vec<(Value, Value)>) -> Self {
        Value::make(Some(&obj_type::DICT), Rep::Dict(entries))
    }

    /// Value holding an arbitrary native payload under a custom descriptor.
    /// The string form is fixed at construction.
    pub fn opaque(ty: &'static ObjType, payload: Rc<dyn Any>, s: impl Into<String>) -> Self {
        Value::make_with_string(Some(ty), Rep::Opaque(payload), s.into())
    }

    // --- Type queries ---

    #[inline]
    pub fn ty(&self) -> Option<&'static ObjType> {
        self.0.ty
    }

    #[inline]
    pub fn has_type(&self, expected: &'static ObjType) -> bool {
        obj_type::is(self.0.ty, expected)
    }

    #[inline]
    pub fn is_untyped(&self) -> bool {
        self.0.ty.is_none()
    }

    /// Untyped or explicitly `string`-typed.
    #[inline]
    pub fn is_string_like(&self) -> bool {
        self.0.ty.map_or(true, |t| t == &obj_type::STRING)
    }

    #[inline]
    pub fn rep(&self) -> &Rep {
        &self.0.rep
    }

    pub fn ptr_eq(&self, other: &Value) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    // --- String form ---

    pub fn as_str(&self) -> &str {
        self.0.string.get_or_init(|| self.render().into_boxed_str())
    }

    /// Whether the string form has been computed yet.
    pub fn has_string(&self) -> bool {
        self.0.string.get().is_some()
    }

    fn render(&self) -> String {
        match &self.0.rep {
            Rep::Pure | Rep::Opaque(_) => String::new(),
            Rep::Int(i) => i.to_string(),
            Rep::Double(d) => format_double(*d),
            Rep::Boolean(b) => (if *b { "1" } else { "0" }).to_string(),
            Rep::BigInt(b) => b.to_string(),
            Rep::Bytes(b) => b.iter().map(|&c| c as char).collect(),
            Rep::List(items) => {
                let words: Vec<&str> = items.iter().map(Value::as_str).collect();
                format_list(&words)
            }
            Rep::Dict(entries) => {
                let words: Vec<&str> = entries
                    .iter()
                    .flat_map(|(k, v)| [k.as_str(), v.as_str()])
                    .collect();
                format_list(&words)
            }
        }
    }

    // --- Readers ---

    pub fn get_int(&self) -> Option<i64> {
        match &self.0.rep {
            Rep::Int(i) => Some(*i),
            Rep::BigInt(b) => b.to_i64(),
            _ => parse::parse_int(self.as_str()),
        }
    }

    pub fn get_bignum(&self) -> Option<BigInt> {
        match &self.0.rep {
            Rep::Int(i) => Some(BigInt::from(*i)),
            Rep::BigInt(b) => Some(b.clone()),
            _ => parse::parse_bignum(self.as_str()),
        }
    }

    pub fn get_double(&self) -> Option<f64> {
        match &self.0.rep {
            Rep::Double(d) => Some(*d),
            Rep::Int(i) => Some(*i as f64),
            Rep::BigInt(b) => b.to_f64(),
            _ => parse::parse_double(self.as_str()),
        }
    }

    pub fn get_boolean(&self) -> Option<bool> {
        match &self.0.rep {
            Rep::Boolean(b) => Some(*b),
            Rep::Int(i) => Some(*i != 0),
            Rep::Double(d) => Some(*d != 0.0),
            _ => parse::parse_boolean(self.as_str()),
        }
    }

    /// Bytes of a byte array, or of a string whose characters all fit in
    /// one byte.
    pub fn get_bytes(&self) -> Option<Vec<u8>> {
        match &self.0.rep {
            Rep::Bytes(b) => Some(b.clone()),
            _ => self
                .as_str()
                .chars()
                .map(|c| u8::try_from(u32::from(c)).ok())
                .collect(),
        }
    }

    pub fn get_list(&self) -> Option<Vec<Value>> {
        match &self.0.rep {
            Rep::List(items) => Some(items.clone()),
            Rep::Dict(entries) => Some(
                entries
                    .iter()
                    .flat_map(|(k, v)| [k.clone(), v.clone()])
                    .collect(),
            ),
            _ => parse_list(self.as_str())
                .ok()
                .map(|words| words.into_iter().map(Value::string).collect()),
        }
    }

    pub fn get_dict(&self) -> Option<Vec<(Value, Value)>> {
        match &self.0.rep {
            Rep::Dict(entries) => Some(entries.clone()),
            _ => {
                let items = self.get_list()?;
                if items.len() % 2 != 0 {
                    return None;
                }
                let mut entries = Vec::with_capacity(items.len() / 2);
                let mut it = items.into_iter();
                while let (Some(k), Some(v)) = (it.next(), it.next()) {
                    entries.push((k, v));
                }
                Some(entries)
            }
        }
    }

    /// Native payload of type `T`, if this value carries one.
    pub fn opaque_ref<T: 'static>(&self) -> Option<Rc<T>> {
        match &self.0.rep {
            Rep::Opaque(payload) => payload.clone().downcast::<T>().ok(),
            _ => None,
        }
    }
}

/// Shortest form that reads back as the same double and never looks like
/// an integer.
pub fn format_double(d: f64) -> String {
    if d.is_nan() {
        "NaN".to_string()
    } else if d.is_infinite() {
        (if d > 0.0 { "Inf" } else { "-Inf" }).to_string()
    } else {
        format!("{:?}", d)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::string(s)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0.rep {
            Rep::Int(i) => write!(f, "Int({})", i),
            Rep::Double(d) => write!(f, "Double({})", format_double(*d)),
            Rep::Boolean(b) => write!(f, "Boolean({})", b),
            Rep::BigInt(b) => write!(f, "BigInt({})", b),
            Rep::Bytes(b) => write!(f, "Bytes({} bytes)", b.len()),
            Rep::List(items) => f.debug_list().entries(items).finish(),
            Rep::Dict(entries) => f
                .debug_map()
                .entries(entries.iter().map(|(k, v)| (k, v)))
                .finish(),
            Rep::Opaque(_) | Rep::Pure => match self.0.ty {
                Some(ty) => write!(f, "{}({:?})", ty.name(), self.as_str()),
                None => write!(f, "{:?}", self.as_str()),
            },
        }
    }
}
