//! Native objects exposed as instance commands.
//!
//! `interp.add_class::<T>("name")` makes a `name new ..` constructor
//! command. Each constructed object gets a handle name (`name#3`); the
//! handle is itself a command, `handle method args..`, until it is
//! destroyed with `handle destroy`.

use crate::cast::{FromValue, IntoValue};
use crate::classify::ArgPack;
use crate::command::Miss;
use crate::dispatch;
use crate::error::Error;
use crate::interp::Interp;
use crate::overload::{IntoReply, NativeFn, Overload, Reply};
use log::debug;
use memory::{registry, ObjType, Value};
use std::any::{Any, TypeId};
use std::cell::{Cell, Ref, RefCell, RefMut};
use std::collections::HashMap;
use std::marker::PhantomData;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

thread_local! {
    // Every handle alive on this thread, so a bare handle name can be read
    // back as its object.
    static LIVE: RefCell<HashMap<String, Weak<Handle>>> = RefCell::new(HashMap::new());
}

/// Type-erased side of an instance: what the interpreter needs to route a
/// call without knowing `T`.
pub(crate) struct Handle {
    name: String,
    ty: &'static ObjType,
    class: TypeId,
    object: Rc<dyn Any>,
    destroyed: Cell<bool>,
}

impl Handle {
    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn is_destroyed(&self) -> bool {
        self.destroyed.get()
    }

    /// After this the handle name no longer resolves, and the handle is
    /// never registered as a command again.
    pub(crate) fn mark_destroyed(&self) {
        self.destroyed.set(true);
        self.unlist();
    }

    fn unlist(&self) {
        let _ = LIVE.try_with(|live| {
            if let Ok(mut live) = live.try_borrow_mut() {
                live.remove(&self.name);
            }
        });
    }

    fn value(self: &Rc<Self>) -> Value {
        Value::opaque(self.ty, self.clone(), self.name.clone())
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        self.unlist();
    }
}

fn class_name<T: 'static>() -> &'static str {
    let full = std::any::type_name::<T>();
    full.rsplit("::").next().unwrap_or(full)
}

/// Shared handle to a native object of type `T`.
pub struct Instance<T> {
    handle: Rc<Handle>,
    object: Rc<RefCell<T>>,
}

impl<T> Clone for Instance<T> {
    fn clone(&self) -> Self {
        Instance {
            handle: self.handle.clone(),
            object: self.object.clone(),
        }
    }
}

impl<T: 'static> Instance<T> {
    pub fn new(value: T) -> Self {
        let ty = registry::descriptor_for::<T>(class_name::<T>());
        let name = format!("{}#{}", ty.name(), NEXT_ID.fetch_add(1, Ordering::Relaxed));
        let object = Rc::new(RefCell::new(value));
        let handle = Rc::new(Handle {
            name: name.clone(),
            ty,
            class: TypeId::of::<T>(),
            object: object.clone(),
            destroyed: Cell::new(false),
        });
        LIVE.with(|live| live.borrow_mut().insert(name, Rc::downgrade(&handle)));
        Instance { handle, object }
    }

    fn from_handle(handle: Rc<Handle>) -> Option<Self> {
        if handle.class != TypeId::of::<T>() {
            return None;
        }
        let object = handle.object.clone().downcast::<RefCell<T>>().ok()?;
        Some(Instance { handle, object })
    }

    pub fn name(&self) -> &str {
        &self.handle.name
    }

    pub fn borrow(&self) -> Ref<'_, T> {
        self.object.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, T> {
        self.object.borrow_mut()
    }

    fn try_borrow_mut(&self) -> Result<RefMut<'_, T>, Error> {
        self.object
            .try_borrow_mut()
            .map_err(|_| Error::Script(format!("{} is already in use", self.handle.name)))
    }
}

impl<T: 'static> FromValue for Instance<T> {
    fn expected() -> String {
        let name = registry::lookup::<T>().map_or_else(class_name::<T>, ObjType::name);
        format!("{} instance", name)
    }

    fn try_cast(value: &Value) -> Option<Self> {
        if let Some(handle) = value.opaque_ref::<Handle>() {
            return Self::from_handle(handle);
        }
        if !value.is_string_like() {
            return None;
        }
        let handle = LIVE.with(|live| live.borrow().get(value.as_str()).and_then(Weak::upgrade))?;
        Self::from_handle(handle)
    }

    fn is_exact_type(value: &Value) -> bool {
        registry::lookup::<T>().map_or(false, |ty| value.has_type(ty))
    }
}

impl<T: 'static> IntoValue for Instance<T> {
    fn into_value(self) -> Value {
        self.handle.value()
    }
}

/// Constructors: `Fn(A, B, ..) -> T`.
pub trait CtorFn<T, Args>: 'static {
    fn into_overload(self) -> Overload;
}

/// Methods: `Fn(&mut T, A, B, ..) -> R`. The object travels as a hidden
/// first argument, so it takes part in overload matching like any other.
pub trait MethodFn<T, Args>: 'static {
    fn into_overload(self) -> Overload;
}

macro_rules! class_fns {
    ($($A:ident),*) => {
        impl<T, Func, $($A,)*> CtorFn<T, ($($A,)*)> for Func
        where
            T: 'static,
            Func: Fn($($A),*) -> T + 'static,
            ($($A,)*): ArgPack + 'static,
        {
            #[allow(non_snake_case)]
            fn into_overload(self) -> Overload {
                Overload::from_pack(move |_interp: &mut Interp, ($($A,)*): ($($A,)*)| {
                    Ok(Reply::Value(Instance::new(self($($A),*)).into_value()))
                })
            }
        }

        impl<T, Func, R, $($A,)*> MethodFn<T, ($($A,)*)> for Func
        where
            T: 'static,
            Func: Fn(&mut T, $($A),*) -> R + 'static,
            R: IntoReply,
            (Instance<T>, $($A,)*): ArgPack + 'static,
        {
            #[allow(non_snake_case)]
            fn into_overload(self) -> Overload {
                Overload::from_pack(move |_interp: &mut Interp, (this, $($A,)*): (Instance<T>, $($A,)*)| {
                    let mut object = this.try_borrow_mut()?;
                    self(&mut *object, $($A),*).into_reply()
                })
            }
        }
    };
}

class_fns!();
class_fns!(A);
class_fns!(A, B);
class_fns!(A, B, C);
class_fns!(A, B, C, D);
class_fns!(A, B, C, D, E);
class_fns!(A, B, C, D, E, F);
class_fns!(A, B, C, D, E, F, G);

/// Builder returned by [`Interp::add_class`].
pub struct ClassBuilder<'a, T> {
    interp: &'a mut Interp,
    name: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T: 'static> ClassBuilder<'_, T> {
    /// Add an overload of `name new ..`.
    pub fn constructor<Args, F: CtorFn<T, Args>>(&mut self, f: F) -> &mut Self {
        self.interp
            .create_command(&self.name)
            .add_child("new", Miss::Constructor)
            .add_overload(f.into_overload());
        self
    }

    /// Add an overload of `handle method ..`.
    pub fn method<Args, F: MethodFn<T, Args>>(&mut self, method: &str, f: F) -> &mut Self {
        self.interp
            .class_methods_mut(TypeId::of::<T>(), &self.name)
            .add_child(method, Miss::Method)
            .add_overload(f.into_overload());
        self
    }

    /// Add a function that does not need an object, as `name function ..`.
    pub fn function<Args, F: NativeFn<Args>>(&mut self, function: &str, f: F) -> &mut Self {
        self.interp
            .create_command(&self.name)
            .add_subcommand(function)
            .add_function(f);
        self
    }
}

impl Interp {
    /// Register `T` as a class named `name`. The descriptor for `T` takes
    /// this name if it does not exist yet.
    pub fn add_class<T: 'static>(&mut self, name: &str) -> ClassBuilder<'_, T> {
        registry::descriptor_for::<T>(name);
        self.create_command(name).add_child("new", Miss::Constructor);
        self.class_methods_mut(TypeId::of::<T>(), name);
        debug!("class {} registered", name);
        ClassBuilder {
            interp: self,
            name: name.to_string(),
            _marker: PhantomData,
        }
    }
}

/// `handle method args..`: run a method on the object behind `handle`.
pub(crate) fn invoke_instance(
    interp: &mut Interp,
    handle: Rc<Handle>,
    objv: &[Value],
) -> Result<Reply, Error> {
    let Some(method) = objv.get(1) else {
        return Err(Error::NoMatchingMethod);
    };
    if method.as_str() == "destroy" && objv.len() == 2 {
        interp.destroy_instance(&handle.name);
        return Ok(Reply::NoValue);
    }
    let methods = interp
        .class_methods(handle.class)
        .ok_or(Error::NoMatchingMethod)?;
    let node = methods
        .subcommand(method.as_str())
        .ok_or(Error::NoMatchingMethod)?;

    let mut call = Vec::with_capacity(objv.len());
    call.push(method.clone());
    call.push(handle.value());
    call.extend_from_slice(&objv[2..]);
    dispatch::dispatch(interp, node, &call)
}
