//! Process-wide descriptors for native types (enums, classes).
//!
//! A descriptor is created the first time a Rust type asks for one and is
//! leaked so it can be handed out as `&'static`. Nothing is ever removed.

use crate::obj_type::{self, ObjType};
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::any::TypeId;
use std::collections::HashMap;

static DESCRIPTORS: Lazy<Mutex<HashMap<TypeId, &'static ObjType>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Descriptor for `T`, created under `name` on first use. Later calls
/// return the same descriptor and ignore `name`.
pub fn descriptor_for<T: 'static>(name: &str) -> &'static ObjType {
    let mut table = DESCRIPTORS.lock();
    *table.entry(TypeId::of::<T>()).or_insert_with(|| {
        let name: &'static str = Box::leak(name.to_owned().into_boxed_str());
        Box::leak(Box::new(ObjType::new(name)))
    })
}

/// Descriptor already created for `T`, if any.
pub fn lookup<T: 'static>() -> Option<&'static ObjType> {
    DESCRIPTORS.lock().get(&TypeId::of::<T>()).copied()
}

/// Find a descriptor by its name: builtins first, then native types.
pub fn find_by_name(name: &str) -> Option<&'static ObjType> {
    if let Some(ty) = obj_type::builtins().into_iter().find(|t| t.name() == name) {
        return Some(ty);
    }
    DESCRIPTORS
        .lock()
        .values()
        .copied()
        .find(|t| t.name() == name)
}
