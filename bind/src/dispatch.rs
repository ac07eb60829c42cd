//! Per-invocation resolution: subcommand routing, arity filter, tier sweep.

use crate::classify::Tier;
use crate::command::Command;
use crate::error::Error;
use crate::interp::Interp;
use crate::overload::Reply;
use log::{trace, warn};
use memory::Value;
use std::any::Any;
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Descend into child nodes while the word after the current command word
/// is string-like and names a child. Returns the node reached and the
/// argument vector re-based so that element 0 is that node's word.
pub fn route<'c, 'v>(mut node: &'c Command, mut objv: &'v [Value]) -> (&'c Command, &'v [Value]) {
    while objv.len() > 1 && objv[1].is_string_like() {
        match node.subcommand(objv[1].as_str()) {
            Some(child) => {
                trace!("routing {:?} -> {:?}", node.name(), child.name());
                node = child;
                objv = &objv[1..];
            }
            None => break,
        }
    }
    (node, objv)
}

/// Pick and run one overload of `node`. `objv[0]` is the node's own word.
pub fn resolve(interp: &mut Interp, node: &Command, objv: &[Value]) -> Result<Reply, Error> {
    let args = objv.get(1..).unwrap_or_default();
    let overloads = node.overloads();

    if let [only] = overloads {
        if only.arity() != args.len() {
            return Err(node.miss());
        }
        return only.invoke_with_string(interp, args);
    }

    let candidates: Vec<_> = overloads
        .iter()
        .enumerate()
        .filter(|(_, o)| o.arity() == args.len())
        .collect();

    for tier in Tier::ALL {
        for (index, candidate) in &candidates {
            if let Some(result) = candidate.call(tier, interp, args) {
                trace!("{}: overload #{} matched at {:?}", node.name(), index, tier);
                return result;
            }
        }
    }

    Err(node.miss())
}

/// Route and resolve, turning a panic in the native body into an error.
pub fn dispatch(interp: &mut Interp, root: &Command, objv: &[Value]) -> Result<Reply, Error> {
    let (node, objv) = route(root, objv);
    match catch_unwind(AssertUnwindSafe(|| resolve(interp, node, objv))) {
        Ok(result) => result,
        Err(payload) => {
            let message = panic_message(payload);
            warn!("{}: native code panicked: {}", node.name(), message);
            Err(Error::Panic(message))
        }
    }
}

pub(crate) fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "native code panicked".to_string()
    }
}
