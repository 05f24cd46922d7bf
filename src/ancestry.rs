//! Ancestry-chain searches over the delegation graph.
//!
//! Every operation here is a linear walk: a cursor starts at an object's
//! immediate prototype and advances toward the chain root, where the
//! cursor becomes `None`. Identity is pointer identity. None of the walks
//! guard against malformed self-referential chains; a cycle makes them
//! non-terminating.

use crate::RealmError;
use crate::core::{Gc, MutationContext, ObjectPtr, Value, object_get_key_value};
use crate::raise_type_error;

/// Fetch an object's immediate ancestor. `None` at the chain root.
pub fn prototype_of<'gc>(obj: &ObjectPtr<'gc>) -> Option<ObjectPtr<'gc>> {
    obj.borrow().prototype
}

/// Replace an object's delegation link. Non-extensible objects keep their
/// chain fixed.
pub fn set_prototype_of<'gc>(
    mc: &MutationContext<'gc>,
    obj: &ObjectPtr<'gc>,
    proto: Option<ObjectPtr<'gc>>,
) -> Result<(), RealmError> {
    if !obj.borrow().is_extensible() {
        return Err(raise_type_error!("Cannot set prototype of non-extensible object"));
    }
    log::debug!(
        "set_prototype_of: obj={:p} proto={}",
        Gc::as_ptr(*obj),
        proto.map(|p| format!("{:p}", Gc::as_ptr(p))).unwrap_or_else(|| "null".to_string())
    );
    obj.borrow_mut(mc).prototype = proto;
    Ok(())
}

/// `Object.prototype.isPrototypeOf` semantics: does `proto` appear
/// anywhere in the subject's ancestor chain? Non-object subjects have no
/// chain and answer false.
pub fn is_prototype_of<'gc>(proto: &ObjectPtr<'gc>, subject: &Value<'gc>) -> bool {
    let Value::Object(obj) = subject else {
        return false;
    };
    let mut current = obj.borrow().prototype;
    while let Some(cur) = current {
        if Gc::ptr_eq(cur, *proto) {
            log::trace!("is_prototype_of: hit at {:p}", Gc::as_ptr(cur));
            return true;
        }
        current = cur.borrow().prototype;
    }
    false
}

/// `instanceof` semantics without the `@@hasInstance` protocol: resolve
/// the constructor's `prototype` property and search the subject's chain
/// for it. A constructor without an object-valued `prototype` matches
/// nothing, so the answer is false by construction rather than an error.
pub fn has_instance<'gc>(ctor: &ObjectPtr<'gc>, subject: &Value<'gc>) -> bool {
    let Some(proto_rc) = object_get_key_value(ctor, "prototype") else {
        return false;
    };
    let marker = match &*proto_rc.borrow() {
        Value::Object(p) => *p,
        _ => return false,
    };
    is_prototype_of(&marker, subject)
}

/// Number of delegation links between `obj` and the chain root.
pub fn chain_depth<'gc>(obj: &ObjectPtr<'gc>) -> usize {
    let mut depth = 0usize;
    let mut current = obj.borrow().prototype;
    while let Some(cur) = current {
        depth += 1;
        current = cur.borrow().prototype;
    }
    depth
}
