use crate::RealmError;
use crate::core::{Collect, Gc, GcPtr, GcTrace, MutationContext, PropertyKey, new_gc_cell_ptr};
use crate::raise_type_error;

pub type ObjectPtr<'gc> = GcPtr<'gc, ObjectData<'gc>>;

#[inline]
pub fn new_object_data<'gc>(mc: &MutationContext<'gc>) -> ObjectPtr<'gc> {
    new_gc_cell_ptr(mc, ObjectData::new())
}

#[derive(Clone, Default)]
pub struct ObjectData<'gc> {
    pub properties: indexmap::IndexMap<PropertyKey, GcPtr<'gc, Value<'gc>>>,
    pub non_enumerable: std::collections::HashSet<PropertyKey>,
    /// Delegation link walked by every ancestry search. `None` is the
    /// chain root.
    pub prototype: Option<ObjectPtr<'gc>>,
    // Whether new own properties can be added to this object. Default true.
    pub extensible: bool,
}

unsafe impl<'gc> Collect<'gc> for ObjectData<'gc> {
    fn trace<T: GcTrace<'gc>>(&self, cc: &mut T) {
        for v in self.properties.values() {
            v.trace(cc);
        }
        if let Some(p) = &self.prototype {
            p.trace(cc);
        }
    }
}

impl<'gc> ObjectData<'gc> {
    pub fn new() -> Self {
        // ObjectData::default() would initialize `extensible` to false, so ensure it's true by default
        ObjectData::<'_> {
            extensible: true,
            ..ObjectData::default()
        }
    }

    pub fn insert(&mut self, key: PropertyKey, val: GcPtr<'gc, Value<'gc>>) {
        self.properties.insert(key, val);
    }

    pub fn set_non_enumerable(&mut self, key: impl Into<PropertyKey>) {
        self.non_enumerable.insert(key.into());
    }

    pub fn is_enumerable(&self, key: &PropertyKey) -> bool {
        !self.non_enumerable.contains(key)
    }

    pub fn is_extensible(&self) -> bool {
        self.extensible
    }

    pub fn prevent_extensions(&mut self) {
        self.extensible = false;
    }
}

#[derive(Clone)]
pub enum Value<'gc> {
    Number(f64),
    String(String),
    Boolean(bool),
    Undefined,
    Null,
    Object(ObjectPtr<'gc>),
    /// Named native-method slot registered on built-in objects. Display
    /// only; this model has no call machinery.
    Function(String),
}

impl From<f64> for Value<'_> {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value<'_> {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value<'_> {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value<'_> {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

unsafe impl<'gc> Collect<'gc> for Value<'gc> {
    fn trace<T: GcTrace<'gc>>(&self, cc: &mut T) {
        if let Value::Object(obj) = self {
            obj.trace(cc);
        }
    }
}

impl<'gc> std::fmt::Debug for Value<'gc> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Number(n) => write!(f, "Number({})", n),
            Value::String(s) => write!(f, "String({:?})", s),
            Value::Boolean(b) => write!(f, "Boolean({})", b),
            Value::Null => write!(f, "Null"),
            Value::Undefined => write!(f, "Undefined"),
            Value::Object(obj) => write!(f, "Object({:p})", Gc::as_ptr(*obj)),
            Value::Function(s) => write!(f, "Function({})", s),
        }
    }
}

pub fn value_to_string<'gc>(val: &Value<'gc>) -> String {
    match val {
        Value::Number(n) => {
            if n.is_nan() {
                "NaN".to_string()
            } else if n.is_infinite() {
                if n.is_sign_negative() {
                    "-Infinity".to_string()
                } else {
                    "Infinity".to_string()
                }
            } else {
                n.to_string()
            }
        }
        Value::String(s) => s.clone(),
        Value::Boolean(b) => b.to_string(),
        Value::Undefined => "undefined".to_string(),
        Value::Null => "null".to_string(),
        Value::Object(_) => "[object Object]".to_string(),
        Value::Function(name) => format!("function {}", name),
    }
}

/// SameValue-style comparison: primitives by value (NaN equal to itself),
/// objects by pointer identity.
pub fn values_equal<'gc>(v1: &Value<'gc>, v2: &Value<'gc>) -> bool {
    match (v1, v2) {
        (Value::Number(n1), Value::Number(n2)) => {
            if n1.is_nan() && n2.is_nan() {
                true
            } else {
                n1 == n2
            }
        }
        (Value::String(s1), Value::String(s2)) => s1 == s2,
        (Value::Boolean(b1), Value::Boolean(b2)) => b1 == b2,
        (Value::Undefined, Value::Undefined) => true,
        (Value::Null, Value::Null) => true,
        (Value::Object(o1), Value::Object(o2)) => Gc::ptr_eq(*o1, *o2),
        (Value::Function(f1), Value::Function(f2)) => f1 == f2,
        _ => false,
    }
}

/// Own-then-chain property lookup. The walk has the same shape as the
/// ancestry search: advance the cursor to its own prototype until the
/// key is found or the chain root is passed.
pub fn object_get_key_value<'gc>(obj: &ObjectPtr<'gc>, key: impl Into<PropertyKey>) -> Option<GcPtr<'gc, Value<'gc>>> {
    let key = key.into();
    let mut current = Some(*obj);
    while let Some(cur) = current {
        if let Some(val) = cur.borrow().properties.get(&key) {
            return Some(*val);
        }
        current = cur.borrow().prototype;
    }
    None
}

pub fn get_own_property<'gc>(obj: &ObjectPtr<'gc>, key: &PropertyKey) -> Option<GcPtr<'gc, Value<'gc>>> {
    obj.borrow().properties.get(key).cloned()
}

pub fn has_own_property<'gc>(obj: &ObjectPtr<'gc>, key: impl Into<PropertyKey>) -> bool {
    obj.borrow().properties.contains_key(&key.into())
}

pub fn object_set_key_value<'gc>(
    mc: &MutationContext<'gc>,
    obj: &ObjectPtr<'gc>,
    key: impl Into<PropertyKey>,
    val: Value<'gc>,
) -> Result<(), RealmError> {
    let key = key.into();

    let exists = obj.borrow().properties.contains_key(&key);
    log::debug!(
        "object_set_key_value: obj={:p} key={} key_exists={} extensible={}",
        Gc::as_ptr(*obj),
        key,
        exists,
        obj.borrow().is_extensible()
    );

    // Disallow creating new own properties on non-extensible objects
    if !exists && !obj.borrow().is_extensible() {
        return Err(raise_type_error!("Cannot add property to non-extensible object"));
    }

    let val_ptr = new_gc_cell_ptr(mc, val);
    obj.borrow_mut(mc).insert(key, val_ptr);
    Ok(())
}
