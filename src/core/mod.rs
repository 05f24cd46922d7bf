use crate::RealmError;
use crate::builtins::initialize_global_constructors;
pub use gc_arena::Mutation as MutationContext;
pub use gc_arena::collect::Trace as GcTrace;
pub use gc_arena::lock::RefLock as GcCell;
pub use gc_arena::{Collect, Gc};

pub type GcPtr<'gc, T> = Gc<'gc, GcCell<T>>;

#[inline]
pub fn new_gc_cell_ptr<'gc, T: 'gc + Collect<'gc>>(mc: &MutationContext<'gc>, value: T) -> GcPtr<'gc, T> {
    Gc::new(mc, GcCell::new(value))
}

mod value;
pub use value::*;

mod property_key;
pub use property_key::*;

#[derive(Collect)]
#[collect(no_drop)]
pub struct RealmRoot<'gc> {
    pub global_env: ObjectPtr<'gc>,
}

pub type RealmArena = gc_arena::Arena<gc_arena::Rootable!['gc => RealmRoot<'gc>]>;

/// Owner of the arena holding one bootstrapped object graph. All access
/// to values happens inside [`Realm::mutate`]; the branded `'gc`
/// lifetime keeps object pointers from escaping the closure.
pub struct Realm {
    arena: RealmArena,
}

impl Realm {
    pub fn new() -> Result<Self, RealmError> {
        let arena = RealmArena::new(|mc| {
            let global_env = new_object_data(mc);
            RealmRoot { global_env }
        });

        arena.mutate(|mc, root| initialize_global_constructors(mc, &root.global_env))?;

        Ok(Realm { arena })
    }

    pub fn mutate<F, T>(&self, f: F) -> T
    where
        F: for<'gc> FnOnce(&MutationContext<'gc>, &RealmRoot<'gc>) -> T,
    {
        self.arena.mutate(|mc, root| f(mc, root))
    }
}

pub fn env_get<'gc>(env: &ObjectPtr<'gc>, key: &str) -> Option<GcPtr<'gc, Value<'gc>>> {
    let mut current = Some(*env);
    while let Some(cur) = current {
        if let Some(val) = cur.borrow().properties.get(&PropertyKey::from(key)) {
            return Some(*val);
        }
        current = cur.borrow().prototype;
    }
    None
}

pub fn env_set<'gc>(mc: &MutationContext<'gc>, env: &ObjectPtr<'gc>, key: &str, val: Value<'gc>) -> Result<(), RealmError> {
    object_set_key_value(mc, env, key, val)
}

/// Resolve a named global binding to its object, if it is one.
pub fn global_object<'gc>(env: &ObjectPtr<'gc>, name: &str) -> Option<ObjectPtr<'gc>> {
    if let Some(val_rc) = env_get(env, name)
        && let Value::Object(obj) = &*val_rc.borrow()
    {
        return Some(*obj);
    }
    None
}

// Helper to resolve a constructor's prototype object if present in `env`.
pub fn constructor_prototype<'gc>(env: &ObjectPtr<'gc>, name: &str) -> Option<ObjectPtr<'gc>> {
    if let Some(ctor_obj) = global_object(env, name)
        && let Some(proto_val_rc) = object_get_key_value(&ctor_obj, "prototype")
        && let Value::Object(proto_obj) = &*proto_val_rc.borrow()
    {
        return Some(*proto_obj);
    }
    None
}

// Helper to set an object's internal prototype from a constructor name.
// If the constructor.prototype is available, sets the object's delegation
// link to that object. Consolidates the common pattern used when creating
// instances.
pub fn set_internal_prototype_from_constructor<'gc>(
    mc: &MutationContext<'gc>,
    obj: &ObjectPtr<'gc>,
    env: &ObjectPtr<'gc>,
    ctor_name: &str,
) -> Result<(), RealmError> {
    if let Some(proto_obj) = constructor_prototype(env, ctor_name) {
        log::trace!("setting prototype for ctor='{}' proto_obj={:p}", ctor_name, Gc::as_ptr(proto_obj));
        obj.borrow_mut(mc).prototype = Some(proto_obj);
    }
    Ok(())
}
