use crate::RealmError;
use crate::core::{
    MutationContext, ObjectPtr, Value, constructor_prototype, env_set, new_object_data, object_set_key_value,
    set_internal_prototype_from_constructor,
};
use crate::setup_error_here;

/// Bootstrap the realm's built-in constructors into the global
/// environment. Order matters: `Object` first (its prototype is the
/// chain root every other prototype delegates to), then `Function` so
/// later constructors can take `Function.prototype` as their internal
/// prototype, then `Array`.
pub fn initialize_global_constructors<'gc>(mc: &MutationContext<'gc>, env: &ObjectPtr<'gc>) -> Result<(), RealmError> {
    initialize_object(mc, env)?;

    // Give the global object itself the standard root-level ancestor.
    let object_proto = constructor_prototype(env, "Object").ok_or_else(|| setup_error_here!("Object.prototype missing"))?;
    env.borrow_mut(mc).prototype = Some(object_proto);

    initialize_function(mc, env)?;
    initialize_array(mc, env)?;

    Ok(())
}

fn initialize_object<'gc>(mc: &MutationContext<'gc>, env: &ObjectPtr<'gc>) -> Result<(), RealmError> {
    // 1. Create Object constructor
    let object_ctor = new_object_data(mc);
    env_set(mc, env, "Object", Value::Object(object_ctor))?;

    // 2. Create Object.prototype. It is the chain root, so its own
    // delegation link stays None.
    let object_proto = new_object_data(mc);
    object_set_key_value(mc, &object_ctor, "prototype", Value::Object(object_proto))?;
    object_set_key_value(mc, &object_proto, "constructor", Value::Object(object_ctor))?;
    object_proto.borrow_mut(mc).set_non_enumerable("constructor");

    // 3. Register static methods
    let static_methods = vec!["create", "getPrototypeOf", "setPrototypeOf", "preventExtensions", "isExtensible"];
    for method in static_methods {
        object_set_key_value(mc, &object_ctor, method, Value::Function(format!("Object.{method}")))?;
    }

    // 4. Register prototype methods
    let proto_methods = vec!["hasOwnProperty", "isPrototypeOf", "toString", "valueOf"];
    for method in proto_methods {
        object_set_key_value(mc, &object_proto, method, Value::Function(format!("Object.prototype.{method}")))?;
        // Methods on prototypes should be non-enumerable so listings don't show them
        object_proto.borrow_mut(mc).set_non_enumerable(method);
    }

    Ok(())
}

fn initialize_function<'gc>(mc: &MutationContext<'gc>, env: &ObjectPtr<'gc>) -> Result<(), RealmError> {
    let function_ctor = define_constructor(mc, env, "Function", None)?;
    let function_proto = constructor_prototype(env, "Function").ok_or_else(|| setup_error_here!("Function.prototype missing"))?;

    // Function is an instance of itself, and the Object constructor
    // (created before Function existed) gets its delegation link fixed up
    // here so every constructor sits under Function.prototype.
    function_ctor.borrow_mut(mc).prototype = Some(function_proto);
    if let Some(object_ctor) = crate::core::global_object(env, "Object") {
        object_ctor.borrow_mut(mc).prototype = Some(function_proto);
    }
    Ok(())
}

fn initialize_array<'gc>(mc: &MutationContext<'gc>, env: &ObjectPtr<'gc>) -> Result<(), RealmError> {
    let array_ctor = define_constructor(mc, env, "Array", None)?;
    object_set_key_value(mc, &array_ctor, "isArray", Value::Function("Array.isArray".to_string()))?;

    let array_proto = constructor_prototype(env, "Array").ok_or_else(|| setup_error_here!("Array.prototype missing"))?;
    let proto_methods = vec!["push", "pop", "indexOf", "join", "toString"];
    for method in proto_methods {
        object_set_key_value(mc, &array_proto, method, Value::Function(format!("Array.prototype.{method}")))?;
        array_proto.borrow_mut(mc).set_non_enumerable(method);
    }
    Ok(())
}

/// Create a constructor/prototype pair and register the constructor in
/// the global environment: `<name>.prototype` delegates to
/// `parent_proto` (or `Object.prototype` when omitted), the two objects
/// back-link through `prototype`/`constructor`, and the constructor
/// object itself delegates to `Function.prototype` when available.
pub fn define_constructor<'gc>(
    mc: &MutationContext<'gc>,
    env: &ObjectPtr<'gc>,
    name: &str,
    parent_proto: Option<ObjectPtr<'gc>>,
) -> Result<ObjectPtr<'gc>, RealmError> {
    let ctor = new_object_data(mc);
    if let Some(function_proto) = constructor_prototype(env, "Function") {
        ctor.borrow_mut(mc).prototype = Some(function_proto);
    }

    let proto = new_object_data(mc);
    let parent = match parent_proto {
        Some(p) => Some(p),
        None => constructor_prototype(env, "Object"),
    };
    if let Some(p) = parent {
        proto.borrow_mut(mc).prototype = Some(p);
    }

    object_set_key_value(mc, &ctor, "prototype", Value::Object(proto))?;
    object_set_key_value(mc, &proto, "constructor", Value::Object(ctor))?;
    proto.borrow_mut(mc).set_non_enumerable("constructor");

    env_set(mc, env, name, Value::Object(ctor))?;
    Ok(ctor)
}

/// Allocate an object delegating to `<ctor_name>.prototype`. When the
/// constructor cannot be resolved the object is left detached, matching
/// the toy model's no-validation stance.
pub fn new_instance<'gc>(mc: &MutationContext<'gc>, env: &ObjectPtr<'gc>, ctor_name: &str) -> Result<ObjectPtr<'gc>, RealmError> {
    let obj = new_object_data(mc);
    set_internal_prototype_from_constructor(mc, &obj, env, ctor_name)?;
    Ok(obj)
}

pub fn new_plain_object<'gc>(mc: &MutationContext<'gc>, env: &ObjectPtr<'gc>) -> Result<ObjectPtr<'gc>, RealmError> {
    new_instance(mc, env, "Object")
}

/// An empty array instance: delegates to `Array.prototype` and carries
/// a non-enumerable `length` of 0.
pub fn new_array<'gc>(mc: &MutationContext<'gc>, env: &ObjectPtr<'gc>) -> Result<ObjectPtr<'gc>, RealmError> {
    let arr = new_instance(mc, env, "Array")?;
    object_set_key_value(mc, &arr, "length", Value::Number(0.0))?;
    arr.borrow_mut(mc).set_non_enumerable("length");
    Ok(arr)
}
