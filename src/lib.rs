pub(crate) mod ancestry;
pub(crate) mod builtins;
pub(crate) mod console;
pub(crate) mod core;
pub(crate) mod error;

pub use crate::ancestry::{chain_depth, has_instance, is_prototype_of, prototype_of, set_prototype_of};
pub use crate::builtins::{define_constructor, initialize_global_constructors, new_array, new_instance, new_plain_object};
pub use crate::console::{format_value, write_value};
pub use crate::core::{
    GcPtr, MutationContext, ObjectData, ObjectPtr, PropertyKey, Realm, RealmRoot, Value, constructor_prototype, env_get, env_set,
    get_own_property, global_object, has_own_property, new_object_data, object_get_key_value, object_set_key_value,
    set_internal_prototype_from_constructor, value_to_string, values_equal,
};
pub use crate::error::RealmError;
