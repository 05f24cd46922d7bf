use protochain::*;

#[test]
fn array_instance_is_instance_of_array_and_object() -> Result<(), RealmError> {
    let realm = Realm::new()?;
    realm.mutate(|mc, root| -> Result<(), RealmError> {
        let env = &root.global_env;
        let arr = new_array(mc, env)?;
        let subject = Value::Object(arr);

        let array_ctor = global_object(env, "Array").unwrap();
        let object_ctor = global_object(env, "Object").unwrap();

        assert!(has_instance(&array_ctor, &subject));
        assert!(has_instance(&object_ctor, &subject));
        Ok(())
    })
}

#[test]
fn plain_object_is_not_an_array_instance() -> Result<(), RealmError> {
    let realm = Realm::new()?;
    realm.mutate(|mc, root| -> Result<(), RealmError> {
        let env = &root.global_env;
        let obj = new_plain_object(mc, env)?;

        let array_ctor = global_object(env, "Array").unwrap();
        assert!(!has_instance(&array_ctor, &Value::Object(obj)));
        Ok(())
    })
}

#[test]
fn marker_owner_without_prototype_matches_nothing() -> Result<(), RealmError> {
    let realm = Realm::new()?;
    realm.mutate(|mc, root| -> Result<(), RealmError> {
        let env = &root.global_env;
        let bogus_ctor = new_plain_object(mc, env)?;
        let arr = new_array(mc, env)?;

        // No `prototype` property anywhere on the owner's chain, so the
        // marker compared against never matches.
        assert!(!has_instance(&bogus_ctor, &Value::Object(arr)));
        Ok(())
    })
}

#[test]
fn primitive_prototype_property_matches_nothing() -> Result<(), RealmError> {
    let realm = Realm::new()?;
    realm.mutate(|mc, root| -> Result<(), RealmError> {
        let env = &root.global_env;
        let bogus_ctor = new_plain_object(mc, env)?;
        object_set_key_value(mc, &bogus_ctor, "prototype", Value::Number(42.0))?;
        let arr = new_array(mc, env)?;

        assert!(!has_instance(&bogus_ctor, &Value::Object(arr)));
        Ok(())
    })
}

#[test]
fn non_object_subjects_are_never_instances() -> Result<(), RealmError> {
    let realm = Realm::new()?;
    realm.mutate(|_mc, root| {
        let env = &root.global_env;
        let object_ctor = global_object(env, "Object").unwrap();

        assert!(!has_instance(&object_ctor, &Value::Number(0.0)));
        assert!(!has_instance(&object_ctor, &Value::Null));
        assert!(!has_instance(&object_ctor, &Value::Undefined));
    });
    Ok(())
}

#[test]
fn user_defined_family_inherits_through_two_levels() -> Result<(), RealmError> {
    let realm = Realm::new()?;
    realm.mutate(|mc, root| -> Result<(), RealmError> {
        let env = &root.global_env;
        let animal_ctor = define_constructor(mc, env, "Animal", None)?;
        let animal_proto = constructor_prototype(env, "Animal").unwrap();
        let dog_ctor = define_constructor(mc, env, "Dog", Some(animal_proto))?;

        let dog = new_instance(mc, env, "Dog")?;
        let subject = Value::Object(dog);

        assert!(has_instance(&dog_ctor, &subject));
        assert!(has_instance(&animal_ctor, &subject));

        let object_ctor = global_object(env, "Object").unwrap();
        let array_ctor = global_object(env, "Array").unwrap();
        assert!(has_instance(&object_ctor, &subject));
        assert!(!has_instance(&array_ctor, &subject));

        // A sibling Animal is not a Dog
        let animal = new_instance(mc, env, "Animal")?;
        assert!(!has_instance(&dog_ctor, &Value::Object(animal)));
        Ok(())
    })
}
