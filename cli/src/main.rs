use protochain::*;

#[derive(clap::Parser)]
#[command(name = "protochain", version, about = "Prototype-chain delegation demo")]
struct Cli {
    /// Extra delegation links to thread onto the demo instance before walking
    #[arg(short, long, default_value_t = 0)]
    depth: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    // Initialize logger (controlled by RUST_LOG)
    env_logger::init();

    let cli = <Cli as clap::Parser>::parse();

    let realm = Realm::new()?;
    realm.mutate(|mc, root| -> Result<(), RealmError> {
        let env = &root.global_env;
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        // const arr = []
        let arr = new_array(mc, env)?;

        // Optionally splice extra plain links between the instance and
        // Array.prototype so the walk has something to chew on.
        let mut head = prototype_of(&arr);
        for _ in 0..cli.depth {
            let link = new_object_data(mc);
            link.borrow_mut(mc).prototype = head;
            head = Some(link);
        }
        set_prototype_of(mc, &arr, head)?;

        // Array.prototype.isPrototypeOf(arr)
        let array_proto =
            constructor_prototype(env, "Array").ok_or_else(|| RealmError::GlobalNotFound { name: "Array".to_string() })?;
        let subject = Value::Object(arr);
        write_value(&mut out, &Value::Boolean(is_prototype_of(&array_proto, &subject)))?;

        // arr instanceof Array, walked by hand
        let array_ctor = global_object(env, "Array").ok_or_else(|| RealmError::GlobalNotFound { name: "Array".to_string() })?;
        write_value(&mut out, &Value::Boolean(has_instance(&array_ctor, &subject)))?;

        Ok(())
    })?;

    Ok(())
}
