use criterion::{Criterion, criterion_group, criterion_main};
use protochain::*;
use std::hint::black_box;

// Micro-benchmarks for the ancestry walk over a deep delegation chain.

// Initialize logger for benchmark so `RUST_LOG` is honored.
#[ctor::ctor]
fn __init_bench_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default()).try_init();
}

fn build_deep_realm(extra_links: usize) -> Realm {
    let realm = Realm::new().unwrap();
    realm
        .mutate(|mc, root| -> Result<(), RealmError> {
            let env = &root.global_env;
            let arr = new_array(mc, env)?;
            let mut head = prototype_of(&arr);
            for _ in 0..extra_links {
                let link = new_object_data(mc);
                link.borrow_mut(mc).prototype = head;
                head = Some(link);
            }
            set_prototype_of(mc, &arr, head)?;
            env_set(mc, env, "deep", Value::Object(arr))?;
            Ok(())
        })
        .unwrap();
    realm
}

fn bench_is_prototype_of(c: &mut Criterion) {
    let realm = build_deep_realm(64);
    c.bench_function("is_prototype_of_deep_chain", |b| {
        b.iter(|| {
            realm.mutate(|_mc, root| {
                let env = &root.global_env;
                let deep = global_object(env, "deep").unwrap();
                let object_proto = constructor_prototype(env, "Object").unwrap();
                black_box(is_prototype_of(&object_proto, &Value::Object(deep)))
            })
        })
    });
}

fn bench_chain_depth(c: &mut Criterion) {
    let realm = build_deep_realm(64);
    c.bench_function("chain_depth_deep_chain", |b| {
        b.iter(|| {
            realm.mutate(|_mc, root| {
                let env = &root.global_env;
                let deep = global_object(env, "deep").unwrap();
                black_box(chain_depth(&deep))
            })
        })
    });
}

criterion_group!(benches, bench_is_prototype_of, bench_chain_depth);
criterion_main!(benches);
