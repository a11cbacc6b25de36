#[macro_use]
extern crate criterion;

use criterion::black_box;
use criterion::Criterion;

use jsrt::config::RuntimeConfig;
use jsrt::context::Context;
use jsrt::object::{Object, ObjectClass};
use jsrt::property::PropertyKey;
use jsrt::value::JsValue;

/// The scenario `spec.md` §8 names for the collector: 100,000 short-lived
/// objects allocated while one object is held fixed, then a single
/// collection pass.
fn gc_sweep_with_one_held_root(c: &mut Criterion) {
    c.bench_function("gc_run (100,000 garbage, 1 held root)", move |b| {
        b.iter_batched(
            || {
                let mut ctx = Context::new(RuntimeConfig::default());
                let fixed = ctx.object();
                ctx.set_property(&fixed, PropertyKey::from("alive"), JsValue::Boolean(true))
                    .unwrap();
                for _ in 0..100_000 {
                    ctx.heap_mut().allocate(Object::new(ObjectClass::Plain, None));
                }
                (ctx, fixed)
            },
            |(mut ctx, fixed)| {
                black_box(ctx.gc_run(&[fixed]).unwrap());
            },
            criterion::BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, gc_sweep_with_one_held_root);
criterion_main!(benches);
