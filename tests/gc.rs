//! Boundary scenarios for the collector and the two bounded stacks it
//! shares the runtime with, driven at the `Context` level rather than
//! through `Heap`/`CallStack` directly.

use jsrt::config::RuntimeConfig;
use jsrt::context::Context;
use jsrt::error::RuntimeError;
use jsrt::object::{Object, ObjectClass};
use jsrt::property::PropertyKey;
use jsrt::value::JsValue;

#[test]
fn call_stack_overflow_at_capacity_is_reported_not_panicked() {
    let config = RuntimeConfig {
        call_stack_capacity: 4,
        ..RuntimeConfig::default()
    };
    let mut ctx = Context::new(config);
    for _ in 0..4 {
        ctx.push(JsValue::Number(1)).unwrap();
    }
    assert!(matches!(
        ctx.push(JsValue::Number(2)),
        Err(RuntimeError::CallStackOverflow { .. })
    ));
}

#[test]
fn exception_stack_overflow_at_capacity_is_reported() {
    let config = RuntimeConfig {
        exception_stack_capacity: 2,
        ..RuntimeConfig::default()
    };
    let mut ctx = Context::new(config);
    ctx.push_exception().unwrap();
    ctx.push_exception().unwrap();
    assert!(matches!(
        ctx.push_exception(),
        Err(RuntimeError::ExceptionStackOverflow { .. })
    ));
}

#[test]
fn exception_stack_underflow_on_an_unmatched_pop_is_reported() {
    let mut ctx = Context::default();
    assert!(matches!(
        ctx.pop_exception(),
        Err(RuntimeError::ExceptionStackUnderflow)
    ));
}

#[test]
fn gc_mark_stack_overflow_at_depth_is_reported_not_panicked() {
    let config = RuntimeConfig {
        gc_mark_stack_depth: 4,
        ..RuntimeConfig::default()
    };
    let mut ctx = Context::new(config);
    let mut roots = Vec::new();
    for _ in 0..16 {
        roots.push(ctx.object());
    }
    let err = ctx.gc_run(&roots).unwrap_err();
    assert!(matches!(err, RuntimeError::GcMarkStackOverflow { depth: 4 }));
}

/// `gc_should_run` stays false until the live set both passes the
/// threshold and has more than doubled since the last sweep. Checked
/// against a bare `Heap` rather than a bootstrapped `Context`, since
/// bootstrap alone allocates more objects than a small threshold would
/// allow.
#[test]
fn gc_should_run_respects_the_threshold_and_doubling_heuristic() {
    let mut heap = jsrt::gc::Heap::new();
    let threshold = 8;
    assert!(!heap.should_run(threshold));
    let mut roots = Vec::new();
    for _ in 0..20 {
        roots.push(heap.allocate(Object::new(ObjectClass::Plain, None)));
    }
    assert!(heap.should_run(threshold));
    heap.run(&roots, 64).unwrap();
    assert!(!heap.should_run(threshold));
}

/// An object reachable only through another object's own property survives
/// a sweep; once that property is cleared by being overwritten, the child
/// is reclaimed on the next pass.
#[test]
fn a_child_referenced_only_through_a_property_is_collected_once_the_reference_is_dropped() {
    let mut ctx = Context::default();
    let parent = ctx.object();
    let child = ctx.object();
    ctx.set_property(&parent, PropertyKey::from("child"), child.clone()).unwrap();
    let live_with_child = ctx.heap().live_count();
    ctx.gc_run(&[parent.clone()]).unwrap();
    assert_eq!(ctx.heap().live_count(), live_with_child);

    ctx.set_property(&parent, PropertyKey::from("child"), JsValue::Undefined).unwrap();
    ctx.gc_run(&[parent]).unwrap();
    assert_eq!(ctx.heap().live_count(), live_with_child - 1);
}
