//! End-to-end scenarios driven entirely through the public ABI, the way
//! compiled code would exercise it, with no parser in front.

use jsrt::config::RuntimeConfig;
use jsrt::context::Context;
use jsrt::object::{Object, ObjectClass};
use jsrt::property::PropertyKey;
use jsrt::value::JsValue;

fn empty_body(_this: &JsValue, _args: &[JsValue], _ctx: &mut Context) -> jsrt::value::JsResult<JsValue> {
    Ok(JsValue::Undefined)
}

fn native(ctx: &mut Context, body: jsrt::object::NativeFunction) -> JsValue {
    JsValue::Object(Some(ctx.create_native_function(body)))
}

/// `function F(){} F.prototype.x = 7; var o = new F(); o.x === 7`.
#[test]
fn prototype_property_is_visible_on_a_new_instance() {
    let mut ctx = Context::default();
    let f = native(&mut ctx, empty_body);
    let prototype = ctx.get_property(&f, &PropertyKey::from("prototype")).unwrap();
    ctx.set_property(&prototype, PropertyKey::from("x"), JsValue::Number(7))
        .unwrap();
    let o = ctx.invoke_constructor(f, &[]).unwrap();
    let x = ctx.get_property(&o, &PropertyKey::from("x")).unwrap();
    assert!(matches!(x, JsValue::Number(7)));
}

/// `1 + "2" === "12"`, `"1" + 2 === "12"`, `1 + 2 === 3`.
#[test]
fn add_coerces_to_string_concatenation_only_when_a_side_is_a_string() {
    let mut ctx = Context::default();
    let a = ctx.add(&JsValue::Number(1), &JsValue::from("2")).unwrap();
    let b = ctx.add(&JsValue::from("1"), &JsValue::Number(2)).unwrap();
    let c = ctx.add(&JsValue::Number(1), &JsValue::Number(2)).unwrap();
    match a {
        JsValue::String(s) => assert_eq!(s.to_string(), "12"),
        other => panic!("expected a string, got {:?}", other),
    }
    match b {
        JsValue::String(s) => assert_eq!(s.to_string(), "12"),
        other => panic!("expected a string, got {:?}", other),
    }
    assert!(matches!(c, JsValue::Number(3)));
}

/// `function A(){} function B(){} B.prototype = new A(); var b = new B();
/// b instanceof A === true; b instanceof B === true`.
#[test]
fn instanceof_follows_a_reassigned_prototype_chain() {
    let mut ctx = Context::default();
    let a = native(&mut ctx, empty_body);
    let b = native(&mut ctx, empty_body);
    let a_instance = ctx.invoke_constructor(a.clone(), &[]).unwrap();
    ctx.set_property(&b, PropertyKey::from("prototype"), a_instance).unwrap();
    let b_instance = ctx.invoke_constructor(b.clone(), &[]).unwrap();
    assert!(matches!(ctx.instance_of(&b_instance, &a).unwrap(), JsValue::Boolean(true)));
    assert!(matches!(ctx.instance_of(&b_instance, &b).unwrap(), JsValue::Boolean(true)));
}

/// Reading an unbound variable raises a catchable `ReferenceError` naming
/// the variable, rather than aborting the process.
#[test]
fn reading_an_unbound_variable_raises_a_catchable_reference_error() {
    let mut ctx = Context::default();
    let scope = ctx.new_binding(None);
    let err = ctx.get_variable(scope, &PropertyKey::from("x")).unwrap_err();
    assert_eq!(ctx.type_of(&err), "object");
    let ctor = ctx.global_binding("ReferenceError").unwrap();
    assert!(matches!(ctx.instance_of(&err, &ctor).unwrap(), JsValue::Boolean(true)));
    let message = ctx.get_property(&err, &PropertyKey::from("message")).unwrap();
    match message {
        JsValue::String(s) => assert!(s.to_string().contains('x')),
        other => panic!("expected a string message, got {:?}", other),
    }
}

/// `function f(a,b,c){ return a+b+c; } f.apply(null, [1,2,3]) === 6`.
#[test]
fn apply_spreads_an_array_likes_elements_as_positional_arguments() {
    fn sum(_this: &JsValue, args: &[JsValue], ctx: &mut Context) -> jsrt::value::JsResult<JsValue> {
        let mut total = JsValue::Number(0);
        for arg in args {
            total = ctx.add(&total, arg)?;
        }
        Ok(total)
    }
    let mut ctx = Context::default();
    let f = native(&mut ctx, sum);
    let array_ctor = ctx.global_binding("Array").unwrap();
    let args_array = ctx
        .invoke_constructor(array_ctor, &[JsValue::Number(1), JsValue::Number(2), JsValue::Number(3)])
        .unwrap();
    let result = ctx
        .call_method(&f, &PropertyKey::from("apply"), &[JsValue::null(), args_array])
        .unwrap();
    assert!(matches!(result, JsValue::Number(6)));
}

/// 100,000 short-lived objects are reclaimed while one fixed root survives
/// a collection pass with its properties intact.
#[test]
fn a_fixed_root_survives_collection_while_everything_else_is_swept() {
    let mut ctx = Context::new(RuntimeConfig::default());
    let fixed = ctx.object();
    ctx.set_property(&fixed, PropertyKey::from("alive"), JsValue::Boolean(true))
        .unwrap();
    let before = ctx.heap().live_count();
    for _ in 0..100_000 {
        ctx.heap_mut().allocate(Object::new(ObjectClass::Plain, None));
    }
    assert_eq!(ctx.heap().live_count(), before + 100_000);
    ctx.gc_run(&[fixed.clone()]).unwrap();
    assert_eq!(ctx.heap().live_count(), before);
    let alive = ctx.get_property(&fixed, &PropertyKey::from("alive")).unwrap();
    assert!(matches!(alive, JsValue::Boolean(true)));
}

/// `console.log`/`console.error` are callable and do not themselves throw;
/// `argv` is installed as a global `Array` mirroring the host arguments.
#[test]
fn console_and_argv_are_installed_and_usable() {
    let mut ctx = Context::default();
    jsrt::builtins::install_argv(&mut ctx, &["a", "b"]);
    let argv = ctx.global_binding("argv").unwrap();
    let length = ctx.get_property(&argv, &PropertyKey::from("length")).unwrap();
    assert!(matches!(length, JsValue::Number(2)));
    let first = ctx.get_property(&argv, &PropertyKey::from("0")).unwrap();
    match first {
        JsValue::String(s) => assert_eq!(s.to_string(), "a"),
        other => panic!("expected a string, got {:?}", other),
    }
    let console = ctx.global_binding("console").unwrap();
    let logged = ctx.call_method(&console, &PropertyKey::from("log"), &[JsValue::from("hi")]);
    assert!(logged.is_ok());
}

/// Calling a non-function throws a catchable `TypeError`; it does not
/// abort the process the way a `RuntimeError` would.
#[test]
fn calling_a_non_function_is_a_catchable_type_error_not_a_fatal_condition() {
    let mut ctx = Context::default();
    let err = ctx.call_value(&JsValue::Number(3), JsValue::Undefined, &[]).unwrap_err();
    let ctor = ctx.global_binding("TypeError").unwrap();
    assert!(matches!(ctx.instance_of(&err, &ctor).unwrap(), JsValue::Boolean(true)));
}
