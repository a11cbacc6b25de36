//! The runtime environment (ambient; ties components A-I together).
//!
//! `spec.md` §9's "Global mutable state" design note resolves to threading
//! this struct explicitly through every public entry point instead of
//! reaching for process-wide statics, exactly so that (unlike the original)
//! several independent runtimes can coexist, each on its own host thread.

use crate::builtins;
use crate::config::RuntimeConfig;
use crate::error::RuntimeResult;
use crate::exception::ExceptionStack;
use crate::gc::{Heap, ObjectId};
use crate::object::{FunctionData, FunctionKind, Object, ObjectClass};
use crate::property::PropertyKey;
use crate::stack::CallStack;
use crate::string::JsString;
use crate::value::{JsResult, JsValue};

/// The primary way to interact with the runtime. Each `Context` owns its
/// own heap, call stack, exception stack and global object; constructing
/// a second `Context` gives a second, wholly independent runtime.
pub struct Context {
    heap: Heap,
    call_stack: CallStack,
    exception_stack: ExceptionStack,
    config: RuntimeConfig,
    pub(crate) global: ObjectId,
    pub(crate) object_prototype: ObjectId,
    pub(crate) function_prototype: ObjectId,
}

impl Context {
    /// Builds a fresh runtime and installs the built-in surface (component
    /// I). No collection runs during bootstrap: every object allocated
    /// here is reachable from `global` by the time `new` returns, so
    /// nothing is at risk of being swept even if a caller triggers a GC
    /// pass immediately afterwards.
    pub fn new(config: RuntimeConfig) -> Self {
        let mut heap = Heap::new();
        let global = heap.allocate(Object::new(ObjectClass::Plain, None));
        let mut ctx = Self {
            heap,
            call_stack: CallStack::new(config.call_stack_capacity),
            exception_stack: ExceptionStack::new(config.exception_stack_capacity),
            config,
            global,
            object_prototype: global,
            function_prototype: global,
        };
        builtins::install(&mut ctx);
        ctx
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    #[inline]
    pub fn heap(&self) -> &Heap {
        &self.heap
    }

    #[inline]
    pub fn heap_mut(&mut self) -> &mut Heap {
        &mut self.heap
    }

    pub fn call_stack(&self) -> &CallStack {
        &self.call_stack
    }

    pub fn call_stack_mut(&mut self) -> &mut CallStack {
        &mut self.call_stack
    }

    pub fn exception_stack(&self) -> &ExceptionStack {
        &self.exception_stack
    }

    pub fn exception_stack_mut(&mut self) -> &mut ExceptionStack {
        &mut self.exception_stack
    }

    pub fn global_object_id(&self) -> ObjectId {
        self.global
    }

    pub fn global_object(&self) -> JsValue {
        JsValue::Object(Some(self.global))
    }

    pub fn object_prototype_id(&self) -> ObjectId {
        self.object_prototype
    }

    pub fn function_prototype_id(&self) -> ObjectId {
        self.function_prototype
    }

    /// Looks up an own property of the global object by name, the
    /// bootstrap-time equivalent of `js_get_global` in the original.
    pub fn global_binding(&self, name: &str) -> Option<JsValue> {
        self.heap
            .get(self.global)
            .get_own(&PropertyKey::from(name))
            .cloned()
    }

    /// Binds `value` as an own property of the global object.
    pub fn set_global_binding(&mut self, name: &str, value: JsValue) {
        self.heap.get_mut(self.global).set_own_str(name, value);
    }

    // -- Value constructors (spec.md §6) --------------------------------

    pub fn number(n: i32) -> JsValue {
        JsValue::Number(n)
    }

    pub fn string_from_bytes(bytes: &[u8]) -> JsValue {
        JsValue::String(JsString::from_bytes(bytes))
    }

    pub fn boolean(b: bool) -> JsValue {
        JsValue::Boolean(b)
    }

    pub fn undefined() -> JsValue {
        JsValue::Undefined
    }

    pub fn null() -> JsValue {
        JsValue::null()
    }

    /// A fresh plain object whose prototype is `Object.prototype`.
    pub fn object(&mut self) -> JsValue {
        let id = self
            .heap
            .allocate(Object::new(ObjectClass::Plain, Some(self.object_prototype)));
        JsValue::Object(Some(id))
    }

    /// Constructs a function object. `binding` is the closure's captured
    /// lexical environment, itself an object (`None` for a function that
    /// closes over nothing, e.g. every native built-in).
    pub fn function(&mut self, kind: FunctionKind, binding: Option<ObjectId>) -> JsValue {
        let id = self.heap.allocate(Object::new(
            ObjectClass::Function(FunctionData { kind, binding }),
            Some(self.function_prototype),
        ));
        JsValue::Object(Some(id))
    }

    /// Constructs a native function object with the "fresh instances
    /// prototype, with a `constructor` back-link" cycle every function
    /// object gets in the original (`js_construct_function_object`),
    /// regardless of whether this particular function is ever used as a
    /// constructor.
    pub fn create_native_function(&mut self, native: crate::object::NativeFunction) -> ObjectId {
        let instances_prototype = self
            .heap
            .allocate(Object::new(ObjectClass::Plain, Some(self.object_prototype)));
        let function_object = self.heap.allocate(Object::new(
            ObjectClass::Function(FunctionData {
                kind: FunctionKind::Native(native),
                binding: None,
            }),
            Some(self.function_prototype),
        ));
        self.heap
            .get_mut(instances_prototype)
            .add_own_str("constructor", JsValue::Object(Some(function_object)));
        self.heap
            .get_mut(function_object)
            .add_own_str("prototype", JsValue::Object(Some(instances_prototype)));
        function_object
    }

    // -- Operators (spec.md §6) ------------------------------------------

    pub fn add(&mut self, a: &JsValue, b: &JsValue) -> JsResult<JsValue> {
        crate::value::operations::add(self, a, b)
    }

    pub fn sub(&mut self, a: &JsValue, b: &JsValue) -> JsResult<JsValue> {
        crate::value::operations::sub(self, a, b)
    }

    pub fn mult(&mut self, a: &JsValue, b: &JsValue) -> JsResult<JsValue> {
        crate::value::operations::mult(self, a, b)
    }

    pub fn lt(&mut self, a: &JsValue, b: &JsValue) -> JsResult<JsValue> {
        crate::value::operations::lt(self, a, b)
    }

    pub fn gt(&mut self, a: &JsValue, b: &JsValue) -> JsResult<JsValue> {
        crate::value::operations::gt(self, a, b)
    }

    pub fn eq(&self, a: &JsValue, b: &JsValue) -> JsValue {
        crate::value::operations::eq(a, b)
    }

    pub fn neq(&self, a: &JsValue, b: &JsValue) -> JsValue {
        crate::value::operations::neq(a, b)
    }

    pub fn strict_eq(&self, a: &JsValue, b: &JsValue) -> bool {
        crate::value::equality::strict_eq(a, b)
    }

    pub fn strict_neq(&self, a: &JsValue, b: &JsValue) -> bool {
        !crate::value::equality::strict_eq(a, b)
    }

    pub fn binary_and(&mut self, a: &JsValue, b: &JsValue) -> JsResult<JsValue> {
        crate::value::operations::bitwise_and(self, a, b)
    }

    pub fn binary_or(&mut self, a: &JsValue, b: &JsValue) -> JsResult<JsValue> {
        crate::value::operations::bitwise_or(self, a, b)
    }

    pub fn binary_xor(&mut self, a: &JsValue, b: &JsValue) -> JsResult<JsValue> {
        crate::value::operations::bitwise_xor(self, a, b)
    }

    /// `and`: evaluates `right` only if `left` is truthy.
    pub fn logical_and(
        &mut self,
        left: JsValue,
        right: impl FnOnce(&mut Self) -> JsResult<JsValue>,
    ) -> JsResult<JsValue> {
        if crate::value::conversions::to_boolean(&left) {
            right(self)
        } else {
            Ok(left)
        }
    }

    /// `or`: evaluates `right` only if `left` is falsy.
    pub fn logical_or(
        &mut self,
        left: JsValue,
        right: impl FnOnce(&mut Self) -> JsResult<JsValue>,
    ) -> JsResult<JsValue> {
        if crate::value::conversions::to_boolean(&left) {
            Ok(left)
        } else {
            right(self)
        }
    }

    pub fn type_of(&self, value: &JsValue) -> &'static str {
        crate::value::operations::type_of(self, value)
    }

    pub fn instance_of(&mut self, left: &JsValue, right: &JsValue) -> JsResult<JsValue> {
        crate::value::operations::instance_of(self, left, right)
    }

    // -- Conversions -------------------------------------------------------

    pub fn to_string(&mut self, value: &JsValue) -> JsResult<JsString> {
        crate::value::conversions::to_string(self, value)
    }

    pub fn to_number(&mut self, value: &JsValue) -> JsResult<i32> {
        crate::value::conversions::to_number(self, value)
    }

    pub fn to_boolean(&self, value: &JsValue) -> bool {
        crate::value::conversions::to_boolean(value)
    }

    pub fn to_object(&mut self, value: &JsValue) -> JsResult<JsValue> {
        crate::value::conversions::to_object(self, value)
    }

    // -- Property access (component B) --------------------------------

    pub fn get_property(&mut self, value: &JsValue, key: &PropertyKey) -> JsResult<JsValue> {
        crate::object::get_property(self, value, key)
    }

    pub fn set_property(
        &mut self,
        value: &JsValue,
        key: PropertyKey,
        new_value: JsValue,
    ) -> JsResult<()> {
        crate::object::set_property(self, value, key, new_value)
    }

    // -- Dispatch (component E) -----------------------------------------

    pub fn call(&mut self, callee: ObjectId, this: JsValue, args: &[JsValue]) -> JsResult<JsValue> {
        let _timer = crate::profiler::Profiler::global().start_event("call", "dispatch");
        crate::dispatch::call(self, &JsValue::Object(Some(callee)), this, args)
    }

    pub fn call_value(&mut self, callee: &JsValue, this: JsValue, args: &[JsValue]) -> JsResult<JsValue> {
        let _timer = crate::profiler::Profiler::global().start_event("call", "dispatch");
        crate::dispatch::call(self, callee, this, args)
    }

    pub fn call_method(
        &mut self,
        obj: &JsValue,
        key: &PropertyKey,
        args: &[JsValue],
    ) -> JsResult<JsValue> {
        crate::dispatch::call_method(self, obj, key, args)
    }

    pub fn invoke_constructor(&mut self, callee: JsValue, args: &[JsValue]) -> JsResult<JsValue> {
        let _timer = crate::profiler::Profiler::global().start_event("invoke_constructor", "dispatch");
        crate::dispatch::invoke_constructor(self, &callee, args)
    }

    // -- Call stack (component D) -----------------------------------------

    pub fn push(&mut self, value: JsValue) -> RuntimeResult<()> {
        self.call_stack.push(value)
    }

    pub fn pop(&mut self) -> Option<JsValue> {
        self.call_stack.pop()
    }

    pub fn check_overflow(&self, n: usize) -> RuntimeResult<()> {
        self.call_stack.check_overflow(n)
    }

    // -- Variable binding (component G) -----------------------------------

    pub fn new_binding(&mut self, parent: Option<ObjectId>) -> ObjectId {
        crate::environment::new_binding(self, parent)
    }

    pub fn assign_variable(&mut self, binding: ObjectId, name: &PropertyKey, value: JsValue) {
        crate::environment::assign(self, binding, name, value)
    }

    pub fn get_variable(&mut self, binding: ObjectId, name: &PropertyKey) -> JsResult<JsValue> {
        crate::environment::read(self, binding, name)
    }

    // -- Exceptions (component F) -----------------------------------------

    pub fn push_exception(&mut self) -> RuntimeResult<()> {
        self.exception_stack.push_exception()
    }

    pub fn pop_exception(&mut self) -> RuntimeResult<()> {
        self.exception_stack.pop_exception()
    }

    pub fn last_exception(&self) -> Option<&JsValue> {
        self.exception_stack.last_exception()
    }

    pub fn throw(&mut self, value: JsValue) {
        self.exception_stack.throw(value)
    }

    /// Constructs (but does not throw) a `TypeError` carrying `message`.
    pub fn type_error(&mut self, message: impl Into<String>) -> JsValue {
        let ctor = self
            .global_binding("TypeError")
            .expect("TypeError is always bootstrapped");
        self.invoke_constructor(ctor, &[JsValue::from(message.into().as_str())])
            .expect("constructing a TypeError cannot itself throw")
    }

    /// Constructs (but does not throw) a `ReferenceError` carrying
    /// `message`.
    pub fn reference_error(&mut self, message: impl Into<String>) -> JsValue {
        let ctor = self
            .global_binding("ReferenceError")
            .expect("ReferenceError is always bootstrapped");
        self.invoke_constructor(ctor, &[JsValue::from(message.into().as_str())])
            .expect("constructing a ReferenceError cannot itself throw")
    }

    // -- Garbage collector (component H) ----------------------------------

    /// `gc_should_run`: whether a collection is due, per the live-set
    /// threshold/doubling heuristic in `spec.md` §4.H.
    pub fn gc_should_run(&self) -> bool {
        self.heap.should_run(self.config.gc_threshold)
    }

    /// `gc_run(env, root1, …, NULL)`: runs one mark-sweep pass rooted at
    /// the live call-stack prefix, `extra_roots`, and the global object.
    /// The C-variadic terminated by `NULL` becomes an ordinary slice.
    pub fn gc_run(&mut self, extra_roots: &[JsValue]) -> RuntimeResult<()> {
        let _timer = crate::profiler::Profiler::global().start_event("gc_run", "gc");
        let mut roots: Vec<ObjectId> = self
            .call_stack
            .live_slice()
            .iter()
            .filter_map(JsValue::as_object_id)
            .collect();
        roots.extend(extra_roots.iter().filter_map(JsValue::as_object_id));
        roots.push(self.global);
        self.heap.run(&roots, self.config.gc_mark_stack_depth)
    }

    /// `gc_save`: roots `obj` for the duration of an extended runtime
    /// operation by handing it back to the caller to include in its next
    /// `gc_run`'s `extra_roots` — this crate has no hidden global roots
    /// list to push onto, per the Design Notes' explicit-context
    /// threading; callers simply keep holding the `JsValue` until they are
    /// done with it.
    pub fn gc_save(&self, obj: JsValue) -> JsValue {
        obj
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new(RuntimeConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_installs_object_and_prototype_cycle() {
        let ctx = Context::default();
        let object_ctor = ctx.global_binding("Object").expect("Object is bootstrapped");
        let id = object_ctor.as_object_id().unwrap();
        assert!(ctx.heap().get(id).is_callable());
    }

    #[test]
    fn every_object_is_an_instance_of_object_after_bootstrap() {
        let mut ctx = Context::default();
        let obj = ctx.object();
        let object_ctor = ctx.global_binding("Object").unwrap();
        let result = ctx.instance_of(&obj, &object_ctor).unwrap();
        assert!(matches!(result, JsValue::Boolean(true)));
    }

    #[test]
    fn global_binding_round_trips() {
        let mut ctx = Context::default();
        ctx.set_global_binding("answer", JsValue::Number(42));
        assert_eq!(ctx.global_binding("answer"), Some(JsValue::Number(42)));
    }
}
