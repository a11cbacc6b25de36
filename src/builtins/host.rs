//! Host I/O bindings: `readFileSync`, `writeFileSync`, `system`. The one
//! demonstrative set of host APIs `spec.md` §1 scopes in, kept to exactly
//! those three so the built-in surface stays a thin wrapper over
//! `std::fs`/`std::process` rather than growing its own I/O layer.

use crate::context::Context;
use crate::string::JsString;
use crate::value::{JsResult, JsValue};

pub fn install(ctx: &mut Context) {
    let read = ctx.create_native_function(read_file_sync);
    let write = ctx.create_native_function(write_file_sync);
    let system_fn = ctx.create_native_function(system);
    ctx.set_global_binding("readFileSync", JsValue::Object(Some(read)));
    ctx.set_global_binding("writeFileSync", JsValue::Object(Some(write)));
    ctx.set_global_binding("system", JsValue::Object(Some(system_fn)));
}

pub fn read_file_sync(_this: &JsValue, args: &[JsValue], ctx: &mut Context) -> JsResult<JsValue> {
    let path = ctx.to_string(args.first().unwrap_or(&JsValue::Undefined))?;
    match std::fs::read(path.to_string()) {
        Ok(bytes) => Ok(JsValue::String(JsString::from_owned_bytes(bytes))),
        Err(e) => Err(ctx.type_error(format!("readFileSync: {e}"))),
    }
}

pub fn write_file_sync(_this: &JsValue, args: &[JsValue], ctx: &mut Context) -> JsResult<JsValue> {
    let path = ctx.to_string(args.first().unwrap_or(&JsValue::Undefined))?;
    let contents = ctx.to_string(args.get(1).unwrap_or(&JsValue::Undefined))?;
    match std::fs::write(path.to_string(), contents.as_bytes()) {
        Ok(()) => Ok(JsValue::Undefined),
        Err(e) => Err(ctx.type_error(format!("writeFileSync: {e}"))),
    }
}

/// `system(cmd)`: runs `cmd` through the host shell and returns its exit
/// code.
pub fn system(_this: &JsValue, args: &[JsValue], ctx: &mut Context) -> JsResult<JsValue> {
    let cmd = ctx.to_string(args.first().unwrap_or(&JsValue::Undefined))?;
    match std::process::Command::new("sh").arg("-c").arg(cmd.to_string()).status() {
        Ok(status) => Ok(JsValue::Number(status.code().unwrap_or(-1))),
        Err(e) => Err(ctx.type_error(format!("system: {e}"))),
    }
}
