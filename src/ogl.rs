use std::{
    ffi::{c_void, CStr},
    ptr,
};

use log::{debug, error, info, warn};

/// Installs the OpenGL debug-output callback. A plain 3.3 context is not
/// required to expose the entry point; without it the demo runs undecorated.
pub fn init_debug() {
    if !gl::DebugMessageCallback::is_loaded() {
        debug!("glDebugMessageCallback is unavailable in this context");
        return;
    }

    unsafe {
        gl::Enable(gl::DEBUG_OUTPUT);
        gl::Enable(gl::DEBUG_OUTPUT_SYNCHRONOUS);
        gl::DebugMessageCallback(Some(gl_debug_callback), ptr::null());
        gl::DebugMessageControl(
            gl::DONT_CARE,
            gl::DONT_CARE,
            gl::DONT_CARE,
            0,
            ptr::null(),
            gl::TRUE,
        );
    };
}

/// Logs the version and renderer strings of the current context
pub fn log_context_info() {
    let version = gl_string(gl::VERSION);
    let renderer = gl_string(gl::RENDERER);
    info!("OpenGL {version} on {renderer}");
}

fn gl_string(name: u32) -> String {
    unsafe {
        let s = gl::GetString(name);
        if s.is_null() {
            return "<unknown>".to_owned();
        }

        CStr::from_ptr(s as _).to_string_lossy().into_owned()
    }
}

extern "system" fn gl_debug_callback(
    _src: u32,
    _typ: u32,
    id: u32,
    severity: u32,
    _len: i32,
    msg: *const i8,
    _user_param: *mut c_void,
) {
    // Buffer creation on NVidia cards
    if id == 131185 {
        return;
    }

    let msg = unsafe { CStr::from_ptr(msg) };
    let msg = msg.to_string_lossy();

    match severity {
        gl::DEBUG_SEVERITY_NOTIFICATION => debug!("OpenGL: {msg}"),
        gl::DEBUG_SEVERITY_LOW => info!("OpenGL: {msg}"),
        gl::DEBUG_SEVERITY_MEDIUM => warn!("OpenGL: {msg}"),
        gl::DEBUG_SEVERITY_HIGH => error!("OpenGL: {msg}"),
        _ => unreachable!("Unknown severity in glDebugCallback: '{}'", severity),
    }
}
