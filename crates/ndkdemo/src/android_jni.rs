use jni::{
    JNIEnv,
    objects::JObject,
    sys::{self, JNI_VERSION_1_6, jint, jstring},
};
use std::ffi::c_void;
use std::sync::Once;

use crate::native_lib;

// Static initialization for logging
static INIT: Once = Once::new();

const LOG_TAG: &str = "NativeLib";

#[cfg(feature = "debug-logs")]
const MAX_LEVEL: log::LevelFilter = log::LevelFilter::Debug;
#[cfg(not(feature = "debug-logs"))]
const MAX_LEVEL: log::LevelFilter = log::LevelFilter::Info;

/// Initialize logging and panic hook for Android
fn init_logging() {
    INIT.call_once(|| {
        android_logger::init_once(
            android_logger::Config::default()
                .with_max_level(MAX_LEVEL)
                .with_tag(LOG_TAG),
        );

        std::panic::set_hook(Box::new(|info| {
            let payload = info
                .payload()
                .downcast_ref::<&str>()
                .map(|s| s.to_string())
                .or_else(|| info.payload().downcast_ref::<String>().cloned())
                .unwrap_or_else(|| "Unknown panic".to_string());

            let location = info
                .location()
                .map(|l| format!("{}:{}:{}", l.file(), l.line(), l.column()))
                .unwrap_or_else(|| "unknown".to_string());

            log::error!("PANIC at {}: {}", location, payload);
        }));
    });
}

/// Convert a Rust string into a local `jstring`
///
/// Returns null if the JVM could not allocate the string; the Java
/// exception stays pending and is raised when the native method returns.
fn to_jstring(env: &mut JNIEnv, value: &str, method: &str) -> jstring {
    match env.new_string(value) {
        Ok(s) => s.into_raw(),
        Err(e) => {
            log::error!("{}: failed to create Java string: {:?}", method, e);
            JObject::null().into_raw()
        }
    }
}

/// Called by the VM from `System.loadLibrary("ndkdemo")`
#[unsafe(no_mangle)]
pub extern "system" fn JNI_OnLoad(_vm: *mut sys::JavaVM, _reserved: *mut c_void) -> jint {
    init_logging();
    log::info!("ndkdemo loaded");
    JNI_VERSION_1_6
}

/// `NativeLib.helloFromNative(): String`
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_example_demo_NativeLib_helloFromNative(
    mut env: JNIEnv,
    _this: JObject,
) -> jstring {
    init_logging();
    let hello = native_lib::hello_from_native();
    to_jstring(&mut env, &hello, "helloFromNative")
}

/// `NativeLib.getSystemInfo(): String`
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_example_demo_NativeLib_getSystemInfo(
    mut env: JNIEnv,
    _this: JObject,
) -> jstring {
    init_logging();
    let info = native_lib::system_info();
    to_jstring(&mut env, &info, "getSystemInfo")
}
