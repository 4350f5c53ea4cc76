// ndkdemo: native library for the NDK demo app
//
// Loaded on Android via `System.loadLibrary("ndkdemo")`; also linked directly
// by ndkdemo-host to drive the screen model on the desktop.

// Native functions behind NativeLib
pub mod native_lib;

// Bridge trait used by the screen
pub mod bridge;

// Entry screen model (text view + buttons)
pub mod main_screen;

// JNI exports
#[cfg(target_os = "android")]
pub mod android_jni;

pub use bridge::{InProcessBridge, NativeBridge};
pub use main_screen::{Control, MainScreen, ScreenSnapshot, Toast};
