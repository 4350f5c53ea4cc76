// Native bridge seam between the screen and the library.
//
// On device the screen lives in Kotlin and reaches the library over JNI.
// Off device the same calls go through `InProcessBridge`.

use crate::native_lib;

pub trait NativeBridge {
    fn hello_from_native(&self) -> String;
    fn system_info(&self) -> String;
}

/// Calls the native functions directly, without a JVM.
#[derive(Debug, Default, Clone, Copy)]
pub struct InProcessBridge;

impl NativeBridge for InProcessBridge {
    fn hello_from_native(&self) -> String {
        native_lib::hello_from_native()
    }

    fn system_info(&self) -> String {
        native_lib::system_info()
    }
}

impl<B: NativeBridge + ?Sized> NativeBridge for &B {
    fn hello_from_native(&self) -> String {
        (**self).hello_from_native()
    }

    fn system_info(&self) -> String {
        (**self).system_info()
    }
}
