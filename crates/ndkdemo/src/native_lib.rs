// ndkdemo: native functions behind `com.example.demo.NativeLib`
//
// Plain Rust so the host driver and tests can call them without a JVM.
// The JNI exports in `android_jni` are thin wrappers around these.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const HELLO_MESSAGE: &str = "Hello from Rust";

const LANGUAGE: &str = "Rust 2024";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// CPU architecture the library was compiled for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Architecture {
    Arm64,
    Arm,
    X86_64,
    X86,
    Unknown,
}

impl Architecture {
    pub const fn current() -> Self {
        if cfg!(target_arch = "aarch64") {
            Architecture::Arm64
        } else if cfg!(target_arch = "arm") {
            Architecture::Arm
        } else if cfg!(target_arch = "x86_64") {
            Architecture::X86_64
        } else if cfg!(target_arch = "x86") {
            Architecture::X86
        } else {
            Architecture::Unknown
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Architecture::Arm64 => "ARM64 (aarch64)",
            Architecture::Arm => "ARM (32-bit)",
            Architecture::X86_64 => "x86_64",
            Architecture::X86 => "x86 (32-bit)",
            Architecture::Unknown => "Unknown",
        }
    }
}

/// Report returned by `getSystemInfo`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemInfo {
    pub language: String,
    pub architecture: Architecture,
}

impl SystemInfo {
    pub fn current() -> Self {
        Self {
            language: LANGUAGE.to_string(),
            architecture: Architecture::current(),
        }
    }
}

impl fmt::Display for SystemInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "NDK Demo - System Info:")?;
        writeln!(f, "- Language: {}", self.language)?;
        write!(f, "- Architecture: {}", self.architecture.label())
    }
}

// ---------------------------------------------------------------------------
// Entry points
// ---------------------------------------------------------------------------

pub fn hello_from_native() -> String {
    log::info!("helloFromNative called");
    HELLO_MESSAGE.to_string()
}

pub fn system_info() -> String {
    log::info!("System info requested");
    SystemInfo::current().to_string()
}
