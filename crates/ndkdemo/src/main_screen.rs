//! Entry screen model
//!
//! Mirrors the observable behavior of `MainActivity`: one text view and two
//! buttons. Each tap replaces the displayed text and yields a short toast.
//! All calls happen on the UI thread and complete synchronously.

use serde::{Deserialize, Serialize};

use crate::bridge::NativeBridge;

pub const WELCOME_TEXT: &str = "NDK Demo 应用";
pub const BASIC_NATIVE_HEADING: &str = "基础Native调用结果:";
pub const BASIC_NATIVE_TOAST: &str = "Native调用成功!";
pub const SYSTEM_INFO_TOAST: &str = "获取系统信息成功!";

/// Buttons on the entry screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    /// `btnBasicNative`
    BasicNative,
    /// `btnSystemInfo`
    SystemInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastDuration {
    Short,
    Long,
}

/// Transient notification shown after a tap
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub message: String,
    pub duration: ToastDuration,
}

impl Toast {
    pub fn short(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            duration: ToastDuration::Short,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    Idle,
}

pub struct MainScreen<B: NativeBridge> {
    bridge: B,
    /// Contents of `tvResult`
    text: String,
}

impl<B: NativeBridge> MainScreen<B> {
    /// Create the screen, showing the welcome text
    pub fn create(bridge: B) -> Self {
        log::debug!("main screen created");
        Self {
            bridge,
            text: WELCOME_TEXT.to_string(),
        }
    }

    /// Handle a click on `control`, returning the toast to show
    pub fn tap(&mut self, control: Control) -> Toast {
        log::debug!("tap: {:?}", control);
        match control {
            Control::BasicNative => {
                let message = self.bridge.hello_from_native();
                self.text = format!("{}\n{}", BASIC_NATIVE_HEADING, message);
                Toast::short(BASIC_NATIVE_TOAST)
            }
            Control::SystemInfo => {
                self.text = self.bridge.system_info();
                Toast::short(SYSTEM_INFO_TOAST)
            }
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Taps complete synchronously, so the screen is idle between calls.
    pub fn state(&self) -> ScreenState {
        ScreenState::Idle
    }

    pub fn bridge(&self) -> &B {
        &self.bridge
    }
}

/// Serializable view of the screen after a tap sequence
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenSnapshot {
    pub text: String,
    pub toasts: Vec<Toast>,
}

impl ScreenSnapshot {
    /// Create a screen on `bridge`, apply `taps` in order and capture the result
    pub fn capture<B: NativeBridge>(bridge: B, taps: &[Control]) -> Self {
        let mut screen = MainScreen::create(bridge);
        let toasts = taps.iter().map(|&control| screen.tap(control)).collect();
        Self {
            text: screen.text().to_string(),
            toasts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::InProcessBridge;
    use std::cell::Cell;

    /// Bridge whose return values change on every call
    #[derive(Default)]
    struct CountingBridge {
        calls: Cell<u32>,
    }

    impl NativeBridge for CountingBridge {
        fn hello_from_native(&self) -> String {
            self.calls.set(self.calls.get() + 1);
            format!("hello #{}", self.calls.get())
        }

        fn system_info(&self) -> String {
            self.calls.set(self.calls.get() + 1);
            format!("info #{}", self.calls.get())
        }
    }

    #[test]
    fn starts_with_welcome_text() {
        let screen = MainScreen::create(InProcessBridge);
        assert_eq!(screen.text(), WELCOME_TEXT);
        assert_eq!(screen.state(), ScreenState::Idle);
    }

    #[test]
    fn basic_native_shows_heading_and_message() {
        let mut screen = MainScreen::create(InProcessBridge);
        let toast = screen.tap(Control::BasicNative);
        assert_eq!(screen.text(), "基础Native调用结果:\nHello from Rust");
        assert_eq!(toast, Toast::short("Native调用成功!"));
    }

    #[test]
    fn system_info_shows_bridge_value() {
        let mut screen = MainScreen::create(InProcessBridge);
        let toast = screen.tap(Control::SystemInfo);
        assert_eq!(screen.text(), InProcessBridge.system_info());
        assert_eq!(toast.message, SYSTEM_INFO_TOAST);
        assert_eq!(toast.duration, ToastDuration::Short);
    }

    #[test]
    fn text_tracks_current_bridge_value() {
        let mut screen = MainScreen::create(CountingBridge::default());
        screen.tap(Control::SystemInfo);
        assert_eq!(screen.text(), "info #1");
        screen.tap(Control::SystemInfo);
        assert_eq!(screen.text(), "info #2");
        screen.tap(Control::BasicNative);
        assert_eq!(screen.text(), "基础Native调用结果:\nhello #3");
        assert_eq!(screen.bridge().calls.get(), 3);
    }

    #[test]
    fn last_tap_wins() {
        let mut screen = MainScreen::create(InProcessBridge);
        screen.tap(Control::BasicNative);
        screen.tap(Control::SystemInfo);
        assert_eq!(screen.text(), InProcessBridge.system_info());
        screen.tap(Control::BasicNative);
        assert!(screen.text().ends_with("Hello from Rust"));
        assert_eq!(screen.state(), ScreenState::Idle);
    }

    #[test]
    fn snapshot_without_taps() {
        let snapshot = ScreenSnapshot::capture(InProcessBridge, &[]);
        assert_eq!(snapshot.text, WELCOME_TEXT);
        assert!(snapshot.toasts.is_empty());
    }

    #[test]
    fn snapshot_collects_toasts_in_order() {
        let bridge = CountingBridge::default();
        let snapshot =
            ScreenSnapshot::capture(&bridge, &[Control::BasicNative, Control::SystemInfo]);
        assert_eq!(snapshot.text, "info #2");
        let messages: Vec<_> = snapshot.toasts.iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, [BASIC_NATIVE_TOAST, SYSTEM_INFO_TOAST]);
    }

    #[test]
    fn snapshot_json_shape() {
        let snapshot = ScreenSnapshot::capture(InProcessBridge, &[Control::BasicNative]);
        let value = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(value["toasts"][0]["duration"], "short");
        assert_eq!(value["text"], "基础Native调用结果:\nHello from Rust");
    }
}
