// ndkdemo-host: drive the NDK demo screen from a desktop shell
//
// Links the native library in-process and replays button taps against the
// screen model, printing toasts and the displayed text.

use anyhow::Result;
use clap::ValueEnum;
use std::fmt::Write as _;

use ndkdemo::{Control, MainScreen, NativeBridge, ScreenSnapshot};

/// Button names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TapArg {
    /// Basic native call (btnBasicNative)
    Basic,
    /// System info (btnSystemInfo)
    SystemInfo,
}

impl From<TapArg> for Control {
    fn from(arg: TapArg) -> Self {
        match arg {
            TapArg::Basic => Control::BasicNative,
            TapArg::SystemInfo => Control::SystemInfo,
        }
    }
}

/// Install the tracing subscriber. `RUST_LOG` wins unless `verbose` is set.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Apply `taps` to a fresh screen and render the result
///
/// Plain output lists one `[toast] ...` line per tap followed by the final
/// text; JSON output is a pretty-printed `ScreenSnapshot`.
pub fn render_taps<B: NativeBridge>(bridge: B, taps: &[TapArg], json: bool) -> Result<String> {
    let controls: Vec<Control> = taps.iter().copied().map(Control::from).collect();
    tracing::info!("replaying {} tap(s)", controls.len());

    if json {
        let snapshot = ScreenSnapshot::capture(bridge, &controls);
        return Ok(serde_json::to_string_pretty(&snapshot)?);
    }

    let mut screen = MainScreen::create(bridge);
    let mut out = String::new();
    for control in controls {
        let toast = screen.tap(control);
        writeln!(out, "[toast] {}", toast.message)?;
    }
    out.push_str(screen.text());
    Ok(out)
}
