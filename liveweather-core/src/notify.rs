//! Best-effort desktop notifications.
//!
//! Delivery depends on the platform and may fail for many reasons (no
//! notification daemon, headless session, missing tool). Callers go through
//! [`send_best_effort`], which never propagates a failure.

use anyhow::Result;
use std::{fmt::Debug, process::Command, time::Duration};

use crate::model::{Reading, WeatherResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub timeout: Duration,
}

impl Notification {
    pub fn weather_update(name: &str, temperature: Option<f64>, description: &str) -> Self {
        Self {
            title: format!("Weather Update: {name}"),
            message: format!("{description}, {}°C", Reading(temperature)),
            timeout: Duration::from_secs(5),
        }
    }

    pub fn for_result(result: &WeatherResult) -> Self {
        Self::weather_update(&result.name, result.temperature, &result.description)
    }
}

pub trait Notifier: Send + Sync + Debug {
    fn notify(&self, note: &Notification) -> Result<()>;
}

/// Sends through the platform's notification tool.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopNotifier;

impl Notifier for DesktopNotifier {
    fn notify(&self, note: &Notification) -> Result<()> {
        let output = platform_command(note)?.output()?;
        if !output.status.success() {
            anyhow::bail!(
                "notifier exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }
        Ok(())
    }
}

#[cfg(target_os = "linux")]
fn platform_command(note: &Notification) -> Result<Command> {
    let mut cmd = Command::new("notify-send");
    cmd.arg("--expire-time")
        .arg(note.timeout.as_millis().to_string())
        .arg(&note.title)
        .arg(&note.message);
    Ok(cmd)
}

#[cfg(target_os = "macos")]
fn platform_command(note: &Notification) -> Result<Command> {
    let script = format!(
        "display notification {} with title {}",
        applescript_quote(&note.message),
        applescript_quote(&note.title)
    );
    let mut cmd = Command::new("osascript");
    cmd.arg("-e").arg(script);
    Ok(cmd)
}

#[cfg(target_os = "macos")]
fn applescript_quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
fn platform_command(_note: &Notification) -> Result<Command> {
    anyhow::bail!("desktop notifications are not supported on this platform")
}

/// Used when notifications are turned off.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _note: &Notification) -> Result<()> {
        Ok(())
    }
}

/// Fire-and-forget. Any error is logged and dropped.
pub fn send_best_effort(notifier: &dyn Notifier, note: &Notification) {
    if let Err(e) = notifier.notify(note) {
        tracing::debug!("Notification not delivered: {e:#}");
    }
}
