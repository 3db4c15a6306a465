//! Clipboard export for finished measurements.
//!
//! When a measurement ends, the final "W x H" text can be placed on the
//! Wayland clipboard so it can be pasted into bug reports or design notes.

use std::process::{Command, Stdio};

use thiserror::Error;
use wl_clipboard_rs::copy::{MimeType, Options, Source};

/// Errors that can occur while exporting a measurement.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Clipboard operation failed: {0}")]
    Clipboard(String),
}

/// Copies measurement text to the Wayland clipboard.
///
/// Prefers the wl-copy CLI (provided by the wl-clipboard package) and falls
/// back to the wl-clipboard-rs library if the command is unavailable. A
/// failure here is reported to the caller; it must never abort the overlay.
///
/// # Arguments
/// * `text` - The "W x H" measurement text
pub fn copy_measurement(text: &str) -> Result<(), ExportError> {
    log::debug!("Copying measurement '{}' to clipboard", text);

    match copy_via_command(text) {
        Ok(()) => {
            log::info!("Copied measurement to clipboard via wl-copy command");
            Ok(())
        }
        Err(cmd_err) => {
            log::warn!(
                "wl-copy command path failed ({}). Falling back to wl-clipboard-rs",
                cmd_err
            );
            match copy_via_library(text) {
                Ok(()) => {
                    log::info!("Copied measurement to clipboard via wl-clipboard-rs fallback");
                    Ok(())
                }
                Err(lib_err) => Err(ExportError::Clipboard(format!(
                    "wl-copy failed: {} ; wl-clipboard-rs failed: {}",
                    cmd_err, lib_err
                ))),
            }
        }
    }
}

/// Copy to clipboard using the wl-clipboard-rs library.
fn copy_via_library(text: &str) -> Result<(), ExportError> {
    use wl_clipboard_rs::copy::ServeRequests;

    let mut opts = Options::new();

    // Serve one paste then exit so the data survives our process briefly
    opts.serve_requests(ServeRequests::Only(1));

    opts.copy(
        Source::Bytes(text.as_bytes().into()),
        MimeType::Specific("text/plain;charset=utf-8".to_string()),
    )
    .map_err(|e| ExportError::Clipboard(format!("wl-clipboard-rs error: {}", e)))?;

    Ok(())
}

/// Copy to clipboard by shelling out to the wl-copy command.
fn copy_via_command(text: &str) -> Result<(), ExportError> {
    use std::io::Write;

    let mut child = Command::new("wl-copy")
        .arg("--type")
        .arg("text/plain")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| {
            ExportError::Clipboard(format!("Failed to spawn wl-copy (is it installed?): {}", e))
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| ExportError::Clipboard(format!("Failed to write to wl-copy stdin: {}", e)))?;
    }

    let output = child
        .wait_with_output()
        .map_err(|e| ExportError::Clipboard(format!("Failed to wait for wl-copy: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ExportError::Clipboard(format!("wl-copy failed: {}", stderr)));
    }

    log::debug!("wl-copy command completed successfully");
    Ok(())
}
