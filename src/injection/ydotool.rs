//! ydotool typing backend
//!
//! Replays the text as uinput key events through the ydotool daemon.
//! Works on both X11 and Wayland but requires ydotoold to be running.

use super::{Backend, BackendKind};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;
use tracing::debug;

#[derive(Debug, Default)]
pub struct YdotoolBackend;

impl YdotoolBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Backend for YdotoolBackend {
    async fn deliver(&self, text: &str, timeout: Duration) -> Result<()> {
        debug!("ydotool typing {} chars", text.chars().count());

        let child = Command::new("ydotool")
            .arg("type")
            .arg("--")
            .arg(text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .context("Failed to spawn ydotool")?;

        let output = tokio::time::timeout(timeout, child.wait_with_output())
            .await
            .map_err(|_| anyhow!("ydotool timed out after {:?}", timeout))??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!(
                "ydotool exited with {}: {}",
                output.status,
                stderr.trim()
            ));
        }

        Ok(())
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Ydotool
    }
}
