//! wtype typing backend
//!
//! Types the text through the Wayland virtual-keyboard protocol. Only works
//! on compositors that implement zwp_virtual_keyboard_v1.

use super::{Backend, BackendKind};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

#[derive(Debug, Default)]
pub struct WtypeBackend;

impl WtypeBackend {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Backend for WtypeBackend {
    async fn deliver(&self, text: &str, timeout: Duration) -> Result<()> {
        debug!("wtype typing {} chars", text.chars().count());

        let mut child = Command::new("wtype")
            .arg("-")
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .context("Failed to spawn wtype")?;

        let output = tokio::time::timeout(timeout, async {
            // Text goes over stdin so shell-hostile characters survive intact
            if let Some(mut stdin) = child.stdin.take() {
                stdin.write_all(text.as_bytes()).await?;
                stdin.shutdown().await?;
            }
            child.wait_with_output().await
        })
        .await
        .map_err(|_| anyhow!("wtype timed out after {:?}", timeout))??;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!(
                "wtype exited with {}: {}",
                output.status,
                stderr.trim()
            ));
        }

        Ok(())
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Wtype
    }
}
