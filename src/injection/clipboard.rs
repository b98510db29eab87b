//! Clipboard backend
//!
//! Writes the text to the system clipboard. Tries wl-copy (Wayland) first,
//! then xclip as the X11 fallback.

use super::{Backend, BackendKind};
use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

#[derive(Debug, Default)]
pub struct ClipboardBackend;

impl ClipboardBackend {
    pub fn new() -> Self {
        Self
    }
}

async fn run_copy(program: &str, args: &[&str], text: &str) -> Result<()> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
        .with_context(|| format!("Failed to spawn {}", program))?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin.write_all(text.as_bytes()).await?;
        stdin.shutdown().await?;
    }

    let status = child.wait().await?;
    if !status.success() {
        return Err(anyhow!("{} exited with {}", program, status));
    }
    Ok(())
}

#[async_trait]
impl Backend for ClipboardBackend {
    async fn deliver(&self, text: &str, timeout: Duration) -> Result<()> {
        tokio::time::timeout(timeout, async {
            match run_copy("wl-copy", &[], text).await {
                Ok(()) => return Ok(()),
                Err(e) => debug!("wl-copy failed: {}", e),
            }

            run_copy("xclip", &["-selection", "clipboard"], text)
                .await
                .context("No clipboard command succeeded (tried wl-copy, xclip)")
        })
        .await
        .map_err(|_| anyhow!("clipboard copy timed out after {:?}", timeout))?
    }

    fn kind(&self) -> BackendKind {
        BackendKind::Clipboard
    }
}
