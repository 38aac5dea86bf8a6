//! Subprocess renderer speaking the stdin/stdout pipe protocol.

use std::io::{Read, Write};
use std::process::{Command, Stdio};

use super::{Renderer, RendererConfig, RendererError, Result};

/// Runs the configured renderer executable, once per call.
///
/// Protocol: the tag body is written to the child's stdin, stdin is closed
/// (end-of-input is the renderer's cue to produce output), then stdout is
/// drained until the child closes it. The child runs with its working
/// directory set to the configured scratch directory; stderr and the
/// environment are inherited, so renderer diagnostics land in the host's
/// own log stream.
///
/// The exit status is not consulted and stderr is not captured: a renderer
/// that crashes after starting yields whatever stdout it managed to write,
/// with no error. Only a subprocess that never starts is reported.
///
/// The renderer is expected to consume all of its input before emitting
/// output. One that interleaves reads and writes past the pipe buffer can
/// stall this call indefinitely; there is no timeout.
///
/// The command is passed to spawn as configured. Absolute paths and bare
/// names (PATH lookup) behave the same everywhere, but with the working
/// directory moved, a relative path like `./renderer.sh` is platform
/// ambiguous; canonicalize such paths before building the config.
pub struct PipeRenderer {
    config: RendererConfig,
}

impl PipeRenderer {
    /// Create a renderer from an immutable configuration.
    #[must_use]
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    /// The configuration this renderer was built with.
    #[must_use]
    pub fn config(&self) -> &RendererConfig {
        &self.config
    }
}

impl Renderer for PipeRenderer {
    fn render(&self, input: &[u8]) -> Result<Vec<u8>> {
        let command = &self.config.command;

        let mut child = Command::new(command)
            .current_dir(&self.config.scratch_dir)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .spawn()
            .map_err(|source| RendererError::Spawn {
                command: command.display().to_string(),
                source,
            })?;

        // Feed the whole body, then drop the handle: closing stdin signals
        // end-of-input, which the renderer waits for before emitting HTML.
        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(input) {
                tracing::debug!("renderer stdin write failed: {}", e);
            }
        }

        let mut html = Vec::new();
        if let Some(mut stdout) = child.stdout.take() {
            if let Err(e) = stdout.read_to_end(&mut html) {
                tracing::debug!("renderer stdout read failed: {}", e);
            }
        }

        // Reap the child; its exit status is not part of the contract.
        let _ = child.wait();

        tracing::debug!(
            "renderer exchange: {} bytes in, {} bytes out",
            input.len(),
            html.len()
        );

        Ok(html)
    }
}
