//! Bridge to the external document renderer.
//!
//! The renderer is an opaque executable: raw markup bytes go in on its
//! standard input, an HTML fragment comes out on its standard output.
//! [`PipeRenderer`] is the real subprocess implementation; the [`Renderer`]
//! trait is the seam tests substitute with a double.
//!
//! # Example
//!
//! ```rust,no_run
//! use sphinx_wiki::bridge::{PipeRenderer, Renderer, RendererConfig};
//!
//! let renderer = PipeRenderer::new(RendererConfig::new("/usr/local/bin/sphinx-wiki.py"));
//! let html = renderer.render(b"Hello *world*")?;
//! # Ok::<(), sphinx_wiki::bridge::RendererError>(())
//! ```

pub mod config;
pub mod pipe;

pub use config::{default_config_path, RendererConfig};
pub use pipe::PipeRenderer;

use thiserror::Error;

/// Rendering bridge errors.
///
/// The only failure the bridge reports is a subprocess that never started.
/// Everything after a successful start is best effort: the bridge returns
/// whatever stdout bytes it drained, regardless of how the renderer exited
/// (see [`PipeRenderer`]).
#[derive(Error, Debug)]
pub enum RendererError {
    #[error("failed to start renderer '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, RendererError>;

/// Converts markup bytes into an HTML fragment.
///
/// Implementations are stateless and synchronous; each call is an
/// independent, blocking exchange with no shared mutable state.
pub trait Renderer: Send + Sync {
    /// Render `input` and return the produced bytes.
    fn render(&self, input: &[u8]) -> Result<Vec<u8>>;
}
