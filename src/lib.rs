//! `sphinx-wiki` - wiki parser hook for reStructuredText
//!
//! Registers a `<rst>...</rst>` tag with a host markup registry. The tag
//! body is piped to an external renderer process (classically Sphinx's
//! `sphinx-wiki.py` driver) and the renderer's standard output is spliced
//! back into the page as an HTML fragment.
//!
//! # Example
//!
//! ```rust,no_run
//! use sphinx_wiki::{HookRegistry, ParseContext, RendererConfig};
//!
//! let mut registry = HookRegistry::new();
//! sphinx_wiki::register(
//!     &mut registry,
//!     RendererConfig::new("/usr/local/bin/sphinx-wiki.py"),
//! );
//!
//! let html = registry.expand("rst", b"Hello *world*", &[], &ParseContext::default());
//! # let _ = html;
//! ```

pub mod bridge;
pub mod hook;

pub use bridge::{default_config_path, PipeRenderer, Renderer, RendererConfig, RendererError};
pub use hook::{Attribute, Credits, HookRegistry, ParseContext, RstHook, TagHook, RST_TAG};

/// Version of sphinx-wiki
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Register the `<rst>` hook with `registry`, backed by a [`PipeRenderer`]
/// for `config`.
///
/// This is the extension's setup entry point: a host calls it once at
/// initialization, after which the registry owns the hook.
pub fn register(registry: &mut HookRegistry, config: RendererConfig) {
    registry.set_hook(Box::new(RstHook::new(Box::new(PipeRenderer::new(config)))));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_wires_the_rst_hook() {
        let mut registry = HookRegistry::new();
        register(&mut registry, RendererConfig::new("/nonexistent/renderer"));

        let hook = registry.get(RST_TAG).expect("rst hook registered");
        assert_eq!(hook.credits().name, "sphinx-wiki");
    }

    #[test]
    fn registered_hook_reports_launch_failure_as_markup() {
        let mut registry = HookRegistry::new();
        register(&mut registry, RendererConfig::new("/nonexistent/renderer"));

        let out = registry
            .expand(RST_TAG, b"Hello *world*", &[], &ParseContext::default())
            .expect("rst hook registered");

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "<strong class='error'>sphinx-wiki extension: error opening pipe</strong>"
        );
    }
}
