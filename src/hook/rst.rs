//! The `<rst>` parser hook.
//!
//! Behavior of the original sphinx-wiki extension, kept bug-for-bug: any
//! tag argument is rejected with inline error markup, otherwise the body
//! goes to the rendering bridge and whatever comes back is spliced into
//! the page unchanged.

use crate::bridge::Renderer;

use super::{Attribute, Credits, ParseContext, TagHook};

/// Tag name the hook registers under.
pub const RST_TAG: &str = "rst";

/// Inline error markup in the host's error style.
fn error_markup(detail: &str) -> Vec<u8> {
    format!("<strong class='error'>sphinx-wiki extension: {detail}</strong>").into_bytes()
}

/// Renders `<rst>` tag bodies through an external renderer.
///
/// Holds the rendering bridge it was constructed with; no other state.
pub struct RstHook {
    renderer: Box<dyn Renderer>,
}

impl RstHook {
    /// Create the hook around a rendering bridge.
    #[must_use]
    pub fn new(renderer: Box<dyn Renderer>) -> Self {
        Self { renderer }
    }
}

impl TagHook for RstHook {
    fn tag(&self) -> &str {
        RST_TAG
    }

    fn credits(&self) -> Credits {
        Credits {
            name: "sphinx-wiki",
            author: env!("CARGO_PKG_AUTHORS"),
            url: env!("CARGO_PKG_REPOSITORY"),
            description: "Parses ReStructured Text (RST) through Sphinx and returns the HTML.",
        }
    }

    fn render(&self, body: &[u8], attrs: &[Attribute], cx: &ParseContext) -> Vec<u8> {
        // Validation short-circuit: with arguments present the renderer is
        // never invoked.
        if !attrs.is_empty() {
            return error_markup("arguments not supported");
        }

        if let Some(page) = &cx.page {
            tracing::debug!("rendering {} byte rst block on '{}'", body.len(), page);
        }

        match self.renderer.render(body) {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("rst renderer failed to start: {}", e);
                error_markup("error opening pipe")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::bridge::{Renderer, RendererError};

    use super::*;

    const ARGS_ERROR: &str =
        "<strong class='error'>sphinx-wiki extension: arguments not supported</strong>";
    const PIPE_ERROR: &str =
        "<strong class='error'>sphinx-wiki extension: error opening pipe</strong>";

    /// Renderer double: counts calls and replays a fixed outcome.
    enum SpyOutcome {
        Echo(Vec<u8>),
        FailToStart,
    }

    struct SpyRenderer {
        calls: Arc<AtomicUsize>,
        outcome: SpyOutcome,
    }

    impl Renderer for SpyRenderer {
        fn render(&self, _input: &[u8]) -> Result<Vec<u8>, RendererError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                SpyOutcome::Echo(bytes) => Ok(bytes.clone()),
                SpyOutcome::FailToStart => Err(RendererError::Spawn {
                    command: "spy".to_string(),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such renderer"),
                }),
            }
        }
    }

    fn spy_hook(outcome: SpyOutcome) -> (RstHook, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let hook = RstHook::new(Box::new(SpyRenderer {
            calls: Arc::clone(&calls),
            outcome,
        }));
        (hook, calls)
    }

    #[test]
    fn attributes_are_rejected_before_the_renderer_runs() {
        let (hook, calls) = spy_hook(SpyOutcome::Echo(b"<p>should never appear</p>".to_vec()));
        let attrs = [Attribute::new("foo", "bar")];

        let out = hook.render(b"any body", &attrs, &ParseContext::default());

        assert_eq!(String::from_utf8(out).unwrap(), ARGS_ERROR);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn every_attribute_count_is_rejected() {
        let (hook, calls) = spy_hook(SpyOutcome::Echo(Vec::new()));
        let attrs = [Attribute::new("toc", "false"), Attribute::new("x", "y")];

        let out = hook.render(b"", &attrs, &ParseContext::default());

        assert_eq!(String::from_utf8(out).unwrap(), ARGS_ERROR);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn failed_launch_returns_pipe_error_markup() {
        let (hook, calls) = spy_hook(SpyOutcome::FailToStart);

        let out = hook.render(b"Hello *world*", &[], &ParseContext::default());

        assert_eq!(String::from_utf8(out).unwrap(), PIPE_ERROR);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn renderer_output_passes_through_unchanged() {
        let (hook, calls) = spy_hook(SpyOutcome::Echo(b"<p>Hello <em>world</em></p>".to_vec()));

        let out = hook.render(b"Hello *world*", &[], &ParseContext::default());

        assert_eq!(out, b"<p>Hello <em>world</em></p>");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn empty_body_and_empty_output_is_not_an_error() {
        let (hook, _) = spy_hook(SpyOutcome::Echo(Vec::new()));

        let out = hook.render(b"", &[], &ParseContext::default());
        assert_eq!(out, b"");
    }

    #[test]
    fn non_utf8_output_passes_through_byte_for_byte() {
        let (hook, _) = spy_hook(SpyOutcome::Echo(vec![0xff, 0xfe, b'<', b'p', b'>']));

        let out = hook.render(b"body", &[], &ParseContext::for_page("Sandbox"));
        assert_eq!(out, vec![0xff, 0xfe, b'<', b'p', b'>']);
    }

    #[test]
    fn registers_under_the_rst_tag() {
        let (hook, _) = spy_hook(SpyOutcome::Echo(Vec::new()));

        assert_eq!(hook.tag(), "rst");
        assert_eq!(hook.credits().name, "sphinx-wiki");
        assert_eq!(hook.credits().author, "Kevin Dunn");
    }
}
