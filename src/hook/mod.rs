//! Parser hooks: the tag handlers a wiki host dispatches to.
//!
//! A host markup processor recognizes `<tag>...</tag>` spans, looks the tag
//! up in a [`HookRegistry`], and splices whatever the hook's `render`
//! returns verbatim into the page's output stream. Sanitization is the
//! host's business; hooks never panic and report every failure as inline
//! markup bytes.
//!
//! # Example
//!
//! ```rust
//! use sphinx_wiki::hook::{Attribute, Credits, HookRegistry, ParseContext, TagHook};
//!
//! struct ShoutHook;
//!
//! impl TagHook for ShoutHook {
//!     fn tag(&self) -> &str {
//!         "shout"
//!     }
//!
//!     fn credits(&self) -> Credits {
//!         Credits { name: "shout", author: "", url: "", description: "Uppercases its body." }
//!     }
//!
//!     fn render(&self, body: &[u8], _attrs: &[Attribute], _cx: &ParseContext) -> Vec<u8> {
//!         body.to_ascii_uppercase()
//!     }
//! }
//!
//! let mut registry = HookRegistry::new();
//! registry.set_hook(Box::new(ShoutHook));
//!
//! let out = registry.expand("shout", b"hello", &[], &ParseContext::default());
//! assert_eq!(out, Some(b"HELLO".to_vec()));
//! ```

pub mod rst;

pub use rst::{RstHook, RST_TAG};

use std::str::FromStr;

/// One `name="value"` attribute on a tag, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

impl Attribute {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl FromStr for Attribute {
    type Err = String;

    /// Parses the `name=value` syntax the CLI harness uses for `--attr`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = s
            .split_once('=')
            .ok_or_else(|| format!("expected name=value, got '{s}'"))?;
        if name.is_empty() {
            return Err(format!("attribute name missing in '{s}'"));
        }
        Ok(Self::new(name, value))
    }
}

/// Call context the host parser passes alongside a tag body.
///
/// Hooks may use it for diagnostics; rendering behavior never depends on it.
#[derive(Debug, Clone, Default)]
pub struct ParseContext {
    /// Title of the page being parsed, if known.
    pub page: Option<String>,
}

impl ParseContext {
    /// Context for a named page.
    #[must_use]
    pub fn for_page(page: impl Into<String>) -> Self {
        Self {
            page: Some(page.into()),
        }
    }
}

/// Extension metadata the host shows on its version/credits page.
#[derive(Debug, Clone)]
pub struct Credits {
    pub name: &'static str,
    pub author: &'static str,
    pub url: &'static str,
    pub description: &'static str,
}

/// A parser hook: the handler the host calls for one registered tag.
pub trait TagHook: Send + Sync {
    /// Tag name this hook owns (e.g. `"rst"`).
    fn tag(&self) -> &str;

    /// Extension credits for the host's version listing.
    fn credits(&self) -> Credits;

    /// Render the raw tag body into output bytes.
    ///
    /// `attrs` preserves source order. Must not panic: failures are
    /// reported as inline error markup in the returned bytes.
    fn render(&self, body: &[u8], attrs: &[Attribute], cx: &ParseContext) -> Vec<u8>;
}

/// Registry of tag hooks, as the host's markup processor sees them.
///
/// One hook per tag: later registrations replace earlier ones, and tag
/// names compare ASCII-case-insensitively because hosts lowercase tag
/// names before lookup.
#[derive(Default)]
pub struct HookRegistry {
    hooks: Vec<Box<dyn TagHook>>,
}

impl HookRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Register `hook` for its tag, replacing any previous hook for it.
    pub fn set_hook(&mut self, hook: Box<dyn TagHook>) {
        self.hooks
            .retain(|h| !h.tag().eq_ignore_ascii_case(hook.tag()));
        self.hooks.push(hook);
    }

    /// Look up the hook registered for `tag`.
    #[must_use]
    pub fn get(&self, tag: &str) -> Option<&dyn TagHook> {
        self.hooks
            .iter()
            .find(|h| h.tag().eq_ignore_ascii_case(tag))
            .map(|h| h.as_ref())
    }

    /// Expand one tag occurrence through its hook.
    ///
    /// Returns `None` when no hook is registered for `tag`; the host then
    /// leaves the span alone as ordinary text.
    pub fn expand(
        &self,
        tag: &str,
        body: &[u8],
        attrs: &[Attribute],
        cx: &ParseContext,
    ) -> Option<Vec<u8>> {
        let hook = self.get(tag)?;
        tracing::debug!("expanding <{}> via '{}'", tag, hook.credits().name);
        Some(hook.render(body, attrs, cx))
    }

    /// Registered hooks, in registration order.
    pub fn hooks(&self) -> impl Iterator<Item = &dyn TagHook> {
        self.hooks.iter().map(|h| h.as_ref())
    }
}
