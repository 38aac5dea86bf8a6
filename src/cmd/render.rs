//! `render` - run one tag body through the `<rst>` hook.

use std::io::{Read, Write};
use std::path::Path;

use anyhow::{Context, Result};

use sphinx_wiki::{Attribute, HookRegistry, ParseContext, RST_TAG};

use super::RendererArgs;

pub fn cmd_render(
    input: Option<&Path>,
    attrs: &[Attribute],
    page: Option<String>,
    output: Option<&Path>,
    renderer: &RendererArgs,
) -> Result<()> {
    let (config, _) = renderer.resolve()?;

    let body = match input {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("failed to read stdin")?;
            buf
        }
    };

    let cx = match (page, input) {
        (Some(title), _) => ParseContext::for_page(title),
        (None, Some(path)) => ParseContext::for_page(path.display().to_string()),
        (None, None) => ParseContext::default(),
    };

    let mut registry = HookRegistry::new();
    sphinx_wiki::register(&mut registry, config);

    let html = registry
        .expand(RST_TAG, &body, attrs, &cx)
        .expect("rst hook should be registered");

    if let Some(path) = output {
        std::fs::write(path, &html)
            .with_context(|| format!("failed to write {}", path.display()))?;
        println!("💾 Saved {} bytes to {}", html.len(), path.display());
    } else {
        // Raw bytes, exactly as the hook returned them.
        std::io::stdout()
            .lock()
            .write_all(&html)
            .context("failed to write output")?;
    }

    Ok(())
}
