//! `sphinx-wiki` CLI - exercise the `<rst>` parser hook from the command line
//!
//! The original extension's install notes have admins run the renderer by
//! hand to verify their setup; `render` and `check` make that workflow a
//! first-class tool.

mod cmd;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use sphinx_wiki::Attribute;

use cmd::RendererArgs;

#[derive(Parser)]
#[command(name = "sphinx-wiki")]
#[command(about = "Render wiki <rst> tag bodies through an external Sphinx pipeline")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a tag body and print the resulting HTML fragment
    Render {
        /// File holding the tag body (defaults to stdin)
        input: Option<PathBuf>,

        /// Tag attribute as name=value, repeatable (the hook rejects any)
        #[arg(long = "attr", value_name = "NAME=VALUE")]
        attrs: Vec<Attribute>,

        /// Page title recorded in the parse context
        #[arg(long)]
        page: Option<String>,

        /// Write output here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[command(flatten)]
        renderer: RendererArgs,
    },

    /// Check the renderer configuration and report what would run
    Check {
        #[command(flatten)]
        renderer: RendererArgs,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr: stdout carries the rendered fragment.
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            attrs,
            page,
            output,
            renderer,
        } => cmd::render::cmd_render(
            input.as_deref(),
            &attrs,
            page,
            output.as_deref(),
            &renderer,
        ),
        Commands::Check { renderer } => cmd::check::cmd_check(&renderer),
    }
}
