//! `check` - diagnose the renderer configuration and report what would run.

use anyhow::Result;

use sphinx_wiki::HookRegistry;

use super::RendererArgs;

pub fn cmd_check(renderer: &RendererArgs) -> Result<()> {
    println!("🔎 sphinx-wiki {} configuration check\n", sphinx_wiki::VERSION);

    let (config, source) = renderer.resolve()?;
    println!("1️⃣  Config source... {source}");

    // Bare names go through PATH, the same lookup spawn will do.
    print!("2️⃣  Renderer command... ");
    let resolved = if config.command.components().count() > 1 {
        config.command.exists().then(|| config.command.clone())
    } else {
        which::which(&config.command).ok()
    };
    match &resolved {
        Some(path) => println!("✅ {}", path.display()),
        None => println!("❌ {} not found", config.command.display()),
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        print!("3️⃣  Executable bit... ");
        match &resolved {
            Some(path) => match std::fs::metadata(path) {
                Ok(meta) if meta.permissions().mode() & 0o111 != 0 => println!("✅"),
                Ok(_) => println!("❌ {} is not executable", path.display()),
                Err(e) => println!("❌ {e}"),
            },
            None => println!("⚠️  skipped, command not found"),
        }
    }

    print!("4️⃣  Scratch directory... ");
    if config.scratch_dir.is_dir() {
        let probe = config
            .scratch_dir
            .join(format!(".sphinx-wiki-probe-{}", std::process::id()));
        match std::fs::write(&probe, b"") {
            Ok(()) => {
                let _ = std::fs::remove_file(&probe);
                println!("✅ {}", config.scratch_dir.display());
            }
            Err(e) => println!("❌ {} is not writable: {e}", config.scratch_dir.display()),
        }
    } else {
        println!("❌ {} is not a directory", config.scratch_dir.display());
    }

    println!("\nRegistered parser hooks:");
    let mut registry = HookRegistry::new();
    sphinx_wiki::register(&mut registry, config);
    for hook in registry.hooks() {
        let credits = hook.credits();
        println!(
            "  <{}> {} by {} ({})",
            hook.tag(),
            credits.name,
            credits.author,
            credits.url
        );
        println!("       {}", credits.description);
    }

    Ok(())
}
