use crate::core::config::Config;
use crate::core::context::AppCtx;
use crate::core::utils::ensure_dir;
use console::style;
use std::fs;

/// Write the default provider configuration to the context's config path.
pub fn run(ctx: &AppCtx, force: bool) -> Result<(), String> {
    if ctx.config_path.exists() && !force {
        return Err(format!(
            "{} already exists (use --force to overwrite)",
            ctx.config_path.display()
        ));
    }

    ensure_dir(&ctx.base_dir)?;
    let content = Config::with_defaults()
        .to_toml_string()
        .map_err(|e| e.to_string())?;
    fs::write(&ctx.config_path, content)
        .map_err(|e| format!("Unable to write {}: {}", ctx.config_path.display(), e))?;

    println!(
        "{} {}",
        style("✔ Wrote").green(),
        ctx.config_path.display()
    );
    println!("Set ANTHROPIC_API_KEY and OPENAI_API_KEY before running.");
    Ok(())
}
