use super::Context;
use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

pub async fn init(args: InitArgs, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(DEFAULT_CONFIG_NAME);

    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing World of Wealth store...".bright_blue().bold());

    // Keep the store path relative when it lives under the working directory
    let store_dir = ctx.store_dir.strip_prefix(&ctx.cwd).unwrap_or(&ctx.store_dir);
    let config = Config {
        store_dir: store_dir.display().to_string(),
    };
    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    let client = ctx.client();
    let created = wow_store::seed_catalog(client.store()).await?;
    for page in &created {
        println!("  {} Seeded {}", "✓".green(), page);
    }
    if created.is_empty() {
        println!("  {} All pages already present", "✓".green());
    }

    println!();
    println!("{}", "✅ Store initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Run: wow pages");
    println!("  2. Run: wow add addons title \"Essential addons\"");

    Ok(())
}
