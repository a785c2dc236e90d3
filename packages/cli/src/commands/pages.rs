use super::Context;
use anyhow::Result;
use colored::Colorize;
use std::sync::Arc;
use wow_navigation::{AppState, Tab};

pub async fn pages(ctx: &Context) -> Result<()> {
    let client = ctx.client();
    let stored = client.page_ids().await?;
    let app = AppState::new(Arc::new(client));

    for tab in Tab::ALL {
        println!("{} {}", tab.label().bright_blue().bold(), format!("({})", tab.icon_name()).dimmed());

        let Some(list) = app.list(tab) else {
            println!("  {}", "no guide pages".dimmed());
            println!();
            continue;
        };

        for id in list.page_ids() {
            let seeded = if stored.contains(id) {
                "✓".green()
            } else {
                "✗".red()
            };

            match id.known() {
                Some(page) => println!(
                    "  {} {:<12} {} {}",
                    seeded,
                    id.to_string().bright_white(),
                    page.title(),
                    format!("- {}", page.description()).dimmed()
                ),
                None => println!("  {} {}", seeded, id.to_string().bright_white()),
            }
        }
        println!();
    }

    let custom: Vec<_> = stored.iter().filter(|id| id.known().is_none()).collect();
    if !custom.is_empty() {
        println!("{}", "OTHER".bright_blue().bold());
        for id in custom {
            println!("  {} {}", "✓".green(), id.to_string().bright_white());
        }
    }

    Ok(())
}
