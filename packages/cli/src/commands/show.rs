use super::Context;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use wow_model::ContentBlock;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Page id (e.g. addons, gearing)
    pub page: String,
}

pub async fn show(args: ShowArgs, ctx: &Context) -> Result<()> {
    let session = ctx.open(&args.page).await?;
    let Some(page) = session.page() else {
        anyhow::bail!("Page '{}' did not load", args.page);
    };

    match page.id.known() {
        Some(known) => println!("{} {}", known.title().bright_blue().bold(), format!("({})", known.accent()).dimmed()),
        None => println!("{}", page.id.to_string().bright_blue().bold()),
    }

    if page.is_empty() {
        println!("  {}", "no content".dimmed());
        return Ok(());
    }

    for (index, block) in page.content.iter().enumerate() {
        println!(
            "  {:>3} {:<10} {} {}",
            index,
            block.kind().as_str().bright_white(),
            block.id().as_str().dimmed(),
            describe(block)
        );
    }

    Ok(())
}

/// One-line summary of a block's payload
pub fn describe(block: &ContentBlock) -> String {
    match block {
        ContentBlock::Title { value, .. } | ContentBlock::Paragraph { value, .. } => {
            format!("{:?}", value)
        }
        ContentBlock::Hyperlink { label, url, .. } => format!("{:?} -> {}", label, url),
        ContentBlock::Image { url, .. } => url.clone(),
        ContentBlock::Divider { .. } | ContentBlock::Spacer { .. } => String::new(),
    }
}
