//! Single-shot edits: each command opens an edit session, applies one
//! operation and commits it.

use super::Context;
use anyhow::{bail, Result};
use clap::Args;
use colored::Colorize;
use wow_editor::{EditorError, PageSession};
use wow_model::{BlockId, BlockKind, ContentBlock};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Page id
    pub page: String,

    /// Block kind (title, paragraph, hyperlink, image, divider, spacer)
    pub kind: BlockKind,

    /// Text for titles and paragraphs, label for hyperlinks
    pub text: Option<String>,

    /// Link or image URL
    #[arg(short, long)]
    pub url: Option<String>,
}

#[derive(Debug, Args)]
pub struct RemoveArgs {
    pub page: String,

    /// Positions of the blocks to delete
    #[arg(required = true)]
    pub indices: Vec<usize>,
}

#[derive(Debug, Args)]
pub struct MoveArgs {
    pub page: String,

    /// Positions of the blocks to move
    #[arg(long, required = true, num_args = 1..)]
    pub from: Vec<usize>,

    /// Target position, counted before the move
    #[arg(long)]
    pub to: usize,
}

#[derive(Debug, Args)]
pub struct SetTextArgs {
    pub page: String,
    pub block_id: String,
    pub value: String,
}

#[derive(Debug, Args)]
pub struct SetLabelArgs {
    pub page: String,
    pub block_id: String,
    pub label: String,
}

#[derive(Debug, Args)]
pub struct SetUrlArgs {
    pub page: String,
    pub block_id: String,
    pub url: String,
}

pub async fn add(args: AddArgs, ctx: &Context) -> Result<()> {
    let block = build_block(args.kind, args.text, args.url)?;
    let id = block.id().clone();

    edit(ctx, &args.page, |session| session.append(block)).await?;
    println!("{} Added {} {}", "✓".green(), args.kind, id.as_str().dimmed());
    Ok(())
}

pub async fn remove(args: RemoveArgs, ctx: &Context) -> Result<()> {
    let count = args.indices.len();
    edit(ctx, &args.page, |session| session.delete_at(args.indices)).await?;
    println!("{} Removed {} block(s)", "✓".green(), count);
    Ok(())
}

pub async fn move_blocks(args: MoveArgs, ctx: &Context) -> Result<()> {
    let to = args.to;
    edit(ctx, &args.page, |session| session.move_blocks(args.from, to)).await?;
    println!("{} Moved block(s) to {}", "✓".green(), to);
    Ok(())
}

pub async fn set_text(args: SetTextArgs, ctx: &Context) -> Result<()> {
    let id = BlockId::new(args.block_id);
    edit(ctx, &args.page, |session| session.set_text(id, args.value)).await?;
    println!("{} Text updated", "✓".green());
    Ok(())
}

pub async fn set_label(args: SetLabelArgs, ctx: &Context) -> Result<()> {
    let id = BlockId::new(args.block_id);
    edit(ctx, &args.page, |session| session.set_label(id, args.label)).await?;
    println!("{} Label updated", "✓".green());
    Ok(())
}

pub async fn set_url(args: SetUrlArgs, ctx: &Context) -> Result<()> {
    let id = BlockId::new(args.block_id);
    edit(ctx, &args.page, |session| session.set_url(id, args.url)).await?;
    println!("{} URL updated", "✓".green());
    Ok(())
}

/// Open `page`, enter edit mode, run `op` and commit
async fn edit<F>(ctx: &Context, page: &str, op: F) -> Result<()>
where
    F: FnOnce(&mut PageSession) -> Result<(), EditorError>,
{
    let mut session = ctx.open(page).await?;
    session.toggle_edit()?;
    op(&mut session)?;
    session.commit_edit().await?;
    Ok(())
}

/// Build a new block from command line arguments
pub fn build_block(kind: BlockKind, text: Option<String>, url: Option<String>) -> Result<ContentBlock> {
    let block = match kind {
        BlockKind::Title => ContentBlock::title(require(text, kind, "text")?),
        BlockKind::Paragraph => ContentBlock::paragraph(require(text, kind, "text")?),
        BlockKind::Hyperlink => {
            ContentBlock::hyperlink(require(text, kind, "label")?, require(url, kind, "--url")?)
        }
        BlockKind::Image => ContentBlock::image(require(url.or(text), kind, "--url")?),
        BlockKind::Divider => ContentBlock::divider(),
        BlockKind::Spacer => ContentBlock::spacer(),
    };
    Ok(block)
}

fn require(value: Option<String>, kind: BlockKind, what: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => bail!("A {} block needs {}", kind, what),
    }
}
