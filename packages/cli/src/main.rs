mod commands;
mod config;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{
    add, init, move_blocks, pages, remove, set_label, set_text, set_url, show, AddArgs, Context,
    InitArgs, MoveArgs, RemoveArgs, SetLabelArgs, SetTextArgs, SetUrlArgs, ShowArgs,
};
use config::Config;
use std::path::PathBuf;

/// World of Wealth CLI - browse and edit guide pages
#[derive(Parser, Debug)]
#[command(name = "wow")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log debug output (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Store directory, instead of the one in wow.config.json
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a config file and seed the guide pages
    Init(InitArgs),

    /// List tabs and their pages
    Pages,

    /// Print the blocks of a page
    Show(ShowArgs),

    /// Append a block to a page
    Add(AddArgs),

    /// Delete blocks by position
    Remove(RemoveArgs),

    /// Move blocks to a new position
    Move(MoveArgs),

    /// Set the text of a title or paragraph
    SetText(SetTextArgs),

    /// Set the label of a hyperlink
    SetLabel(SetLabelArgs),

    /// Set the URL of a hyperlink
    SetUrl(SetUrlArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(cli).await {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let cwd = std::env::current_dir()?;
    let store_dir = match cli.store {
        Some(store) => cwd.join(store),
        None => Config::load(&cwd)?.get_store_dir(&cwd),
    };
    tracing::debug!(store = %store_dir.display(), "using store");

    let ctx = Context { cwd, store_dir };

    match cli.command {
        Command::Init(args) => init(args, &ctx).await,
        Command::Pages => pages(&ctx).await,
        Command::Show(args) => show(args, &ctx).await,
        Command::Add(args) => add(args, &ctx).await,
        Command::Remove(args) => remove(args, &ctx).await,
        Command::Move(args) => move_blocks(args, &ctx).await,
        Command::SetText(args) => set_text(args, &ctx).await,
        Command::SetLabel(args) => set_label(args, &ctx).await,
        Command::SetUrl(args) => set_url(args, &ctx).await,
    }
}
