//! # CLI Layer
//!
//! One possible UI client for the directory. This is the only code that:
//! - Knows about terminal I/O (stdin, stdout, stderr)
//! - Installs the tracing subscriber
//! - Handles argument parsing
//! - Formats output for human consumption
//!
//! ## Structure
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Resolves config and data file, opens the API
//! - `handle_*()`: Per-command handlers that call the API and print the result
//! - The interactive menu lives in `menu.rs`

use super::menu::Session;
use super::render::{render_config, render_messages, render_page_header, render_records};
use super::setup::{Cli, Commands};
use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing::{warn, Level};
use tracing_subscriber::FmtSubscriber;
use yellowpages::api::{CmdResult, ConfigAction, YellowPagesApi, YellowPagesPaths};
use yellowpages::config::YellowPagesConfig;
use yellowpages::error::{Result, YellowPagesError};
use yellowpages::store::fs::FileStore;

const HOME_ENV: &str = "YELLOWPAGES_HOME";

struct AppContext {
    api: YellowPagesApi<FileStore>,
    config: YellowPagesConfig,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = resolve_paths()?;

    // Config is readable without opening the data file.
    if let Some(Commands::Config { key, value }) = &cli.command {
        return handle_config(&paths, key.clone(), value.clone());
    }

    let mut ctx = init_context(&cli, &paths)?;

    match cli.command {
        None | Some(Commands::Menu) => handle_menu(&mut ctx),
        Some(Commands::Search { term }) => handle_search(&mut ctx, &term),
        Some(Commands::List { page, page_size }) => handle_list(&mut ctx, page, page_size),
        Some(Commands::Show { pk }) => handle_show(&mut ctx, pk),
        Some(Commands::Generate { count }) => handle_generate(&mut ctx, count),
        Some(Commands::Config { .. }) => Ok(()),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::WARN };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    // Only fails if a subscriber is already installed.
    let _ = tracing::subscriber::set_global_default(subscriber);
}

fn resolve_paths() -> Result<YellowPagesPaths> {
    let config_dir = match std::env::var_os(HOME_ENV) {
        Some(home) => PathBuf::from(home),
        None => ProjectDirs::from("com", "yellowpages", "yellowpages")
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or_else(|| YellowPagesError::Api("Could not determine config dir".into()))?,
    };
    Ok(YellowPagesPaths { config_dir })
}

fn init_context(cli: &Cli, paths: &YellowPagesPaths) -> Result<AppContext> {
    let config = YellowPagesConfig::load(&paths.config_dir).unwrap_or_else(|e| {
        warn!(error = %e, "unreadable config, using defaults");
        YellowPagesConfig::default()
    });

    let data_file = cli
        .file
        .clone()
        .unwrap_or_else(|| config.data_file.clone());
    let store = FileStore::new(data_file);
    let api = YellowPagesApi::open(store)?;

    Ok(AppContext { api, config })
}

fn handle_menu(ctx: &mut AppContext) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(&mut ctx.api, stdin.lock(), stdout.lock(), ctx.config.page_size).run()
}

fn handle_search(ctx: &mut AppContext, term: &str) -> Result<()> {
    let result = ctx.api.search(term)?;
    if !result.listed_records.is_empty() {
        print!("{}", render_records(&result.listed_records));
    }
    print_messages(&result);
    Ok(())
}

fn handle_list(ctx: &mut AppContext, page: usize, page_size: Option<usize>) -> Result<()> {
    let page_size = page_size.unwrap_or(ctx.config.page_size);
    if page_size == 0 {
        return Err(YellowPagesError::Api("Page size must be at least 1".into()));
    }
    let result = ctx.api.page(page, page_size)?;
    if let Some(info) = &result.page {
        println!(
            "Total records: {}  Total pages: {}",
            info.total_records, info.total_pages
        );
        print!("{}", render_page_header(info));
    }
    print!("{}", render_records(&result.listed_records));
    print_messages(&result);
    Ok(())
}

fn handle_show(ctx: &mut AppContext, pk: u64) -> Result<()> {
    let result = ctx.api.get_record(pk)?;
    if !result.listed_records.is_empty() {
        print!("{}", render_records(&result.listed_records));
    }
    print_messages(&result);
    Ok(())
}

fn handle_generate(ctx: &mut AppContext, count: usize) -> Result<()> {
    let result = ctx.api.generate(count)?;
    print_messages(&result);
    Ok(())
}

fn handle_config(
    paths: &YellowPagesPaths,
    key: Option<String>,
    value: Option<String>,
) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(k), None) => ConfigAction::ShowKey(k),
        (Some(k), Some(v)) => ConfigAction::Set(k, v),
    };

    let result = yellowpages::commands::config::run(paths, action)?;
    if let Some(config) = &result.config {
        print!("{}", render_config(config));
    }
    print_messages(&result);
    Ok(())
}

fn print_messages(result: &CmdResult) {
    print!("{}", render_messages(&result.messages));
}
