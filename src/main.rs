//! tailrisk-dash - terminal dashboard for the crypto tail-risk prediction
//! project
//!
//! Runs the interactive TUI by default; `check`, `dump` and `export` work on
//! the content without touching the terminal.

mod config;
mod content;
mod core;
mod frontend;
mod theme;

use crate::content::validator::reachable_targets;
use crate::content::{validate_content, ContentLibrary};
use crate::core::navigation::PageId;
use crate::core::state::ViewState;
use crate::core::AppCore;
use crate::frontend::tui::compose::{compose_page, to_plain_text, ComposeOptions};
use crate::frontend::{Frontend, TuiFrontend};
use anyhow::{Context, Result};
use clap::{Parser as ClapParser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

#[derive(ClapParser)]
#[command(name = "tailrisk-dash")]
#[command(about = "Terminal dashboard for the crypto tail-risk prediction project", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Custom data directory (default: ~/.tailrisk-dash)
    /// Can also be set via TAILRISK_DASH_DIR environment variable
    #[arg(long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Content file replacing the built-in content
    #[arg(long, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Page to open on start
    #[arg(short, long, value_enum)]
    page: Option<PageId>,

    /// Theme preset (dark, light)
    #[arg(short, long)]
    theme: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the content and report errors and warnings
    Check,
    /// Print a page as plain text
    Dump {
        /// Page to print (defaults to the start page)
        #[arg(long, value_enum)]
        page: Option<PageId>,

        /// Line width
        #[arg(short, long, default_value_t = 100)]
        width: u16,

        /// Print every dataset tab instead of only the first
        #[arg(long)]
        all_tabs: bool,
    },
    /// Print the content library as JSON
    Export {
        #[arg(long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    // TUI apps can't log to stdout, so we write to a file
    // (RUST_LOG controls the level, e.g. RUST_LOG=debug)
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open("tailrisk-dash.log")
        .context("Failed to open tailrisk-dash.log")?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false) // No color codes in log file
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => config::Config::load_from_path(path)?,
        None => config::Config::load(cli.data_dir.as_deref())?,
    };
    if let Some(page) = cli.page {
        config.ui.initial_page = page;
    }
    if let Some(theme) = &cli.theme {
        config.ui.theme = theme.clone();
    }
    let content_path = cli.content.clone().or_else(|| config.content_path());

    match cli.command {
        Some(Commands::Check) => check(content_path.as_deref()),
        Some(Commands::Dump {
            page,
            width,
            all_tabs,
        }) => {
            let content = ContentLibrary::load(content_path.as_deref())
                .context("Failed to load content")?;
            let page = page.unwrap_or(config.ui.initial_page);
            let view = ViewState {
                expand_tabs: all_tabs,
                ..ViewState::default()
            };
            let lines = compose_page(
                &content,
                page,
                &view,
                &theme::ThemePresets::get(&config.ui.theme),
                ComposeOptions {
                    width,
                    show_footer: config.ui.show_footer,
                },
            );
            println!("{}", to_plain_text(&lines));
            Ok(())
        }
        Some(Commands::Export { pretty }) => {
            let content = ContentLibrary::load(content_path.as_deref())
                .context("Failed to load content")?;
            let json = if pretty {
                serde_json::to_string_pretty(&content)
            } else {
                serde_json::to_string(&content)
            }
            .context("Failed to serialize content")?;
            println!("{}", json);
            Ok(())
        }
        None => {
            let content = ContentLibrary::load(content_path.as_deref())
                .context("Failed to load content")?;
            run_tui(config, Arc::new(content))
        }
    }
}

/// Validate content and print a report; exits non-zero on errors
fn check(path: Option<&Path>) -> Result<()> {
    let library = match path {
        Some(path) => {
            println!("Checking content file: {:?}", path);
            ContentLibrary::load_from_file(path)
        }
        None => {
            println!("Checking built-in content");
            ContentLibrary::embedded()
        }
    };

    let library = match library {
        Ok(library) => library,
        Err(e) => {
            eprintln!("✗ Failed to load content: {}", e);
            std::process::exit(1);
        }
    };

    println!("✓ Content loaded successfully");
    for page in PageId::ALL {
        let block = crate::core::navigation::render(page, &library);
        if block.is_empty() {
            eprintln!("✗ Page '{}' renders nothing", page.slug());
        } else {
            println!("  {:<18} {}", page.label(), block.heading());
        }
    }
    let targets: Vec<&str> = reachable_targets(&library.home)
        .iter()
        .map(PageId::slug)
        .collect();
    println!("  Home buttons lead to: {}", targets.join(", "));

    let result = validate_content(&library);
    for error in result.errors() {
        eprintln!("✗ Error: {}", error.message());
    }
    for warning in result.warnings() {
        println!("⚠ Warning: {}", warning.message());
    }

    if !result.has_errors() && !result.has_warnings() {
        println!("✓ Content is valid with no issues");
    } else {
        if result.has_errors() {
            eprintln!("\n✗ Found {} error(s)", result.errors().len());
        }
        if result.has_warnings() {
            println!("⚠ Found {} warning(s)", result.warnings().len());
        }
    }

    if !result.is_valid() {
        std::process::exit(1);
    }
    Ok(())
}

/// Run TUI frontend
fn run_tui(config: config::Config, content: Arc<ContentLibrary>) -> Result<()> {
    let poll = Duration::from_millis(config.ui.poll_interval_ms);
    let mut core = AppCore::new(config, content);

    let mut frontend = TuiFrontend::new()?;
    frontend.set_poll_timeout(poll);
    let (width, height) = frontend.size();
    tracing::info!("Terminal is {}x{}", width, height);

    let result = event_loop(&mut core, &mut frontend);

    // Restore the terminal before reporting any error
    frontend.cleanup()?;
    result
}

fn event_loop(core: &mut AppCore, frontend: &mut dyn Frontend) -> Result<()> {
    while core.running {
        if core.take_render_request() {
            frontend.render(core)?;
        }

        for event in frontend.poll_events()? {
            core.handle_event(event);
        }
    }
    Ok(())
}
