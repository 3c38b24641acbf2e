mod cli;
mod layout;
mod logging;
mod preview;
mod renderer;

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use royale_core::SiteConfig;
use royale_core::content::PAGE;
use royale_core::html::render_document;
use royale_protocol::PageView;
use tracing::info;

use crate::cli::{Cli, Commands, RenderArgs};

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Render(args) => {
            logging::init_stderr(cli.verbose);
            render(&args)
        }
        Commands::Preview(args) => {
            if let Some(path) = &args.log_file {
                logging::init_file(cli.verbose, path)?;
            }
            let config = load_config(args.config.as_deref())?;
            renderer::run_preview(&config)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    let Some(path) = path else {
        return Ok(SiteConfig::default());
    };
    let data =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let config = SiteConfig::from_json(&data)
        .with_context(|| format!("invalid config {}", path.display()))?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

fn render(args: &RenderArgs) -> Result<()> {
    let embedded = match &args.config {
        Some(path) => Some(serde_json::to_string(&load_config(Some(path))?)?),
        None => None,
    };
    let html = render_document(
        &PageView::new(false, false, None),
        &PAGE,
        args.wasm_module.as_deref(),
        embedded.as_deref(),
    );

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create {}", parent.display()))?;
            }
            std::fs::write(path, &html)
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = html.len(), "wrote page");
        }
        None => std::io::stdout().lock().write_all(html.as_bytes())?,
    }
    Ok(())
}
