use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Static renderer and terminal preview for the 7amra Royale landing page.
#[derive(Parser, Debug)]
#[command(name = "royale", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the page as a standalone HTML document.
    Render(RenderArgs),

    /// Browse the page in the terminal.
    Preview(PreviewArgs),
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Output file. Writes to stdout when omitted.
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Site configuration (JSON), embedded for the browser host.
    #[arg(short, long, env = "ROYALE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Path of the browser host's JS glue, loaded by the page.
    #[arg(long)]
    pub wasm_module: Option<String>,
}

#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Site configuration (JSON).
    #[arg(short, long, env = "ROYALE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write logs to this file. The preview logs nothing otherwise.
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_defaults_to_stdout() {
        let cli = Cli::try_parse_from(["royale", "render"]).unwrap();
        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert!(args.out.is_none());
        assert!(args.wasm_module.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn render_accepts_output_and_module() {
        let cli = Cli::try_parse_from([
            "royale",
            "render",
            "--out",
            "site/index.html",
            "--wasm-module",
            "./pkg/royale_wasm.js",
        ])
        .unwrap();
        let Commands::Render(args) = cli.command else {
            panic!("expected render");
        };
        assert_eq!(args.out, Some(PathBuf::from("site/index.html")));
        assert_eq!(args.wasm_module.as_deref(), Some("./pkg/royale_wasm.js"));
    }

    #[test]
    fn verbosity_is_global_and_counted() {
        let cli = Cli::try_parse_from(["royale", "preview", "-vv", "--log-file", "royale.log"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        let Commands::Preview(args) = cli.command else {
            panic!("expected preview");
        };
        assert_eq!(args.log_file, Some(PathBuf::from("royale.log")));
    }

    #[test]
    fn subcommand_is_required() {
        assert!(Cli::try_parse_from(["royale"]).is_err());
    }
}
