use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crxmd::convert::{convert, load_source};
use crxmd::download::ChromeDownloader;
use crxmd::download::chrome::DEFAULT_UPDATE_URL;
use crxmd::input::{InputType, detect_input};
use crxmd::output::{RenderOptions, render};

#[derive(Parser, Debug)]
#[command(name = "crxmd", version)]
#[command(about = "Convert a Chrome extension to an LLM-optimized Markdown document")]
struct Args {
    /// Chrome Web Store URL, 32-character extension ID, or .crx/.zip file
    source: String,

    /// Output file path (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// List binary files with sizes instead of skipping them
    #[arg(long)]
    include_binary: bool,

    /// Chrome update service endpoint used for downloads
    #[arg(long, env = "CRXMD_UPDATE_URL", default_value = DEFAULT_UPDATE_URL, hide = true)]
    update_url: String,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let input = detect_input(&args.source)?;
    let downloader = ChromeDownloader::with_update_url(&args.update_url)?;

    if let InputType::ExtensionId(ref id) = input {
        eprintln!("{} extension {}...", "Downloading".cyan(), id.bold());
    }

    let data = load_source(&input, &downloader).await?;
    let extension = convert(&data)?;

    let options = RenderOptions {
        include_binary: args.include_binary,
    };
    let document = render(&extension, &options);

    match args.output {
        Some(path) => {
            tokio::fs::write(&path, document)
                .await
                .with_context(|| format!("write output: {}", path.display()))?;
            eprintln!("{} {}", "Output written to".green(), path.display());
        }
        None => print!("{}", document),
    }

    Ok(())
}
