use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use dotenvy::dotenv;

use tunegrab::api::client::ApiClient;
use tunegrab::cli::Cli;
use tunegrab::core::config;
use tunegrab::session::view::Section;
use tunegrab::session::Orchestrator;

/// Main entry point for the tunegrab client.
///
/// Runs one full flow: URL intake, metadata preview, conversion with a
/// progress indicator, and saving the produced file. Every backend failure
/// is rendered as an error panel; the process exits non-zero in that case.
#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();

    // Load environment variables from .env if present
    let _ = dotenv();

    let cli = Cli::parse_args();
    let quality = cli.quality();

    let client = match cli.api_url.as_deref() {
        Some(base) => ApiClient::with_base_url(base)?,
        None => ApiClient::new()?,
    };
    let mut orchestrator = Orchestrator::new(client);

    let url = match cli.url.clone() {
        Some(url) => url,
        None => prompt("Video URL: ")?,
    };

    if orchestrator.fetch_metadata(&url).await.is_err() {
        render_error(&orchestrator);
        anyhow::bail!("metadata fetch failed");
    }
    render_preview(&orchestrator);

    if !cli.yes {
        let answer = prompt(&format!("Convert to MP3 at {}? [Y/n] ", quality.display_name()))?;
        if matches!(answer.trim(), "n" | "N" | "no") {
            orchestrator.reset();
            println!("Cancelled.");
            return Ok(());
        }
    }

    // Render the cosmetic indicator while the conversion call is pending
    let progress = orchestrator.progress();
    let render = tokio::spawn(async move {
        loop {
            print!("\r  Converting... {:>3}%", progress.percent());
            let _ = io::stdout().flush();
            tokio::time::sleep(Duration::from_millis(200)).await;
        }
    });
    let result = orchestrator.request_download(quality).await;
    render.abort();

    if result.is_err() {
        println!();
        render_error(&orchestrator);
        anyhow::bail!("conversion failed");
    }
    println!("\r  Converting... 100%");

    let saved = orchestrator.save_file(&output_dir(&cli.output)).await?;
    println!("  Saved {}", saved.display());
    Ok(())
}

/// Resolves the save directory: CLI flag first, then the configured folder
/// with tilde expansion.
fn output_dir(flag: &Option<String>) -> PathBuf {
    let raw = flag
        .clone()
        .unwrap_or_else(|| config::DOWNLOAD_FOLDER.clone());
    PathBuf::from(shellexpand::tilde(&raw).to_string())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn render_preview(orchestrator: &Orchestrator) {
    if let Section::Preview(preview) = orchestrator.view_model().section {
        println!();
        println!("  {}", preview.title);
        println!("  by {}", preview.uploader);
        println!("  {}  |  {}", preview.duration, preview.views);
        if !preview.thumbnail.is_empty() {
            println!("  thumbnail: {}", preview.thumbnail);
        }
        println!();
    }
}

fn render_error(orchestrator: &Orchestrator) {
    if let Section::Failure(panel) = orchestrator.view_model().section {
        eprintln!();
        eprintln!("  {}: {}", panel.title, panel.message);
        eprintln!("  Run again to retry.");
    }
}
