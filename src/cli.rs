use clap::Parser;

use crate::api::types::Quality;

#[derive(Parser)]
#[command(name = "tunegrab")]
#[command(author, version, about = "Terminal client for the tunegrab video-to-MP3 conversion service", long_about = None)]
pub struct Cli {
    /// Video URL to convert; prompted for interactively when omitted
    pub url: Option<String>,

    /// Target audio bitrate in kbps
    #[arg(short, long, default_value = "320", value_parser = ["128", "192", "320"])]
    pub quality: String,

    /// Directory to save the produced file into
    #[arg(short, long)]
    pub output: Option<String>,

    /// Backend base URL (overrides TUNEGRAB_API_URL)
    #[arg(long)]
    pub api_url: Option<String>,

    /// Skip the metadata preview confirmation
    #[arg(short = 'y', long)]
    pub yes: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validated quality selection.
    pub fn quality(&self) -> Quality {
        Quality::parse(&self.quality)
    }
}
