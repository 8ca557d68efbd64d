use clap::Parser;

/// RichEdit: a native window hosting the rich-text editor page.
#[derive(Parser, Debug)]
#[command(name = "richedit", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Initial document HTML, replacing `editor.initial_html`.
    #[arg(long)]
    pub html: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
