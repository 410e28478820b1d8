use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "serp-extract")]
#[command(about = "Extract structured records from a saved search results page")]
#[command(version)]
pub struct Args {
    /// HTML file to read ("-" or omitted for stdin)
    pub input: Option<PathBuf>,

    /// Host the page was fetched from, for resolving relative links
    #[arg(long)]
    pub hostname: Option<String>,

    /// Path to a JSON extractor configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Fail on related queries without a navigable link
    #[arg(long, default_value_t = false)]
    pub strict: bool,

    /// Pretty-print the JSON output
    #[arg(short, long, default_value_t = false)]
    pub pretty: bool,
}

impl Args {
    /// The input file, or `None` when reading from stdin
    pub fn input_path(&self) -> Option<&PathBuf> {
        self.input
            .as_ref()
            .filter(|path| path.as_os_str() != "-")
    }
}
