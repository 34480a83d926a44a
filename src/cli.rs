use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "b3acon")]
#[command(about = "A CLI SEO analyzer", long_about = None)]
pub struct Cli {
    /// The URL or bare domain to analyze
    #[arg(value_name = "URL")]
    pub url: String,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub output: String,

    /// Save report to file
    #[arg(short, long)]
    pub save: Option<String>,

    /// Run PageSpeed analysis (simulated when no API key is configured)
    #[arg(long)]
    pub pagespeed: bool,

    /// Check links for broken targets
    #[arg(long)]
    pub check_links: bool,

    /// Submit the URL to IndexNow after analysis
    #[arg(long)]
    pub indexnow: bool,

    /// HTTP timeout in seconds for the page fetch
    #[arg(short, long, default_value_t = 30)]
    pub timeout: u64,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to configuration file (JSON, TOML, or YAML)
    #[arg(long)]
    pub config: Option<String>,
}
