use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use newsprobe_core::{
    AnalysisReport, Analyzer, AnalyzerConfig, fetch_file, fetch_stdin, fetch_url,
};
use owo_colors::OwoColorize;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Analyze a news article for sentiment, clickbait, and source credibility
#[derive(Parser, Debug)]
#[command(name = "newsprobe")]
#[command(author = "Newsprobe Contributors")]
#[command(version)]
#[command(about = "Analyze news articles for sentiment, clickbait, and source credibility", long_about = None)]
struct Args {
    /// URL to fetch, local HTML file, or "-" for stdin
    #[arg(value_name = "INPUT")]
    input: String,

    /// Source URL for the credibility check when INPUT is a file or stdin
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Print the raw JSON report instead of the human-readable summary
    #[arg(long)]
    json: bool,

    /// Analyzer configuration file (JSON)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// HTTP timeout in seconds
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Enable verbose progress output
    #[arg(short, long)]
    verbose: bool,
}

/// Print a styled banner for verbose mode
fn print_banner() {
    eprintln!("\n{} {} {}", "Newsprobe".bold().bright_blue(), "v".dimmed(), VERSION.dimmed());
    eprintln!("{}", "Analyze news articles for sentiment and credibility".dimmed());
    eprintln!();
}

/// Print a styled step message
fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Right-align the label before styling so ANSI escape bytes do not count
/// toward the column width.
fn padded(name: &str) -> String {
    format!("{:>20}", name)
}

fn label(name: &str, value: &str) {
    println!("{}  {}", padded(name).dimmed(), value);
}

fn print_summary(report: &AnalysisReport) {
    label("URL:", &report.url);
    label("Headline:", &report.headline.bold().to_string());
    label("Sentiment:", &report.sentiment.to_string());
    label(
        "Clickbait:",
        &if report.clickbait { "yes".yellow().to_string() } else { "no".green().to_string() },
    );
    label("Credibility:", &report.source_credibility.to_string());
    label("Words:", &report.body.split_whitespace().count().to_string());
    println!();
    println!("{}", report.message.bright_green());
}

fn load_config(args: &Args) -> anyhow::Result<AnalyzerConfig> {
    let mut config = match &args.config {
        Some(path) => AnalyzerConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AnalyzerConfig::load_default().context("Failed to load default config")?,
    };

    if let Some(timeout) = args.timeout {
        config.fetch.timeout = timeout;
    }
    if let Some(user_agent) = &args.user_agent {
        config.fetch.user_agent = user_agent.clone();
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    if args.verbose {
        print_banner();
    }

    let config = load_config(&args)?;
    let analyzer = Analyzer::new(config.clone()).context("Invalid analyzer configuration")?;

    let report = if args.input.starts_with("http://") || args.input.starts_with("https://") {
        if args.verbose {
            print_step(1, 2, &format!("Fetching {}", args.input.bright_white().underline()));
        }
        let html = fetch_url(&args.input, &config.fetch)
            .await
            .context("Failed to fetch URL")?;

        if args.verbose {
            print_step(2, 2, "Analyzing article");
        }
        analyzer
            .analyze_html(&args.input, &html)
            .context("Failed to analyze article")?
    } else {
        let source_url = args.url.clone().unwrap_or_default();

        let html = if args.input == "-" {
            if args.verbose {
                print_step(1, 2, "Reading from stdin");
            }
            fetch_stdin().context("Failed to read from stdin")?
        } else {
            if args.verbose {
                print_step(1, 2, &format!("Reading {}", args.input.bright_white()));
            }
            fetch_file(&args.input).with_context(|| format!("Failed to read file: {}", args.input))?
        };

        if args.verbose {
            print_step(2, 2, "Analyzing article");
        }
        analyzer
            .analyze_html(&source_url, &html)
            .context("Failed to analyze article")?
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report.to_json())?);
    } else {
        print_summary(&report);
    }

    Ok(())
}
