//! scribe - CLI entry point.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use scribe::spinner::with_spinner;
use scribe::{CommitLog, CommitRecord, Config, DraftGenerator, Provider, Style, format_commits_for_ai};

/// Environment variable controlling the log filter.
const LOG_ENV_VAR: &str = "SCRIBE_LOG";

/// Commit messages longer than this are shortened in the summary listing.
const SUMMARY_WIDTH: usize = 60;

/// Turn your git commits into tweets.
#[derive(Parser, Debug)]
#[command(name = "scribe")]
#[command(about = "Scribe - Turn your git commits into tweets")]
#[command(version)]
#[command(after_help = "Examples:
  scribe                                    # Generate tweets from today's commits
  scribe --since \"2 days ago\"               # Commits from last 2 days
  scribe --style casual                     # Use casual tone
  scribe --author \"meesh\"                   # Filter by author
  scribe --repo ../other-project            # Analyze different repo
  scribe --thread                           # Generate a tweet thread
  scribe --provider openai                  # Use OpenAI instead of DeepSeek")]
struct Cli {
    /// Path to git repository
    #[arg(long, default_value = ".")]
    repo: PathBuf,

    /// Time range for commits, e.g. "yesterday", "2 days ago", "3 hours ago", "2024-01-01"
    #[arg(long, default_value = "today")]
    since: String,

    /// Filter commits by author name (case-insensitive substring)
    #[arg(long)]
    author: Option<String>,

    /// Tweet style
    #[arg(long, value_enum, default_value_t = Style::Technical)]
    style: Style,

    /// Number of tweet options to generate
    #[arg(long, default_value_t = 3)]
    options: usize,

    /// Generate a tweet thread instead of single tweets
    #[arg(long)]
    thread: bool,

    /// AI provider to use (deepseek or openai)
    #[arg(long, default_value = "deepseek")]
    provider: String,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\n❌ Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "scribe=debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

async fn run(cli: &Cli) -> Result<ExitCode> {
    // Step 1: Load configuration and resolve the provider
    let config = Config::load().context("Failed to load configuration")?;
    let provider: Provider = cli.provider.parse()?;

    // Step 2: Collect commits
    println!("🔍 Analyzing commits in {}...", cli.repo.display());

    let log = CommitLog::open(&cli.repo)?;
    let commits = log.get_commits(&cli.since, cli.author.as_deref())?;

    if commits.is_empty() {
        print_no_commits(cli);
        return Ok(ExitCode::FAILURE);
    }

    print_commit_summary(&commits);

    // Step 3: Format for the model
    let commits_text = format_commits_for_ai(&commits);

    // Step 4: Generate drafts
    println!("\n🤖 Generating tweets using {}...", provider);
    let generator = DraftGenerator::new(&config, provider)?;

    if cli.thread {
        let tweets = with_spinner(
            "Writing thread...",
            generator.generate_thread(&commits_text),
        )
        .await?;

        println!("\n📝 Tweet Thread:\n");
        for (i, tweet) in tweets.iter().enumerate() {
            println!("{}. {}", i + 1, tweet);
            if i + 1 < tweets.len() {
                println!();
            }
        }
    } else {
        let tweets = with_spinner(
            "Writing tweets...",
            generator.generate_tweets(&commits_text, cli.style, cli.options),
        )
        .await?;

        println!("\n📝 Tweet Options ({} style):\n", cli.style);
        for (i, tweet) in tweets.iter().enumerate() {
            println!("{}. {}\n", i + 1, tweet);
        }
    }

    println!("✨ Copy and paste your favorite!");

    Ok(ExitCode::SUCCESS)
}

fn print_no_commits(cli: &Cli) {
    println!("\n❌ No commits found for the specified criteria.");
    println!("   Time range: {}", cli.since);
    if let Some(author) = &cli.author {
        println!("   Author: {}", author);
    }
    println!("\nTry adjusting your --since or --author parameters.");
}

fn print_commit_summary(commits: &[CommitRecord]) {
    println!("\n✅ Found {} commit(s)", commits.len());
    for (i, commit) in commits.iter().enumerate() {
        println!("   {}. {}", i + 1, shorten(&commit.message, SUMMARY_WIDTH));
    }
}

/// Cut `text` to `width` characters, appending "..." when anything was cut.
fn shorten(text: &str, width: usize) -> String {
    match text.char_indices().nth(width) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
