//! Command-line front end for note analysis.
//!
//! # Responsibility
//! - Read one note from a file or stdin and run a single analysis command.
//! - Load optional JSON config and stopword overrides.
//!
//! # Invariants
//! - Analysis output goes to stdout; diagnostics go to stderr.
//! - Exit status is non-zero only for I/O, config or argument failures.

use clap::{Parser, Subcommand};
use log::info;
use notesense_core::{
    core_version, init_stderr_logging, AnalysisConfig, ConfigError, NoteInsights, TextAnalyzer,
};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "notesense")]
#[command(about = "Offline summaries, titles and tags for note text", long_about = None)]
struct Cli {
    /// Note file to read (default: stdin)
    #[arg(short, long, global = true)]
    file: Option<PathBuf>,

    /// JSON file with analysis thresholds
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Newline-delimited stopword list replacing the bundled one
    #[arg(long, global = true)]
    stopwords: Option<PathBuf>,

    /// Treat input as HTML and strip markup first
    #[arg(long, global = true)]
    html: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log level for stderr diagnostics
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
enum Commands {
    /// Extractive summary
    Summarize,
    /// Top sentences as a list
    Bullets {
        #[arg(short = 'n', long, default_value = "5")]
        count: usize,
    },
    /// Single title suggestion
    Title,
    /// Several distinct title suggestions
    Titles {
        #[arg(short = 'n', long, default_value = "3")]
        count: usize,
    },
    /// Tag suggestions
    Tags {
        #[arg(short = 'n', long, default_value = "5")]
        max: usize,
    },
    /// Most frequent content words
    Keywords {
        #[arg(short = 'n', long, default_value = "10")]
        top: usize,
    },
    /// Most frequent two-word phrases
    Phrases {
        #[arg(short = 'n', long, default_value = "5")]
        top: usize,
    },
    /// Plain text from HTML input
    StripHtml,
    /// Every analysis at once
    Analyze,
    /// Print the core version
    Version,
}

#[derive(Debug)]
enum CliError {
    Io { path: String, source: std::io::Error },
    ConfigParse { path: PathBuf, source: serde_json::Error },
    Config(ConfigError),
    Logging(String),
    Render(serde_json::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "failed to read `{path}`: {source}"),
            Self::ConfigParse { path, source } => {
                write!(f, "invalid config `{}`: {source}", path.display())
            }
            Self::Config(err) => write!(f, "{err}"),
            Self::Logging(message) => write!(f, "logging setup failed: {message}"),
            Self::Render(err) => write!(f, "failed to render output: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::ConfigParse { source, .. } => Some(source),
            Self::Config(err) => Some(err),
            Self::Logging(_) => None,
            Self::Render(err) => Some(err),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

/// Result of one command, rendered as text or JSON.
#[derive(Debug, Clone, PartialEq)]
enum Output {
    Text(String),
    List(Vec<String>),
    Insights(Box<NoteInsights>),
}

impl Output {
    fn render(&self, json: bool) -> Result<String, CliError> {
        if json {
            let rendered = match self {
                Self::Text(text) => serde_json::to_string_pretty(text),
                Self::List(items) => serde_json::to_string_pretty(items),
                Self::Insights(insights) => serde_json::to_string_pretty(insights),
            };
            return rendered.map_err(CliError::Render);
        }

        Ok(match self {
            Self::Text(text) => text.clone(),
            Self::List(items) => items.join("\n"),
            Self::Insights(insights) => render_insights(insights),
        })
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(rendered) => {
            println!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("notesense: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<String, CliError> {
    init_stderr_logging(&cli.log_level).map_err(CliError::Logging)?;

    if cli.command == Commands::Version {
        return Output::Text(core_version().to_string()).render(cli.json);
    }

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AnalysisConfig::default(),
    };
    let analyzer = match &cli.stopwords {
        Some(path) => TextAnalyzer::with_stopwords_file(path, config)?,
        None => TextAnalyzer::with_config(config)?,
    };

    let raw = read_input(cli.file.as_deref())?;
    let text = if cli.html {
        analyzer.strip_html(&raw)
    } else {
        raw
    };
    info!(
        "event=cli_run module=cli status=start input_chars={} html={}",
        text.len(),
        cli.html
    );

    execute(&cli.command, &analyzer, &text).render(cli.json)
}

fn execute(command: &Commands, analyzer: &TextAnalyzer, text: &str) -> Output {
    match command {
        Commands::Summarize => Output::Text(analyzer.summarize(text)),
        Commands::Bullets { count } => {
            Output::List(analyzer.summarize_to_bullet_points(text, *count))
        }
        Commands::Title => Output::Text(analyzer.suggest_title(text)),
        Commands::Titles { count } => {
            Output::List(analyzer.suggest_multiple_titles(text, *count))
        }
        Commands::Tags { max } => Output::List(analyzer.suggest_tags(text, *max)),
        Commands::Keywords { top } => Output::List(analyzer.extract_keywords(text, *top)),
        Commands::Phrases { top } => Output::List(analyzer.extract_key_phrases(text, *top)),
        Commands::StripHtml => Output::Text(analyzer.strip_html(text)),
        Commands::Analyze => Output::Insights(Box::new(analyzer.analyze_note(text))),
        Commands::Version => Output::Text(core_version().to_string()),
    }
}

fn load_config(path: &Path) -> Result<AnalysisConfig, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let config: AnalysisConfig =
        serde_json::from_str(&raw).map_err(|source| CliError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
    config.validate()?;
    Ok(config)
}

fn read_input(file: Option<&Path>) -> Result<String, CliError> {
    match file {
        Some(path) => std::fs::read_to_string(path).map_err(|source| CliError::Io {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(|source| CliError::Io {
                    path: "<stdin>".to_string(),
                    source,
                })?;
            Ok(buffer)
        }
    }
}

fn render_insights(insights: &NoteInsights) -> String {
    let category = insights
        .category
        .map_or("-", |category| category.as_str());
    let hashtags = insights
        .tags
        .iter()
        .map(|tag| format!("#{tag}"))
        .collect::<Vec<_>>()
        .join(" ");

    let mut lines = vec![
        format!("Title: {}", insights.title),
        format!("Category: {category}"),
        format!("Tags: {hashtags}"),
        format!("Keywords: {}", insights.keywords.join(", ")),
        format!("Phrases: {}", insights.key_phrases.join(", ")),
        format!(
            "Words: {}  Sentences: {}",
            insights.word_count, insights.sentence_count
        ),
        "Summary:".to_string(),
    ];
    lines.extend(insights.summary.lines().map(|line| format!("  {line}")));
    lines.join("\n")
}
