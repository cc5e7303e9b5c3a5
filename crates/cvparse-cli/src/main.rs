use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use cvparse_core::{LlmClient, LlmConfig};

/// Resume Parser - extract text from PDF/DOCX resumes and structure it as JSON
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract plain text from a PDF or DOCX resume
    Extract {
        /// Path to the resume file
        file_path: PathBuf,

        /// Path to write the extracted text (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Extract text and structure it as JSON via the language model
    Parse {
        /// Path to the resume file
        file_path: PathBuf,

        /// API key (overrides LLM_API_KEY / OPENAI_API_KEY)
        #[arg(long)]
        api_key: Option<String>,

        /// Model identifier (overrides LLM_MODEL)
        #[arg(long)]
        model: Option<String>,

        /// Base URL of an OpenAI-compatible API (overrides LLM_BASE_URL)
        #[arg(long)]
        base_url: Option<String>,

        /// Path to write the JSON (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Extract { file_path, output } => extract(&file_path, output),
        Command::Parse {
            file_path,
            api_key,
            model,
            base_url,
            output,
            compact,
        } => parse(&file_path, api_key, model, base_url, output, compact).await,
    }
}

fn extract(file_path: &PathBuf, output: Option<PathBuf>) -> anyhow::Result<()> {
    let text = cvparse_ingest::extract_text(file_path)?;
    let mut writer = open_writer(output)?;
    writeln!(writer, "{text}")?;
    Ok(())
}

async fn parse(
    file_path: &PathBuf,
    api_key: Option<String>,
    model: Option<String>,
    base_url: Option<String>,
    output: Option<PathBuf>,
    compact: bool,
) -> anyhow::Result<()> {
    // Resolve configuration: CLI flags > env vars > defaults
    let mut config = LlmConfig::from_env();
    if api_key.is_some() {
        config.api_key = api_key;
    }
    if let Some(model) = model {
        config.model = model;
    }
    if let Some(base_url) = base_url {
        config.base_url = base_url;
    }

    let text = cvparse_ingest::extract_text(file_path)?;

    let client = LlmClient::new(config);
    let parsed = client.parse_resume(&text).await?;

    let json = if compact {
        serde_json::to_string(&parsed)?
    } else {
        serde_json::to_string_pretty(&parsed)?
    };

    let mut writer = open_writer(output)?;
    writeln!(writer, "{json}")?;
    Ok(())
}

fn open_writer(output: Option<PathBuf>) -> anyhow::Result<Box<dyn Write>> {
    Ok(if let Some(path) = output {
        Box::new(std::fs::File::create(path)?)
    } else {
        Box::new(std::io::stdout())
    })
}
