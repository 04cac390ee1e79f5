//! CLI binary for llava-probe.
//!
//! A thin shim over the library crate that maps CLI flags to `ProbeConfig`,
//! runs one probe, and prints the result to stdout.

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use llava_probe::config::{DEFAULT_ENDPOINT, DEFAULT_MAX_TOKENS, DEFAULT_MIME_TYPE, DEFAULT_MODEL};
use llava_probe::prompts::DEFAULT_USER_PROMPT;
use llava_probe::{describe_image, ProbeConfig};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const DEFAULT_IMAGE: &str = "path/to/your/image.jpg";

const AFTER_HELP: &str = r#"EXAMPLES:
  # Probe the local server with an image
  llava-probe cat.png

  # Server on another port
  llava-probe --endpoint http://localhost:9090 cat.png

  # Give up after two minutes instead of waiting forever
  llava-probe --timeout 120 cat.png

  # Machine-readable result
  llava-probe --json cat.png | jq .result

SERVER:
  The probe expects a llava server answering OpenAI-style chat completions:
    llava-server --model ggml-model.gguf --mmproj mmproj.gguf --port 8080

  The image is always declared as image/png, which is the only data URI the
  llava server accepts. Other formats are sent as-is under that label.

EXIT STATUS:
  0   a response was printed (including "Error: <status> - <body>")
  1   the image could not be read, the server was unreachable, or a 200
      response did not contain choices[0].message.content
"#;

/// Send one image to a local llava server and print its description.
#[derive(Parser, Debug)]
#[command(
    name = "llava-probe",
    version,
    about = "Send one image to a local llava server and print its description",
    color = clap::ColorChoice::Auto,
    after_long_help = AFTER_HELP
)]
struct Cli {
    /// Image file to send.
    #[arg(env = "LLAVA_PROBE_IMAGE", default_value = DEFAULT_IMAGE)]
    image: PathBuf,

    /// Chat-completion endpoint.
    #[arg(long, env = "LLAVA_PROBE_ENDPOINT", default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Model identifier sent in the request.
    #[arg(long, env = "LLAVA_PROBE_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// Max tokens the server may generate.
    #[arg(long, env = "LLAVA_PROBE_MAX_TOKENS", default_value_t = DEFAULT_MAX_TOKENS,
          value_parser = clap::value_parser!(u32).range(1..))]
    max_tokens: u32,

    /// Question asked about the image.
    #[arg(long, env = "LLAVA_PROBE_PROMPT", default_value = DEFAULT_USER_PROMPT)]
    prompt: String,

    /// Path to a text file containing a custom system prompt.
    #[arg(long, env = "LLAVA_PROBE_SYSTEM_PROMPT")]
    system_prompt: Option<PathBuf>,

    /// MIME type declared in the image data URI.
    #[arg(long, env = "LLAVA_PROBE_MIME_TYPE", default_value = DEFAULT_MIME_TYPE)]
    mime_type: String,

    /// Request timeout in seconds. Waits indefinitely when unset.
    #[arg(long, env = "LLAVA_PROBE_TIMEOUT",
          value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    /// Output the full result as JSON instead of a single line.
    #[arg(long, env = "LLAVA_PROBE_JSON")]
    json: bool,

    /// Disable the waiting spinner.
    #[arg(long, env = "LLAVA_PROBE_NO_PROGRESS")]
    no_progress: bool,

    /// Enable DEBUG-level tracing logs.
    #[arg(short, long, env = "LLAVA_PROBE_VERBOSE")]
    verbose: bool,

    /// Suppress all logs except errors.
    #[arg(short, long, env = "LLAVA_PROBE_QUIET")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // ── Logging setup ────────────────────────────────────────────────────
    // Logs go to stderr; stdout carries only the result.
    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_writer(io::stderr)
        .init();

    let config = build_config(&cli).await?;

    // ── Run probe ────────────────────────────────────────────────────────
    let spinner = (!cli.quiet && !cli.no_progress && !cli.json && !cli.verbose)
        .then(|| waiting_spinner(&config.endpoint));

    let result = describe_image(&cli.image, &config).await;

    if let Some(bar) = spinner {
        bar.finish_and_clear();
    }

    let output = result.with_context(|| format!("Probe of '{}' failed", cli.image.display()))?;

    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&output).context("Failed to serialize result")?
        );
    } else {
        println!("{}", output.display_line());
    }

    Ok(())
}

fn waiting_spinner(endpoint: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {prefix:.bold}  {msg}  ⏱ {elapsed}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏", "⠿"]),
    );
    bar.set_prefix("Waiting");
    bar.set_message(format!("for {endpoint}…"));
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

async fn build_config(cli: &Cli) -> Result<ProbeConfig> {
    let mut builder = ProbeConfig::builder()
        .endpoint(&cli.endpoint)
        .model(&cli.model)
        .max_tokens(cli.max_tokens)
        .prompt(&cli.prompt)
        .mime_type(&cli.mime_type)
        .timeout_secs(cli.timeout);

    if let Some(ref path) = cli.system_prompt {
        let prompt = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read system prompt file: {}", path.display()))?;
        builder = builder.system_prompt(prompt.trim_end());
    }

    builder.build().context("Invalid configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[tokio::test]
    async fn defaults_reproduce_stock_request() {
        let cli = Cli::parse_from(["llava-probe"]);
        assert_eq!(cli.image, PathBuf::from("path/to/your/image.jpg"));

        let config = build_config(&cli).await.unwrap();
        assert_eq!(config, ProbeConfig::default());
    }

    #[tokio::test]
    async fn flags_map_onto_config() {
        let cli = Cli::parse_from([
            "llava-probe",
            "--endpoint",
            "http://127.0.0.1:9090",
            "--model",
            "bakllava",
            "--max-tokens",
            "42",
            "--timeout",
            "5",
            "cat.png",
        ]);
        let config = build_config(&cli).await.unwrap();
        assert_eq!(cli.image, PathBuf::from("cat.png"));
        assert_eq!(config.endpoint, "http://127.0.0.1:9090");
        assert_eq!(config.model, "bakllava");
        assert_eq!(config.max_tokens, 42);
        assert_eq!(config.timeout_secs, Some(5));
    }

    #[test]
    fn zero_max_tokens_rejected_by_parser() {
        assert!(Cli::try_parse_from(["llava-probe", "--max-tokens", "0"]).is_err());
    }
}
