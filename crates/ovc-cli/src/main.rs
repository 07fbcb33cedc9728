//! Developer CLI for encoded variant option value fields.
//!
//! Decodes, queries and builds the `v1_` strings found in a product's
//! `encodedVariantExistence` and `encodedVariantAvailability` fields.
//!
//! # Usage
//!
//! ```bash
//! ovc [OPTIONS] <COMMAND>
//!
//! # List every encoded combination
//! ovc decode 'v1_0:0-2,1:0-2,'
//!
//! # Check a full or partial combination
//! ovc contains 'v1_0:0:0,,1:1:1,,' 1,1
//!
//! # Resolve labels to indices
//! ovc indices --options '[["Red","Blue"],["S","M"]]' Blue M
//!
//! # Build a field from combinations
//! ovc encode '[[0,0],[0,1],[1,1]]'
//!
//! # Per-value states of a product for a selection
//! ovc --format json options product.json --select Color=Red
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

use std::io::Write;

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::eyre;
use ovc_codec::{Decoder, encode_option_values};
use ovc_core::{
    Config, DecodedOptionValues, OptionStates, OptionValueIndex, OutputConfig, OutputFormat,
    Product, SelectedOptions,
};
use ovc_index::{ExistenceIndex, get_option_value_indices, option_value_states};
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

// =============================================================================
// CLI ARGUMENT TYPES
// =============================================================================

/// Inspect and build encoded variant option value fields.
#[derive(Parser)]
#[command(name = "ovc", version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    command: Commands,

    /// Path to a JSON configuration file.
    #[arg(short, long, global = true, env = "OVC_CONFIG")]
    config: Option<Utf8PathBuf>,

    /// Output format (overrides the configuration file).
    #[arg(short, long, global = true, value_enum)]
    format: Option<FormatArg>,

    /// Enable verbose logging (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Print every combination encoded in a field.
    Decode {
        /// Encoded field, e.g. `v1_0:0-2,1:0-2,`.
        encoded: String,
    },

    /// Check whether a full or partial combination is encoded in a field.
    Contains {
        /// Encoded field.
        encoded: String,

        /// Comma-separated option value indices, e.g. `0,1`.
        #[arg(value_delimiter = ',')]
        indices: Vec<OptionValueIndex>,
    },

    /// Resolve option value labels to their indices.
    Indices {
        /// Option value lists as JSON, e.g. `[["Red","Blue"],["S","M"]]`.
        #[arg(long)]
        options: String,

        /// One label per option, in option order.
        values: Vec<String>,
    },

    /// Encode combinations given as a JSON list of index lists.
    Encode {
        /// Combinations as JSON, e.g. `[[0,0],[0,1],[1,1]]`.
        combinations: String,
    },

    /// Print existence and availability of every option value of a product.
    Options {
        /// Product JSON file with Storefront field names.
        product: Utf8PathBuf,

        /// Selected option value, as `NAME=VALUE`. Repeatable.
        #[arg(short, long = "select", value_parser = parse_selection)]
        select: Vec<(String, String)>,
    },
}

/// Output format flag.
#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Plain text.
    Text,
    /// JSON.
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Parses a `NAME=VALUE` selection.
fn parse_selection(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name.to_owned(), value.to_owned())),
        _ => Err(format!("expected NAME=VALUE, got '{raw}'")),
    }
}

// =============================================================================
// INITIALIZATION FUNCTIONS
// =============================================================================

/// Initializes the tracing subscriber for logging.
///
/// Respects the `RUST_LOG` environment variable if set. Otherwise, uses
/// `debug` level if `--verbose` is set, or `info` level by default. Logs go
/// to stderr so command output can be piped.
fn init_tracing(verbose: bool, no_color: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "info" };
        EnvFilter::new(level)
    });

    // Check if colors should be disabled (flag or NO_COLOR env var)
    let use_ansi = !no_color && std::env::var("NO_COLOR").is_err();

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(false)
                .with_ansi(use_ansi)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

/// Builds a [`Config`] from the optional file and CLI overrides.
///
/// # Errors
///
/// Returns an error if the configuration file cannot be loaded or is invalid.
fn load_config(cli: &Cli) -> color_eyre::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            debug!(path = %path, "Loading configuration");
            Config::from_json_file(path)?
        }
        None => Config::default(),
    };

    if let Some(format) = cli.format {
        config.output.format = format.into();
    }

    Ok(config)
}

// =============================================================================
// COMMAND IMPLEMENTATIONS
// =============================================================================

fn run_decode(config: &Config, encoded: &str) -> color_eyre::Result<()> {
    let decoder = Decoder::new(config.decode);
    debug!(
        encoded_len = encoded.len(),
        max_combinations = ?decoder.config().max_combinations,
        "Decoding"
    );

    let decoded = decoder.decode(Some(encoded))?;
    debug!(combinations = decoded.len(), depth = decoded.depth(), "Decoded");

    print_rendered(&render(&config.output, &decoded, render_combinations)?);
    Ok(())
}

fn run_contains(
    config: &Config,
    encoded: &str,
    indices: &[OptionValueIndex],
) -> color_eyre::Result<()> {
    print_rendered(&contains_report(config, encoded, indices)?);
    Ok(())
}

/// Renders whether `indices` is encoded in `encoded`.
fn contains_report(
    config: &Config,
    encoded: &str,
    indices: &[OptionValueIndex],
) -> color_eyre::Result<String> {
    #[derive(Serialize)]
    struct Membership<'a> {
        target: &'a [OptionValueIndex],
        exists: bool,
    }

    let index = ExistenceIndex::with_config(config.decode, config.cache);
    let exists = index.contains(indices, encoded)?;
    log_cache_stats(&index);

    let membership = Membership {
        target: indices,
        exists,
    };
    render(&config.output, &membership, |m| m.exists.to_string())
}

fn run_indices(config: &Config, options: &str, values: &[String]) -> color_eyre::Result<()> {
    let lists: Vec<Vec<String>> =
        serde_json::from_str(options).map_err(|e| eyre!("Invalid --options JSON: {e}"))?;

    let indices = get_option_value_indices(values, &lists)?;
    print_rendered(&render(&config.output, indices.as_slice(), join_indices)?);
    Ok(())
}

fn run_encode(config: &Config, combinations: &str) -> color_eyre::Result<()> {
    let combinations: Vec<Vec<OptionValueIndex>> = serde_json::from_str(combinations)
        .map_err(|e| eyre!("Invalid combinations JSON: {e}"))?;

    let encoded = encode_option_values(&combinations)?;
    debug!(
        combinations = combinations.len(),
        encoded_len = encoded.len(),
        "Encoded"
    );

    print_rendered(&render(&config.output, &encoded, String::clone)?);
    Ok(())
}

fn run_options(
    config: &Config,
    product_path: &Utf8Path,
    select: Vec<(String, String)>,
) -> color_eyre::Result<()> {
    print_rendered(&options_report(config, product_path, select)?);
    Ok(())
}

/// Loads a product file and renders the option value states for `select`.
fn options_report(
    config: &Config,
    product_path: &Utf8Path,
    select: Vec<(String, String)>,
) -> color_eyre::Result<String> {
    if !product_path.exists() {
        return Err(eyre!("Product file does not exist: {product_path}"));
    }

    let content = std::fs::read_to_string(product_path.as_std_path())?;
    let product: Product = serde_json::from_str(&content)
        .map_err(|e| eyre!("Invalid product JSON in {product_path}: {e}"))?;
    debug!(handle = %product.handle, options = product.options.len(), "Loaded product");

    let selected: SelectedOptions = select.into_iter().collect();
    let index = ExistenceIndex::with_config(config.decode, config.cache);
    let states = option_value_states(&product, &selected, &index)?;
    log_cache_stats(&index);

    render(&config.output, states.as_slice(), render_states)
}

fn log_cache_stats(index: &ExistenceIndex) {
    let stats = index.stats();
    debug!(
        entries = index.len(),
        hits = stats.hits,
        misses = stats.misses,
        builds = stats.builds,
        hit_rate = format!("{:.1}%", stats.hit_rate_percent()),
        "Existence index stats"
    );
}

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

/// Renders `value` as JSON or, for text output, with `text`.
fn render<T, F>(output: &OutputConfig, value: &T, text: F) -> color_eyre::Result<String>
where
    T: Serialize + ?Sized,
    F: FnOnce(&T) -> String,
{
    if output.format != OutputFormat::Json {
        return Ok(text(value));
    }

    let json = if output.pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    json.map_err(|e| eyre!("Failed to serialize JSON: {e}"))
}

fn print_rendered(rendered: &str) {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    let _ = writeln!(handle, "{}", rendered.trim_end());
}

fn join_indices(indices: &[OptionValueIndex]) -> String {
    indices
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// One combination per line.
fn render_combinations(decoded: &DecodedOptionValues) -> String {
    decoded
        .iter()
        .map(|combination| join_indices(combination))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Option names followed by one aligned line per value; `*` marks the
/// selection.
fn render_states(states: &[OptionStates]) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    for option in states {
        let width = option
            .values
            .iter()
            .map(|value| value.name.len())
            .max()
            .unwrap_or(0);

        let _ = writeln!(output, "{}:", option.name);
        for value in &option.values {
            let marker = if value.selected { '*' } else { ' ' };
            let status = match (value.exists, value.available) {
                (true, true) => "available",
                (true, false) => "sold out",
                (false, _) => "not offered",
            };
            let _ = writeln!(output, "  {marker} {:<width$}  {status}", value.name);
        }
    }

    output
}

// =============================================================================
// MAIN ENTRY POINT
// =============================================================================

/// Application entry point.
fn main() -> color_eyre::Result<()> {
    // 1. Install color-eyre FIRST (before any potential panics)
    color_eyre::install()?;

    // 2. Parse CLI arguments
    let cli = Cli::parse();

    // 3. Initialize tracing (handles --no-color for log output)
    init_tracing(cli.verbose, cli.no_color);

    // 4. Load configuration, then route to the command
    let config = load_config(&cli)?;

    match cli.command {
        Commands::Decode { encoded } => run_decode(&config, &encoded),
        Commands::Contains { encoded, indices } => run_contains(&config, &encoded, &indices),
        Commands::Indices { options, values } => run_indices(&config, &options, &values),
        Commands::Encode { combinations } => run_encode(&config, &combinations),
        Commands::Options { product, select } => run_options(&config, &product, select),
    }
}
