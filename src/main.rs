//! packaging-audit: Packaging intelligence maturity audit
//!
//! Interviews a brand executive, scores the answers into nine capability
//! categories and reports the maturity level with priority initiatives.

#![allow(clippy::struct_excessive_bools, clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use packaging_audit::{
    cli,
    config::{AppConfig, ConfigPreset, Validatable},
    model::Section,
    pipeline::exit_codes,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with scoring info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nSurvey:",
        "\n  20 questions in 3 sections (strategic, operational, capabilities)",
        "\n  answers score 2, 5 or 9",
        "\n\nOutput Formats:",
        "\n  tui, summary, json, markdown"
    )
}

#[derive(Parser)]
#[command(name = "packaging-audit")]
#[command(version, long_version = build_long_version())]
#[command(about = "Packaging intelligence maturity audit", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success (or score at or above --min-score)
    1  Overall score below --min-score
    3  Error occurred

EXAMPLES:
    # Take the audit interactively
    packaging-audit run

    # Score a saved answer file without the narrative
    packaging-audit score answers.yaml --no-narrative -o summary

    # CI gate on a minimum maturity score
    packaging-audit score answers.yaml --preset ci --min-score 6

    # List the questions of one section as JSON
    packaging-audit questions --section strategic -o json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Options shared by every command that produces a report
#[derive(Parser)]
struct ReportArgs {
    /// Output format (auto detects TTY: tui if interactive, summary otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 when the overall score is below this value
    #[arg(long)]
    min_score: Option<f64>,

    /// Skip the AI narrative analysis
    #[arg(long)]
    no_narrative: bool,

    /// Narrative model name
    #[arg(long, env = "PACKAGING_AUDIT_MODEL")]
    model: Option<String>,

    /// URL that receives each submission as a JSON POST
    #[arg(long, env = "PACKAGING_AUDIT_WEBHOOK")]
    webhook: Option<String>,

    /// Append each submission to a local NDJSON file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Configuration preset (default, offline, ci)
    #[arg(long)]
    preset: Option<String>,
}

/// Arguments for the `score` subcommand
#[derive(Parser)]
struct ScoreArgs {
    /// Answer file (YAML or JSON) with a profile and all answers
    answers: PathBuf,

    #[command(flatten)]
    report: ReportArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Take the audit interactively
    Run(ReportArgs),

    /// Score a saved answer file
    Score(ScoreArgs),

    /// Print the question bank
    Questions {
        /// Only print one section
        #[arg(short, long, value_enum)]
        section: Option<Section>,

        /// Output format (json, or text for anything else)
        #[arg(short, long, default_value = "summary")]
        output: ReportFormat,

        /// Output file path (stdout if not specified)
        #[arg(short = 'O', long)]
        output_file: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .packaging-audit.yaml in the current directory
    Init,
}

/// Layer preset, config file and command-line flags, in that order.
fn resolve_config(
    args: ReportArgs,
    config_path: Option<&std::path::Path>,
    no_color: bool,
) -> Result<AppConfig> {
    let preset = match args.preset.as_deref() {
        Some(name) => Some(ConfigPreset::from_name(name).with_context(|| {
            format!("unknown preset '{name}' (expected default, offline or ci)")
        })?),
        None => None,
    };

    let (file_config, loaded_from) = packaging_audit::config::load_or_default(config_path);
    if let Some(path) = &loaded_from {
        tracing::debug!("Loaded config from {}", path.display());
    }

    let mut builder = AppConfig::builder()
        .narrative(!args.no_narrative)
        .webhook_url(args.webhook)
        .log_file(args.log_file)
        .output_format(args.output)
        .output_file(args.output_file)
        .no_color(no_color)
        .min_score(args.min_score);
    if let Some(model) = args.model {
        builder = builder.model(model);
    }

    let mut config = preset.map_or_else(AppConfig::default, AppConfig::from_preset);
    config.merge(&file_config);
    config.merge(&builder.build());

    let errors = config.validate();
    if !errors.is_empty() {
        let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
        anyhow::bail!("invalid configuration:\n  {}", details.join("\n  "));
    }
    Ok(config)
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.quiet {
        "warn"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:?}");
        std::process::exit(exit_codes::ERROR);
    }
}

fn run(cli: Cli) -> Result<()> {
    // Dispatch to command handlers
    match cli.command {
        Commands::Run(args) => {
            let config = resolve_config(args, cli.config.as_deref(), cli.no_color)?;
            let exit_code = cli::run_audit(&config, cli.quiet)?;
            if exit_code != exit_codes::SUCCESS {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Score(args) => {
            let config = resolve_config(args.report, cli.config.as_deref(), cli.no_color)?;
            let exit_code = cli::run_score(&args.answers, &config, cli.quiet)?;
            if exit_code != exit_codes::SUCCESS {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Questions {
            section,
            output,
            output_file,
        } => cli::run_questions(output, section, output_file),

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "packaging-audit", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema = packaging_audit::config::generate_json_schema()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    packaging_audit::config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    packaging_audit::config::user_config_dir().map(|p| p.display().to_string()),
                    ::dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in &[
                    ".packaging-audit.yaml",
                    ".packaging-audit.yml",
                    "packaging-audit.yaml",
                    "packaging-audit.yml",
                ] {
                    eprintln!("  {name}");
                }
                eprintln!();
                match packaging_audit::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".packaging-audit.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = packaging_audit::config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}
