use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::PathBuf;

use prakriti::assessment::{parse_payload, PayloadFormat, ResponseSet};
use prakriti::config::Config;
use prakriti::history::{AssessmentRecord, AssessmentStore, JsonFileStore, MemoryStore};
use prakriti::prompt::Prompter;
use prakriti::submit::{submit_assessment, Submission};

const EXIT_SUCCESS: i32 = 0;
const EXIT_AUTH: i32 = 1;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;
const EXIT_STORAGE: i32 = 5;
const EXIT_OUTPUT: i32 = 6;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Answer the assessment questions interactively (default if no subcommand)
    Quiz,
    /// Classify answers from a JSON or YAML file
    Classify {
        /// Payload file; `-` or omitted reads from stdin
        file: Option<PathBuf>,
    },
    /// List the assessment questions and their options
    Questions,
    /// Show your past assessments, newest first
    History {
        /// Show every user's assessments instead of your own
        #[arg(long)]
        all: bool,
    },
    /// Create a config file interactively
    Init,
}

#[derive(Parser, Debug)]
#[command(name = "prakriti")]
#[command(about = "Prakriti assessment: find your dominant dosha", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/prakriti/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// User id to save assessments under (overrides config)
    #[arg(short, long, global = true)]
    user: Option<String>,

    /// Print machine-readable JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn init_logging(verbose: bool) {
    let level = if verbose { "prakriti=debug" } else { "prakriti=warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Read a payload from a file, or stdin for `-`/none
fn read_payload(file: Option<&PathBuf>) -> Result<ResponseSet> {
    let (text, format) = match file {
        Some(path) if path.as_os_str() != "-" => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            (text, PayloadFormat::from_path(path))
        }
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read payload from stdin")?;
            (text, PayloadFormat::Json)
        }
    };
    let payload = parse_payload(&text, format)?;
    ResponseSet::from_payload(payload)
}

/// Open the history file for a signed-in user; anonymous runs get a throwaway store.
fn open_store(config: &Config, user: Option<&str>) -> Result<Box<dyn AssessmentStore>> {
    match user {
        Some(_) => Ok(Box::new(JsonFileStore::open(config.history_path())?)),
        None => Ok(Box::new(MemoryStore::new())),
    }
}

fn print_submission(submission: &Submission, json: bool) -> Result<()> {
    if json {
        println!("{}", prakriti::output::format_json(submission)?);
    } else {
        let use_colors = prakriti::output::should_use_colors();
        println!(
            "{}",
            prakriti::output::format_submission(submission, use_colors)
        );
    }
    Ok(())
}

fn submit_and_print(
    responses: ResponseSet,
    config: &Config,
    user: Option<&str>,
    json: bool,
) -> i32 {
    let mut store = match open_store(config, user) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Storage error: {:#}", e);
            return EXIT_STORAGE;
        }
    };

    let submission = match submit_assessment(responses, user, store.as_mut()) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Storage error: {:#}", e);
            return EXIT_STORAGE;
        }
    };

    if let Err(e) = print_submission(&submission, json) {
        eprintln!("Output error: {:#}", e);
        return EXIT_OUTPUT;
    }
    EXIT_SUCCESS
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let command = cli.command.unwrap_or(Commands::Quiz);

    if let Commands::Init = command {
        let path = cli.config.map(PathBuf::from);
        if let Err(e) = prakriti::config::init::run_init_wizard(path) {
            eprintln!("Init failed: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    let config_path = cli.config.map(PathBuf::from);
    let config = match prakriti::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = prakriti::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let user = prakriti::session::current_user(cli.user.as_deref(), &config);
    tracing::debug!(user = user.as_deref().unwrap_or("(anonymous)"), "resolved user");

    let code = match command {
        Commands::Quiz => {
            let stdin = std::io::stdin();
            let mut prompter = Prompter::new(stdin.lock(), std::io::stdout());
            match prakriti::quiz::run_quiz(&mut prompter) {
                Ok(responses) => {
                    println!();
                    submit_and_print(responses, &config, user.as_deref(), cli.json)
                }
                Err(e) => {
                    eprintln!("Input error: {:#}", e);
                    EXIT_INPUT
                }
            }
        }
        Commands::Classify { file } => match read_payload(file.as_ref()) {
            Ok(responses) => {
                tracing::debug!(answers = responses.len(), "read payload");
                submit_and_print(responses, &config, user.as_deref(), cli.json)
            }
            Err(e) => {
                eprintln!("Input error: {:#}", e);
                EXIT_INPUT
            }
        },
        Commands::Questions => {
            let use_colors = prakriti::output::should_use_colors();
            println!("{}", prakriti::output::format_questions(use_colors));
            EXIT_SUCCESS
        }
        Commands::History { all } => {
            let scope = if all {
                Some(HistoryScope::All)
            } else {
                user.as_deref().map(HistoryScope::User)
            };
            match scope {
                None => {
                    eprintln!("No user set. Pass --user, set `user` in the config file, or use --all.");
                    EXIT_AUTH
                }
                Some(scope) => show_history(&config, scope, cli.json),
            }
        }
        Commands::Init => EXIT_SUCCESS,
    };

    std::process::exit(code);
}

/// Whose history to show
enum HistoryScope<'a> {
    User(&'a str),
    All,
}

fn show_history(config: &Config, scope: HistoryScope<'_>, json: bool) -> i32 {
    let records = match load_records(config, &scope) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Storage error: {:#}", e);
            return EXIT_STORAGE;
        }
    };

    if let Err(e) = print_history(&records, &scope, json) {
        eprintln!("Output error: {:#}", e);
        return EXIT_OUTPUT;
    }
    EXIT_SUCCESS
}

fn load_records(config: &Config, scope: &HistoryScope<'_>) -> Result<Vec<AssessmentRecord>> {
    let store = JsonFileStore::open(config.history_path())?;
    tracing::debug!(path = %store.path().display(), "reading history");
    match scope {
        HistoryScope::User(user) => store.list_for_user(user),
        HistoryScope::All => store.list_all(),
    }
}

fn print_history(records: &[AssessmentRecord], scope: &HistoryScope<'_>, json: bool) -> Result<()> {
    if json {
        println!("{}", prakriti::output::format_json(&records)?);
        return Ok(());
    }

    let use_colors = prakriti::output::should_use_colors();
    let text = match scope {
        HistoryScope::User(_) => prakriti::output::format_history(records, use_colors),
        HistoryScope::All => prakriti::output::format_all_history(records, use_colors),
    };
    println!("{}", text);
    Ok(())
}
