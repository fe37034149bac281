use clap::{Parser, Subcommand};
use std::path::PathBuf;

use parpt::commands::{self, CreateOptions};
use parpt::export::{MarkdownFileSink, ReportSink, StdoutSink};
use parpt::project::{JsonFileStorage, ProjectError, ProjectService, ProjectStore};
use parpt::prompt::StdinInput;

const EXIT_SUCCESS: i32 = 0;
const EXIT_VALIDATION: i32 = 1;
const EXIT_STORAGE: i32 = 2;
const EXIT_CONFLICT: i32 = 3;
const EXIT_CONFIG: i32 = 4;
const EXIT_NOT_FOUND: i32 = 5;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Create a new project, prompting for any value not given
    Create {
        /// The name of the project
        #[arg(short, long)]
        name: Option<String>,
        /// Description of the project
        #[arg(short, long)]
        description: Option<String>,
        /// Impact score (1-5)
        #[arg(short, long, allow_negative_numbers = true)]
        impact: Option<i64>,
        /// Confidence score (1-5)
        #[arg(short = 'C', long, allow_negative_numbers = true)]
        confidence: Option<i64>,
        /// Ease score (1-5)
        #[arg(short, long, allow_negative_numbers = true)]
        ease: Option<i64>,
        /// Reach score (1-5)
        #[arg(short, long, allow_negative_numbers = true)]
        reach: Option<i64>,
        /// Effort score (1-5)
        #[arg(short = 'f', long, allow_negative_numbers = true)]
        effort: Option<i64>,
    },
    /// List projects (default if no subcommand)
    List {
        /// Rank by 'ice' or 'rice' score instead of creation order
        #[arg(short, long)]
        sort: Option<String>,
        /// Tab-separated output for scripting (requires --sort)
        #[arg(long, requires = "sort")]
        tsv: bool,
    },
    /// View a specific project by name
    View {
        /// Exact project name
        name: String,
    },
    /// Export all projects to Markdown, sorted by score
    Export {
        /// Sort by 'ice' or 'rice' score
        #[arg(short, long, default_value = "ice")]
        sort: String,
        /// Print the report instead of writing the Markdown file
        #[arg(long)]
        stdout: bool,
    },
    /// Remove every project
    Clear {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "parpt")]
#[command(about = "Project prioritization with ICE and RICE scores", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/parpt/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the projects file (overrides projects_file from config)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Map a failure to the exit code for its kind.
fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<ProjectError>() {
        Some(e) if e.is_validation() => EXIT_VALIDATION,
        Some(ProjectError::NameTaken(_)) => EXIT_CONFLICT,
        Some(ProjectError::NotFound(_)) => EXIT_NOT_FOUND,
        _ => EXIT_STORAGE,
    }
}

fn main() {
    let cli = Cli::parse();
    parpt::logging::init_tracing(cli.verbose);
    let command = cli.command.unwrap_or(Commands::List {
        sort: None,
        tsv: false,
    });

    // init runs before config is loaded: it is how a config file gets created
    if let Commands::Init { force } = command {
        let path = cli.config.unwrap_or_else(parpt::config::get_config_path);
        match commands::init(&path, force) {
            Ok(message) => println!("{}", message),
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        }
        std::process::exit(EXIT_SUCCESS);
    }

    // Load config
    let config = match parpt::config::load_config(cli.config) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    // Validate config at startup
    if let Err(errors) = parpt::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let projects_file = cli.data.unwrap_or_else(|| config.projects_file.clone());
    tracing::debug!(path = %projects_file.display(), "using projects file");

    let store = match ProjectStore::open(Box::new(JsonFileStorage::new(&projects_file))) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to load projects from {}: {}", projects_file.display(), e);
            std::process::exit(EXIT_STORAGE);
        }
    };
    let mut service = ProjectService::new(store);
    let use_colors = parpt::output::should_use_colors();
    let mut input = StdinInput;

    // Route based on subcommand
    let (result, to_stderr) = match command {
        Commands::Create {
            name,
            description,
            impact,
            confidence,
            ease,
            reach,
            effort,
        } => {
            let options = CreateOptions {
                name,
                description,
                impact,
                confidence,
                ease,
                reach,
                effort,
            };
            (
                commands::create(&mut service, &config.prompts, &mut input, options),
                false,
            )
        }
        Commands::List { sort, tsv } => (
            commands::list(&service, sort.as_deref(), tsv, use_colors),
            false,
        ),
        Commands::View { name } => (commands::view(&service, &name, use_colors), false),
        Commands::Export { sort, stdout } => {
            // With --stdout the report owns stdout, so the summary goes to stderr
            let mut sink: Box<dyn ReportSink> = if stdout {
                Box::new(StdoutSink)
            } else {
                Box::new(MarkdownFileSink::new(&config.markdown_file))
            };
            (commands::export(&service, &sort, &mut *sink), stdout)
        }
        Commands::Clear { yes } => (commands::clear(&mut service, yes, &mut input), false),
        Commands::Init { .. } => unreachable!("handled before config load"),
    };

    match result {
        Ok(message) if to_stderr => eprintln!("{}", message),
        Ok(message) => println!("{}", message),
        Err(e) => {
            eprintln!("{:#}", e);
            std::process::exit(exit_code(&e));
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
