use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing::Level;
use tracing_subscriber::EnvFilter;

use inject_text::config::Config;
use inject_text::generate::{
    generate, render_only, GenerateOutcome, GenerateRequest, DEFAULT_CONSTANT_NAME,
    DEFAULT_SRC_GEN_FOLDER_BASE,
};

mod handle_config;

use handle_config::handle_config_command;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum SafeMode {
    On,
    Off,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Create a config file with default settings
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
    /// Show the current configuration
    Show {
        /// Print the raw JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate the config file and print resolved paths
    Validate,
}

#[derive(Parser)]
#[command(name = "inject-text")]
#[command(about = "Embed a UTF-8 text file in generated Java source as a String constant")]
struct Cli {
    /// Project config file (defaults to ./inject-text.json)
    #[arg(long, global = true, env = "INJECT_TEXT_CONFIG")]
    config_path: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one Java class from one text file
    Generate {
        /// UTF-8 text file to embed
        #[arg(long, value_name = "FILE")]
        input_file: PathBuf,
        /// Java package of the generated class
        #[arg(long)]
        package_name: String,
        /// Name of the generated class (a trailing .java is ignored)
        #[arg(long)]
        class_name: String,
        /// Name of the public constant holding the text
        #[arg(long, default_value = DEFAULT_CONSTANT_NAME)]
        constant_name: String,
        /// Source root the package folders are created under
        #[arg(long, value_name = "DIR", default_value = DEFAULT_SRC_GEN_FOLDER_BASE)]
        src_gen_folder_base: PathBuf,
        /// When on, only write below a path containing 'src-gen'
        #[arg(long, value_enum, default_value_t = SafeMode::On)]
        safe_mode: SafeMode,
        /// Print the generated source instead of writing it
        #[arg(long)]
        stdout: bool,
    },
    /// Run every injection listed in the config file
    Build,
    /// Config file management commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn init_tracing(debug: bool) {
    // RUST_LOG wins over the warn default; --debug always enables debug
    let mut filter = EnvFilter::builder()
        .with_default_directive(Level::WARN.into())
        .from_env_lossy();
    if debug {
        filter = filter.add_directive(Level::DEBUG.into());
    }
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn report(outcome: &GenerateOutcome) {
    match outcome {
        GenerateOutcome::Written(path) => println!("Created : {}", path.display()),
        GenerateOutcome::Skipped { reason } => println!("{reason}"),
    }
}

fn run_build(config_path: Option<&Path>) -> Result<()> {
    let path = config_path
        .map(Path::to_path_buf)
        .unwrap_or_else(Config::default_config_path);
    let config = Config::load(config_path)?;
    let requests = config.requests(&path);

    if requests.is_empty() {
        println!("No injections configured in {}", path.display());
        return Ok(());
    }

    for (index, request) in requests.iter().enumerate() {
        tracing::debug!(index, class = %request.class_name, "running injection");
        let outcome = generate(request)
            .with_context(|| format!("Injection {} ({}) failed", index, request.class_name))?;
        report(&outcome);
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match cli.command {
        Some(Commands::Generate {
            input_file,
            package_name,
            class_name,
            constant_name,
            src_gen_folder_base,
            safe_mode,
            stdout,
        }) => {
            let request = GenerateRequest {
                input_file,
                src_gen_folder_base,
                package_name,
                class_name,
                constant_name,
                safe_mode: safe_mode == SafeMode::On,
            };
            if stdout {
                print!("{}", render_only(&request)?);
            } else {
                report(&generate(&request)?);
            }
        }
        Some(Commands::Build) => {
            run_build(cli.config_path.as_deref())?;
        }
        Some(Commands::Config { command }) => {
            handle_config_command(command, cli.config_path.as_deref())?;
        }
        None => {
            let mut cmd = Cli::command();
            cmd.print_help().context("Failed to print help")?;
        }
    }

    Ok(())
}
