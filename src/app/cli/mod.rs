//! CLI Adapter.

mod inject;

use clap::{Parser, Subcommand};

use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "factory-injector")]
#[command(version)]
#[command(
    about = "Register dependency-injection factories in a generated PHP config file",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Map a class to its factory in the factories config file
    #[clap(visible_alias = "i")]
    Inject {
        /// Fully qualified class name, e.g. App\Handler\PingHandler
        class: String,
        /// Fully qualified factory class name, e.g. App\Handler\PingHandlerFactory
        factory: String,
        /// Project root containing config/autoload/ (defaults to the current directory)
        #[arg(short = 'r', long)]
        project_root: Option<String>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    init_logging();
    let cli = Cli::parse();

    let result: Result<(), AppError> = match cli.command {
        Commands::Inject { class, factory, project_root } => {
            inject::run_inject(&class, &factory, project_root.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();
}
