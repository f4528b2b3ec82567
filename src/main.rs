use std::io::IsTerminal;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use artifact_html::cli::{Cli, Commands};
use artifact_html::commands::{run_call, run_convert, run_init, run_inspect};

/// Environment variable with a log filter directive, checked before `RUST_LOG`.
const LOG_ENV: &str = "ARTIFACT_HTML_LOG";

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    let exit_code = match &cli.command {
        Commands::Convert(args) => run_convert(args, &cli),
        Commands::Inspect(args) => run_inspect(args, &cli),
        Commands::Call(args) => run_call(args, &cli),
        Commands::Init(args) => run_init(args),
    };

    std::process::exit(exit_code);
}

fn init_logging(cli: &Cli) {
    let filter = if cli.quiet {
        EnvFilter::new(cli.log_level())
    } else {
        EnvFilter::try_from_env(LOG_ENV)
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new(cli.log_level()))
    };

    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init()
    {
        eprintln!("Warning: logging disabled: {e}");
    }
}
