use clap::Parser;

use moviedeck::cli::Cli;
use moviedeck::logging::init_tracing;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing();

    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {}", err);
            std::process::exit(1);
        }
    };

    if let Err(err) = moviedeck::ui::run(config).await {
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
