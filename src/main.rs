//! Promptinator CLI entry point.

use clap::Parser;

use promptinator::cli::{commands, handle_error, load_config, Cli, Commands};
use promptinator::infrastructure::logging::{LogConfig, LoggerImpl};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // init writes config, so it runs before any config is loaded
    if let Commands::Init(ref args) = cli.command {
        if let Err(err) = commands::init::execute(args, cli.json) {
            handle_error(err, cli.json);
        }
        return;
    }

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(err) => handle_error(err, cli.json),
    };

    let _logger = match LoggerImpl::init(&LogConfig::from(&config.logging)) {
        Ok(logger) => Some(logger),
        Err(err) => {
            eprintln!("warning: logging disabled: {err:#}");
            None
        }
    };

    let result = match cli.command {
        Commands::Init(_) => Ok(()),
        Commands::Preflight(args) => commands::preflight::execute(args, &config, cli.json).await,
        Commands::Title(ref args) => commands::title::execute(args, cli.json),
        Commands::Terms => commands::terms::execute(&config, cli.json).await,
        Commands::Logs(args) => commands::logs::execute(args, &config, cli.json).await,
    };

    if let Err(err) = result {
        handle_error(err, cli.json);
    }
}
