//
//  tableau-rest
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tableau_rest::api::ApiError;
use tableau_rest::cli::{Cli, Commands};
use tableau_rest::exit_codes;

#[tokio::main]
async fn main() -> Result<()> {
    init_logging();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_code(&e));
        }
    }
}

/// Logging is driven by `TSC_LOG` (e.g. `TSC_LOG=tableau_rest=debug`).
fn init_logging() {
    let filter = EnvFilter::try_from_env("TSC_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<ApiError>() {
        Some(api) if api.is_auth_error() => exit_codes::AUTH_ERROR,
        Some(ApiError::AlreadySignedIn) => exit_codes::AUTH_ERROR,
        Some(api) if api.is_not_found() => exit_codes::NOT_FOUND,
        Some(api) if api.is_server_error() => exit_codes::SERVER_ERROR,
        Some(ApiError::InvalidConfiguration(_))
        | Some(ApiError::MissingRequiredVariable(_))
        | Some(ApiError::InvalidParameter(_))
        | Some(ApiError::InvalidFileType { .. }) => exit_codes::USAGE,
        _ => exit_codes::ERROR,
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::ServerInfo => tableau_rest::cli::server_info(&cli.global).await,
        Commands::Sites(cmd) => cmd.run(&cli.global).await,
        Commands::List(cmd) => cmd.run(&cli.global).await,
        Commands::Publish(cmd) => cmd.run(&cli.global).await,
        Commands::Download(cmd) => cmd.run(&cli.global).await,
        Commands::Graphql(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Completion(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("tsc version {}", tableau_rest::VERSION);
            Ok(())
        }
    }
}
