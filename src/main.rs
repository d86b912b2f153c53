//! tableup CLI entry point.
//!
//! All process-exit decisions live here; the library only returns results.

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tableup::aws::{create_client, DynamoTableProvider};
use tableup::cli::Cli;
use tableup::output::format_handle;
use tableup::provision::provision;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{err}");
            return ExitCode::SUCCESS;
        }
        Err(err) => {
            // Usage problems print the rendered usage text and exit 1,
            // before any AWS client is built.
            println!("{err}");
            return ExitCode::FAILURE;
        }
    };

    init_tracing();

    let aws_config = cli.aws_config();
    if !cli.quiet {
        println!("Target: {}", aws_config.target_display());
        println!(
            "Creating table '{}' with hash key '{}'...",
            cli.table_name, cli.key_name
        );
    }

    let client = create_client(&aws_config).await;
    let provider = DynamoTableProvider::new(client);

    match provision(&provider, &cli.table_config(), &cli.poll_policy()).await {
        Ok(handle) => {
            println!("{}", format_handle(&handle, cli.format));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize the tracing subscriber.
///
/// Diagnostics go to stderr so stdout carries only the result.
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tableup=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
