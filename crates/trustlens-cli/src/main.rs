//! TrustLens assistant entry point.
//!
//! Binary name: `tlens`
//!
//! Parses CLI arguments, sets up tracing, loads the assistant config and
//! rule table, then dispatches to the requested command.

mod cli;

use anyhow::Context;
use clap::Parser;
use clap_complete::generate;

use trustlens_core::config::{config_path, default_data_dir, load_assistant_config, load_classifier};
use trustlens_observe::{init_tracing, shutdown_tracing, TracingOptions};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let tracing_options = TracingOptions {
        json: cli.log_json,
        enable_otel: cli.otel,
        ..TracingOptions::for_verbosity(cli.verbose, cli.quiet)
    };
    init_tracing(&tracing_options)
        .map_err(|e| anyhow::anyhow!("Failed to initialize tracing: {e}"))?;

    // Shell completions don't need config
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "tlens", &mut std::io::stdout());
        return Ok(());
    }

    let path = cli
        .config
        .clone()
        .unwrap_or_else(|| config_path(&default_data_dir()));
    let config = load_assistant_config(&path).await;
    let classifier = load_classifier(&config)
        .await
        .context("Failed to load the rule table")?;

    let result = match cli.command {
        Commands::Chat => cli::chat::loop_runner::run_chat_loop(&config, classifier).await,
        Commands::Ask { text } => cli::ask::ask(&classifier, &text.join(" "), cli.json),
        Commands::Rules => cli::rules::list_rules(&classifier, cli.json),
        Commands::Completions { .. } => Ok(()),
    };

    shutdown_tracing();
    result
}
