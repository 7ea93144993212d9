mod cli;
mod commands;
mod context;
mod output;

use clap::Parser;
use cli::Cli;
use context::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = Context::from_cli(&cli).and_then(|ctx| {
        if cli.watch {
            commands::watch::run(&ctx).map(|()| true)
        } else {
            Ok(commands::build::run(&ctx))
        }
    });

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

/// Diagnostics go to stderr so stdout carries only the generation report
fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "ssg=debug,ssg_core=debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
