//! Binary crate for the `greeter` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI flags into [`greeter_core::Settings`]
//! - Logging setup
//! - Colored terminal output

use std::process::ExitCode;

use clap::Parser;
use greeter_core::{ReqwestSource, SystemRandom};
use tracing::debug;

use crate::{app::App, cli::Cli, output::Console};

mod app;
mod cli;
mod logging;
mod output;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version come through here too and are not failures.
            let code = if e.use_stderr() { ExitCode::from(1) } else { ExitCode::SUCCESS };
            let _ = e.print();
            return code;
        }
    };

    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("{e}");
    }

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        // The reader went away, e.g. `greeter | head -c0`; nothing left to report to.
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = cli.settings();
    debug!(?settings, "starting");

    let http = ReqwestSource::new();
    let mut console = Console::stdout(cli.no_color);
    let mut input = std::io::stdin().lock();

    App::new(&settings, &http, SystemRandom::new())
        .run(&mut input, &mut console)
        .await
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<std::io::Error>()
            .is_some_and(|io| io.kind() == std::io::ErrorKind::BrokenPipe)
    })
}
