use std::io::{self, Write};
use std::process;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use bx::cli::{dispatch, reject, Cli};
use bx::command::ConsoleResult;

fn main() {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut input = stdin.lock();
    let mut output = stdout.lock();
    let mut error = stderr.lock();

    let result = match Cli::try_parse() {
        Ok(cli) => {
            setup_logging(cli.verbose);
            dispatch(cli, &mut input, &mut output, &mut error)
        }
        Err(e) => reject(e, &mut output, &mut error),
    };

    let flushed = output.flush().and(error.flush());
    let result = match flushed {
        Ok(()) => result,
        Err(_) => ConsoleResult::Failure,
    };
    process::exit(result.code());
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // Only our own events
    let module_filter = filter_fn(|metadata| metadata.target().starts_with("bx"));

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    let filtered_layer = fmt_layer.with_filter(filter).with_filter(module_filter);

    tracing_subscriber::registry().with(filtered_layer).init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
