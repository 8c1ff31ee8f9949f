//! polyterm CLI - read polynomials in the line format and operate on them

mod commands;

use std::process::ExitCode;

use clap::Parser;
use polyterm::prelude::Notation;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::Command;

/// Sparse polynomial arithmetic over `<coeff> <degree>` files
#[derive(Parser, Debug)]
#[command(name = "polyterm", version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Symbol used for the variable when printing polynomials
    #[arg(long, env = "POLYTERM_VAR", default_value_t = 'x', global = true)]
    var: char,

    #[command(subcommand)]
    command: Command,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {e}");
        return ExitCode::FAILURE;
    }

    match commands::run(&args.command, Notation::new(args.var)) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
