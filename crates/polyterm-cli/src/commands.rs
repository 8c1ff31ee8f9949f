//! Subcommands and their execution.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::Subcommand;
use polyterm::parse;
use polyterm::prelude::{Notation, Polynomial};
use tracing::{debug, info};

/// Operations on polynomial files. `-` reads from stdin.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Print the normalized polynomial
    Show {
        /// Polynomial file
        file: PathBuf,
    },
    /// Print the sum of two polynomials
    Add {
        /// Left operand
        lhs: PathBuf,
        /// Right operand
        rhs: PathBuf,
    },
    /// Print the product of two polynomials
    Mul {
        /// Left operand
        lhs: PathBuf,
        /// Right operand
        rhs: PathBuf,
    },
    /// Evaluate a polynomial at a point
    Eval {
        /// Polynomial file
        file: PathBuf,
        /// Value of the variable
        #[arg(long, allow_hyphen_values = true)]
        at: f64,
    },
    /// Print the normalized polynomial back in the line format
    Lines {
        /// Polynomial file
        file: PathBuf,
    },
}

/// Loads a polynomial from `path`, or from stdin when `path` is `-`.
pub fn load(path: &Path) -> Result<Polynomial> {
    let poly = if path == Path::new("-") {
        parse::read_from(io::stdin().lock()).context("failed to parse polynomial from stdin")?
    } else {
        let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
        parse::read_from(BufReader::new(file))
            .with_context(|| format!("failed to parse {}", path.display()))?
    };

    debug!(path = %path.display(), terms = poly.len(), "loaded polynomial");
    Ok(poly)
}

/// Loads both operands of a binary command.
///
/// Stdin can only be read once, so at most one operand may be `-`.
pub fn load_pair(lhs: &Path, rhs: &Path) -> Result<(Polynomial, Polynomial)> {
    let stdin = Path::new("-");
    if lhs == stdin && rhs == stdin {
        bail!("only one operand can be read from stdin");
    }
    Ok((load(lhs)?, load(rhs)?))
}

/// Runs a command and returns what it prints.
pub fn run(command: &Command, notation: Notation) -> Result<String> {
    info!(?command, "running");

    let output = match command {
        Command::Show { file } => {
            let p = load(file)?;
            format!("{}\n", p.display_with(notation))
        }
        Command::Add { lhs, rhs } => {
            let (a, b) = load_pair(lhs, rhs)?;
            let sum = a.add(&b);
            format!("{}\n", sum.display_with(notation))
        }
        Command::Mul { lhs, rhs } => {
            let (a, b) = load_pair(lhs, rhs)?;
            let product = a.try_mul(&b)?;
            format!("{}\n", product.display_with(notation))
        }
        Command::Eval { file, at } => {
            let value = load(file)?.eval(*at);
            format!("{value:?}\n")
        }
        Command::Lines { file } => parse::to_lines(&load(file)?),
    };

    Ok(output)
}
