//! Command-line interface definitions.

use std::io::{BufRead, BufReader, Read};
use std::path::PathBuf;

use clap::Parser;
use tabled::{Table, Tabled};
use tracing::info;

use crate::config::Config;
use crate::domain::solver::{ClarabelSolver, HiGHSSolver};
use crate::domain::{equilibrium, Equilibrium, MatrixGame};
use crate::error::{Error, Result};

/// Zerosum - optimal mixed strategies for zero-sum matrix games.
#[derive(Parser, Debug)]
#[command(name = "zerosum")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Payoff matrix file (whitespace-separated rows); stdin when omitted
    pub matrix: Option<PathBuf>,

    /// Return the balanced (minimum sum-of-squares) optimal strategy
    #[arg(long)]
    pub balanced: bool,

    /// TOML config file with tolerances and logging settings
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Tabled)]
struct StrategyRow {
    #[tabled(rename = "row")]
    index: usize,
    #[tabled(rename = "probability")]
    probability: String,
}

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.init_logging();

    let rows = match &cli.matrix {
        Some(path) => read_matrix(std::fs::File::open(path)?)?,
        None => read_matrix(std::io::stdin())?,
    };
    let game = MatrixGame::from_rows(rows)?;
    info!(size = game.size(), balanced = cli.balanced, "solving game");

    let Equilibrium { strategy, value } = if cli.balanced {
        equilibrium::balanced_strategy(
            &game,
            &HiGHSSolver::new(),
            &ClarabelSolver::new(),
            &config.solve,
        )?
    } else {
        equilibrium::optimal_strategy(&game, &HiGHSSolver::new(), &config.solve)?
    };

    let table = Table::new(
        strategy
            .probabilities()
            .iter()
            .enumerate()
            .map(|(index, p)| StrategyRow {
                index,
                probability: format!("{p:.6}"),
            }),
    );
    println!("{table}");
    println!("game value: {value:.6}");
    Ok(())
}

/// Read a payoff matrix as whitespace-separated rows, one per line.
/// Blank lines are skipped.
pub fn read_matrix<R: Read>(reader: R) -> Result<Vec<Vec<f64>>> {
    let mut rows = Vec::new();
    for line in BufReader::new(reader).lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let row = line
            .split_whitespace()
            .map(|field| {
                field
                    .parse::<f64>()
                    .map_err(|e| Error::Parse(format!("invalid payoff '{field}': {e}")))
            })
            .collect::<Result<Vec<f64>>>()?;
        rows.push(row);
    }
    Ok(rows)
}
