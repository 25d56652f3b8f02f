//! Plain-text tables for solver results.
//!
//! Rendering is a separate pass over the finished result structures; the
//! solvers know nothing about it. The first column is left-aligned, the
//! others right-aligned, and every line ends with a newline:
//!
//! ```text
//! Step | Coin Used | Remaining Amount
//! -----+-----------+-----------------
//! 1    |         4 |                2
//! ```

use std::fmt::{self, Display, Formatter};

use crate::cs::approx::GreedyResult;
use crate::cs::dynamic::DpResult;

/// Step-by-step trace of the greedy heuristic.
pub struct GreedyTable<'a>(pub &'a GreedyResult);

/// Full DP table, one row per coin prefix.
pub struct DpMatrix<'a>(pub &'a DpResult);

impl Display for GreedyTable<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let header = ["Step", "Coin Used", "Remaining Amount"].map(String::from);
        let rows: Vec<Vec<String>> = self
            .0
            .steps()
            .iter()
            .enumerate()
            .map(|(i, step)| {
                vec![
                    (i + 1).to_string(),
                    step.coin.to_string(),
                    step.remaining.to_string(),
                ]
            })
            .collect();
        write_grid(f, &header, &rows)
    }
}

impl Display for DpMatrix<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let table = self.0.table();

        let mut header = vec![String::from("Coins \\ Amounts")];
        header.extend((0..table.columns()).map(|a| a.to_string()));

        let rows: Vec<Vec<String>> = (0..table.rows())
            .map(|row| {
                let label = match row {
                    0 => String::from("No Coin"),
                    _ => table.coins()[row - 1].to_string(),
                };
                std::iter::once(label)
                    .chain(table.row(row).iter().map(|cell| cell.to_string()))
                    .collect()
            })
            .collect();
        write_grid(f, &header, &rows)
    }
}

/// One-line summary such as `Coins used: 4, 1, 1 (Total: 3)`.
pub fn summary(coins: &[usize]) -> String {
    let listed = if coins.is_empty() {
        String::from("none")
    } else {
        coins
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    };
    format!("Coins used: {listed} (Total: {})", coins.len())
}

fn write_grid(f: &mut Formatter<'_>, header: &[String], rows: &[Vec<String>]) -> fmt::Result {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_line(f, header, &widths)?;
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    writeln!(f, "{}", rule.join("-+-"))?;
    for row in rows {
        write_line(f, row, &widths)?;
    }
    Ok(())
}

fn write_line(f: &mut Formatter<'_>, cells: &[String], widths: &[usize]) -> fmt::Result {
    for (i, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if i == 0 {
            write!(f, "{cell:<width$}")?;
        } else {
            write!(f, " | {cell:>width$}")?;
        }
    }
    writeln!(f)
}
