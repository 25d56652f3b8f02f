use std::fmt;

use crate::cs::coin::{ChangeProblem, CoinChangeSolver};
use crate::error::{Error, Result};

/// A cell of the DP table: the minimum number of coins for a sub-amount,
/// or `Unreachable` when no combination of the row's coins reaches it.
///
/// Ordering places `Unreachable` above every reachable count, so `min`
/// behaves like a minimum over counts with an infinite sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DpCell {
    Reachable(usize),
    Unreachable,
}

impl DpCell {
    pub fn count(self) -> Option<usize> {
        match self {
            DpCell::Reachable(n) => Some(n),
            DpCell::Unreachable => None,
        }
    }

    pub fn is_reachable(self) -> bool {
        matches!(self, DpCell::Reachable(_))
    }

    /// The cell reached by adding one more coin.
    fn plus_one(self) -> DpCell {
        match self {
            DpCell::Reachable(n) => DpCell::Reachable(n + 1),
            DpCell::Unreachable => DpCell::Unreachable,
        }
    }
}

impl fmt::Display for DpCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DpCell::Reachable(n) => write!(f, "{n}"),
            DpCell::Unreachable => write!(f, "∞"),
        }
    }
}

/// Minimum coin counts indexed by (coin prefix length, sub-amount).
///
/// Row `i` allows the first `i` coins in the caller's order; row 0 allows
/// none. Cells are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpTable {
    coins: Vec<usize>,
    amount: usize,
    cells: Vec<DpCell>,
}

impl DpTable {
    /// Allocates the table with row 0 and column 0 initialised, all other
    /// cells unreachable.
    fn new(coins: &[usize], amount: usize) -> Result<Self> {
        let rows = coins.len() + 1;
        let columns = amount.checked_add(1).ok_or(Error::TableTooLarge {
            rows,
            columns: usize::MAX,
        })?;
        let len = rows
            .checked_mul(columns)
            .ok_or(Error::TableTooLarge { rows, columns })?;

        // Cell counts that fit usize can still exceed the allocator's limit.
        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| Error::TableTooLarge { rows, columns })?;
        cells.resize(len, DpCell::Unreachable);
        for row in 0..rows {
            cells[row * columns] = DpCell::Reachable(0);
        }

        Ok(Self {
            coins: coins.to_vec(),
            amount,
            cells,
        })
    }

    /// Number of rows, `coins.len() + 1`.
    pub fn rows(&self) -> usize {
        self.coins.len() + 1
    }

    /// Number of columns, `amount + 1`.
    pub fn columns(&self) -> usize {
        self.amount + 1
    }

    /// Denominations in row order; row `i` (for `i >= 1`) adds `coins()[i - 1]`.
    pub fn coins(&self) -> &[usize] {
        &self.coins
    }

    pub fn amount(&self) -> usize {
        self.amount
    }

    /// # Panics
    ///
    /// Panics if `row >= rows()` or `amount >= columns()`.
    pub fn get(&self, row: usize, amount: usize) -> DpCell {
        assert!(row < self.rows() && amount < self.columns(), "cell out of range");
        self.cells[row * self.columns() + amount]
    }

    /// All cells of one row, sub-amount 0 first.
    ///
    /// # Panics
    ///
    /// Panics if `row >= rows()`.
    pub fn row(&self, row: usize) -> &[DpCell] {
        let columns = self.columns();
        &self.cells[row * columns..(row + 1) * columns]
    }

    /// The answer cell, `(coins.len(), amount)`.
    pub fn result(&self) -> DpCell {
        self.get(self.coins.len(), self.amount)
    }

    fn set(&mut self, row: usize, amount: usize, cell: DpCell) {
        let columns = self.columns();
        self.cells[row * columns + amount] = cell;
    }
}

/// Outcome of the DP solver: one optimal combination and the full table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpResult {
    coins: Vec<usize>,
    table: DpTable,
}

impl DpResult {
    /// Coins in reconstruction order, from the last denomination toward the
    /// first. Empty when the amount is zero or unreachable.
    pub fn coins(&self) -> &[usize] {
        &self.coins
    }

    pub fn table(&self) -> &DpTable {
        &self.table
    }

    /// Minimum number of coins, or `None` when unreachable.
    pub fn min_coins(&self) -> Option<usize> {
        self.table.result().count()
    }

    pub fn is_reachable(&self) -> bool {
        self.table.result().is_reachable()
    }
}

/// Exact solver over the (coin prefix, sub-amount) table.
///
/// Memory is `O(coins.len() * amount)`; callers bound `amount` to what they
/// are willing to allocate.
#[derive(Debug, Clone, Copy, Default)]
pub struct DpSolver;

impl DpSolver {
    /// Fills the table, then walks it backward from the answer cell.
    ///
    /// Fails only when the table dimensions overflow `usize` or the cells
    /// cannot be allocated.
    pub fn try_solve(&self, problem: &ChangeProblem) -> Result<DpResult> {
        let table = fill_table(problem.coins(), problem.amount())?;
        let coins = reconstruct(&table);

        log::debug!(
            "dp change for {} with {} denominations: {:?} ({} coins reconstructed)",
            problem.amount(),
            problem.coins().len(),
            table.result(),
            coins.len()
        );

        Ok(DpResult { coins, table })
    }
}

impl CoinChangeSolver for DpSolver {
    type Output = Result<DpResult>;

    fn solve(&self, problem: &ChangeProblem) -> Result<DpResult> {
        self.try_solve(problem)
    }
}

/// Row by row, sub-amounts left to right: cell `(i, a)` may read
/// `(i, a - coin)` on the same row.
fn fill_table(coins: &[usize], amount: usize) -> Result<DpTable> {
    let mut table = DpTable::new(coins, amount)?;

    for (idx, &coin) in coins.iter().enumerate() {
        let row = idx + 1;
        for a in 1..=amount {
            let without = table.get(row - 1, a);
            let cell = if coin > a {
                without
            } else {
                without.min(table.get(row, a - coin).plus_one())
            };
            table.set(row, a, cell);
        }
    }

    Ok(table)
}

/// Recovers one optimal combination. Staying on a row after taking its coin
/// allows that coin to be reused.
fn reconstruct(table: &DpTable) -> Vec<usize> {
    let mut coins_used = Vec::new();
    let mut remaining = table.amount();
    let mut row = table.coins().len();

    while remaining > 0 && row > 0 {
        if table.get(row, remaining) != table.get(row - 1, remaining) {
            let coin = table.coins()[row - 1];
            coins_used.push(coin);
            remaining -= coin;
            log::trace!("dp reconstruction took {coin} at row {row}, {remaining} left");
        } else {
            row -= 1;
        }
    }

    if remaining > 0 {
        // Unreachable target: anything collected is not a valid combination.
        coins_used.clear();
    }
    coins_used
}

/// Validates the input and runs [`DpSolver`].
///
/// # Examples
///
/// ```
/// use coinchange::solve_dp;
///
/// let result = solve_dp(&[1, 3, 4], 6).unwrap();
/// assert_eq!(result.coins(), &[3, 3]);
/// assert_eq!(result.min_coins(), Some(2));
///
/// // Impossible to form 3 from [2], so no coins are returned
/// let result = solve_dp(&[2], 3).unwrap();
/// assert!(result.coins().is_empty());
/// assert!(!result.is_reachable());
/// ```
pub fn solve_dp(coins: &[i64], amount: i64) -> Result<DpResult> {
    let problem = ChangeProblem::new(coins, amount)?;
    DpSolver.try_solve(&problem)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dp(coins: &[usize], amount: usize) -> DpResult {
        DpSolver
            .try_solve(&ChangeProblem::from_unsigned(coins, amount).unwrap())
            .unwrap()
    }

    #[test]
    fn test_min_coins() {
        let result = dp(&[1, 6, 10], 18);
        assert_eq!(result.min_coins(), Some(3));
        assert_eq!(result.coins(), &[6, 6, 6]);

        assert_eq!(dp(&[1, 6, 10], 1).min_coins(), Some(1));

        // Impossible to form 7 from [2, 4]
        let result = dp(&[2, 4], 7);
        assert_eq!(result.min_coins(), None);
        assert!(result.coins().is_empty());
    }

    #[test]
    fn test_table_for_1_3_4() {
        let result = dp(&[1, 3, 4], 6);
        let table = result.table();
        assert_eq!(table.rows(), 4);
        assert_eq!(table.columns(), 7);

        let r = DpCell::Reachable;
        let u = DpCell::Unreachable;
        assert_eq!(table.row(0), &[r(0), u, u, u, u, u, u]);
        assert_eq!(table.row(1), &[r(0), r(1), r(2), r(3), r(4), r(5), r(6)]);
        assert_eq!(table.row(2), &[r(0), r(1), r(2), r(1), r(2), r(3), r(2)]);
        assert_eq!(table.row(3), &[r(0), r(1), r(2), r(1), r(1), r(2), r(2)]);
    }

    #[test]
    fn test_reconstruction_order_follows_rows_backward() {
        // 4 + 1 with the 4 on the last row, so it is recorded first.
        let result = dp(&[1, 4], 5);
        assert_eq!(result.coins(), &[4, 1]);
    }

    #[test]
    fn test_caller_order_is_kept() {
        let result = dp(&[4, 3, 1], 6);
        assert_eq!(result.table().coins(), &[4, 3, 1]);
        assert_eq!(result.min_coins(), Some(2));
        assert_eq!(result.coins().iter().sum::<usize>(), 6);
        assert_eq!(result.coins().len(), 2);
    }

    #[test]
    fn test_zero_amount() {
        let result = dp(&[2, 5], 0);
        assert!(result.coins().is_empty());
        assert_eq!(result.min_coins(), Some(0));
        assert_eq!(result.table().columns(), 1);
        for row in 0..result.table().rows() {
            assert_eq!(result.table().get(row, 0), DpCell::Reachable(0));
        }
    }

    #[test]
    fn test_single_unit_coin() {
        for n in 0..20 {
            let result = dp(&[1], n);
            assert_eq!(result.coins(), vec![1; n].as_slice());
        }
    }

    #[test]
    fn test_duplicate_denominations() {
        let result = dp(&[3, 3], 9);
        assert_eq!(result.coins(), &[3, 3, 3]);
        assert_eq!(result.table().row(1), result.table().row(2));
    }

    #[test]
    fn test_cell_ordering() {
        assert!(DpCell::Reachable(usize::MAX) < DpCell::Unreachable);
        assert_eq!(DpCell::Reachable(3).min(DpCell::Unreachable), DpCell::Reachable(3));
        assert_eq!(DpCell::Unreachable.plus_one(), DpCell::Unreachable);
        assert_eq!(DpCell::Unreachable.to_string(), "∞");
    }

    #[test]
    fn test_table_too_large() {
        let problem = ChangeProblem::from_unsigned(&[1], usize::MAX).unwrap();
        assert_eq!(
            DpSolver.try_solve(&problem),
            Err(Error::TableTooLarge {
                rows: 2,
                columns: usize::MAX,
            })
        );
    }

    #[test]
    #[should_panic]
    fn test_row_out_of_range() {
        let result = dp(&[1, 2], 3);
        let _ = result.table().row(3);
    }

    #[test]
    fn test_table_beyond_allocator_limit() {
        // 2 x (2^62 + 1) cells fits usize but not isize::MAX bytes.
        assert_eq!(
            solve_dp(&[1], 1 << 62),
            Err(Error::TableTooLarge {
                rows: 2,
                columns: (1 << 62) + 1,
            })
        );
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert!(solve_dp(&[], 5).unwrap_err().is_invalid_input());
        assert!(solve_dp(&[0], 5).unwrap_err().is_invalid_input());
        assert!(solve_dp(&[1], -1).unwrap_err().is_invalid_input());
    }
}
