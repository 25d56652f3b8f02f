use crate::cs::coin::{ChangeProblem, CoinChangeSolver};
use crate::error::Result;

/// One iteration of the greedy loop: the coin taken and what is left after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GreedyStep {
    pub coin: usize,
    pub remaining: usize,
}

/// Outcome of the greedy heuristic together with its step trace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreedyResult {
    coins: Vec<usize>,
    steps: Vec<GreedyStep>,
    remaining: usize,
}

impl GreedyResult {
    /// Coins in selection order, largest denomination first.
    pub fn coins(&self) -> &[usize] {
        &self.coins
    }

    pub fn steps(&self) -> &[GreedyStep] {
        &self.steps
    }

    /// Amount left over once every denomination has been tried.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// True when the selected coins sum exactly to the target.
    pub fn is_exact(&self) -> bool {
        self.remaining == 0
    }

    /// Sum of the selected coins.
    pub fn total(&self) -> usize {
        self.coins.iter().sum()
    }
}

/// Largest-denomination-first heuristic.
///
/// Not optimal for non-canonical coin systems, and may stop short of the
/// target; check [`GreedyResult::is_exact`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver;

impl CoinChangeSolver for GreedySolver {
    type Output = GreedyResult;

    fn solve(&self, problem: &ChangeProblem) -> GreedyResult {
        let mut sorted = problem.coins().to_vec();
        // Stable, so equal denominations keep their input order.
        sorted.sort_by(|a, b| b.cmp(a));

        let mut coins = Vec::new();
        let mut steps = Vec::new();
        let mut remaining = problem.amount();

        for &coin in &sorted {
            while remaining >= coin {
                remaining -= coin;
                coins.push(coin);
                steps.push(GreedyStep { coin, remaining });
                log::trace!("greedy took {coin}, {remaining} left");
            }
        }

        log::debug!(
            "greedy change for {} with {} denominations: {} coins, leftover {}",
            problem.amount(),
            sorted.len(),
            coins.len(),
            remaining
        );

        GreedyResult {
            coins,
            steps,
            remaining,
        }
    }
}

/// Validates the input and runs [`GreedySolver`].
///
/// # Examples
///
/// ```
/// use coinchange::solve_greedy;
///
/// let result = solve_greedy(&[1, 3, 4], 6).unwrap();
/// assert_eq!(result.coins(), &[4, 1, 1]);
/// assert!(result.is_exact());
///
/// // 2 can never make 3; the leftover is reported instead of an error.
/// let result = solve_greedy(&[2], 3).unwrap();
/// assert_eq!(result.remaining(), 1);
/// assert!(!result.is_exact());
/// ```
pub fn solve_greedy(coins: &[i64], amount: i64) -> Result<GreedyResult> {
    let problem = ChangeProblem::new(coins, amount)?;
    Ok(GreedySolver.solve(&problem))
}
