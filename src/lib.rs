pub mod cs;
pub mod error;
pub mod input;
pub mod render;

pub use cs::{
    solve_dp, solve_greedy, ChangeProblem, CoinChangeSolver, DpCell, DpResult, DpSolver, DpTable,
    GreedyResult, GreedySolver, GreedyStep,
};
pub use error::{Error, Result};
