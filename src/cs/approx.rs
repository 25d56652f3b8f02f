pub mod greedy_coin_change;

pub use greedy_coin_change::{solve_greedy, GreedyResult, GreedySolver, GreedyStep};
