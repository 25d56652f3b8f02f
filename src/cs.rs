pub mod approx;
pub mod coin;
pub mod dynamic;

// Re-export all modules
pub use approx::*;
pub use coin::{ChangeProblem, CoinChangeSolver};
pub use dynamic::*;
