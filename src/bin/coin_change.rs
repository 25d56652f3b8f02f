use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use coinchange::render::{summary, DpMatrix, GreedyTable};
use coinchange::{input, CoinChangeSolver, DpSolver, GreedySolver};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Strategy {
    Greedy,
    Dp,
    Both,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Compare greedy and DP coin change", long_about = None)]
struct Args {
    /// Comma separated denominations, e.g. "1, 3, 4"
    #[arg(long)]
    coins: String,

    /// Target amount
    #[arg(long, allow_hyphen_values = true)]
    amount: String,

    #[arg(long, value_enum, default_value_t = Strategy::Both)]
    strategy: Strategy,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let problem = match input::parse_problem(&args.coins, &args.amount) {
        Ok(problem) => problem,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if matches!(args.strategy, Strategy::Greedy | Strategy::Both) {
        let result = GreedySolver.solve(&problem);
        println!("Greedy: {}", summary(result.coins()));
        if !result.is_exact() {
            println!("Greedy stopped {} short of the target", result.remaining());
        }
        print!("{}", GreedyTable(&result));
        println!();
    }

    if matches!(args.strategy, Strategy::Dp | Strategy::Both) {
        let result = match DpSolver.solve(&problem) {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {e}");
                return ExitCode::FAILURE;
            }
        };
        println!("Dynamic programming: {}", summary(result.coins()));
        if !result.is_reachable() {
            println!("Amount {} cannot be formed from these coins", problem.amount());
        }
        print!("{}", DpMatrix(&result));
    }

    ExitCode::SUCCESS
}
