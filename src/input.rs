//! Conversion of user-typed text into solver inputs.

use crate::cs::coin::ChangeProblem;
use crate::error::{Error, Result};

/// Parses a comma separated list of denominations.
///
/// Each entry is read up to its first non-digit, so `"3.5"` gives 3 and
/// `"4abc"` gives 4. Entries with no leading integer are skipped; the text
/// fails only when it is blank or nothing parseable remains. Sign checks are
/// left to [`ChangeProblem::new`].
///
/// # Examples
///
/// ```
/// use coinchange::input::parse_coins;
///
/// assert_eq!(parse_coins(" 1, 3 ,x, 4").unwrap(), vec![1, 3, 4]);
/// assert_eq!(parse_coins("2.5, 10c").unwrap(), vec![2, 10]);
/// assert!(parse_coins("a, b").is_err());
/// ```
pub fn parse_coins(text: &str) -> Result<Vec<i64>> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::MissingInput("coins"));
    }

    let coins: Vec<i64> = text
        .split(',')
        .filter_map(leading_integer)
        .collect();
    if coins.is_empty() {
        return Err(Error::EmptyCoins);
    }
    Ok(coins)
}

/// Optional sign followed by at least one digit; the rest of the entry is ignored.
fn leading_integer(entry: &str) -> Option<i64> {
    let entry = entry.trim();
    let sign_len = usize::from(entry.starts_with(['+', '-']));
    let digits = entry[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return None;
    }
    entry[..sign_len + digits].parse().ok()
}

pub fn parse_amount(text: &str) -> Result<i64> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::MissingInput("amount"));
    }
    text.parse().map_err(|_| Error::ParseAmount(text.to_string()))
}

/// Parses both fields and validates them as one problem.
pub fn parse_problem(coins: &str, amount: &str) -> Result<ChangeProblem> {
    let coins = parse_coins(coins)?;
    let amount = parse_amount(amount)?;
    ChangeProblem::new(&coins, amount)
}
