use crate::error::{Error, Result};


/// A validated coin change instance.
///
/// `coins` keeps the caller's order; solvers that need another order
/// (the greedy heuristic sorts descending) work on their own copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeProblem {
    coins: Vec<usize>,
    amount: usize,
}

impl ChangeProblem {
    /// Validates raw denominations and a target amount.
    ///
    /// Fails with an InvalidInput error when `coins` is empty, contains a
    /// value `<= 0`, or when `amount` is negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use coinchange::ChangeProblem;
    ///
    /// let problem = ChangeProblem::new(&[1, 3, 4], 6).unwrap();
    /// assert_eq!(problem.coins(), &[1, 3, 4]);
    /// assert_eq!(problem.amount(), 6);
    ///
    /// assert!(ChangeProblem::new(&[], 6).is_err());
    /// assert!(ChangeProblem::new(&[0, 1], 6).is_err());
    /// assert!(ChangeProblem::new(&[1], -1).is_err());
    /// ```
    pub fn new(coins: &[i64], amount: i64) -> Result<Self> {
        if coins.is_empty() {
            log::warn!("rejected coin change input: empty coin set");
            return Err(Error::EmptyCoins);
        }
        if let Some((index, &value)) = coins.iter().enumerate().find(|&(_, &c)| c <= 0) {
            log::warn!("rejected coin change input: coin {value} at {index}");
            return Err(Error::NonPositiveCoin { index, value });
        }
        if amount < 0 {
            log::warn!("rejected coin change input: amount {amount}");
            return Err(Error::NegativeAmount(amount));
        }

        // Positive i64 values only fail to convert on targets narrower than 64 bits.
        let coins = coins
            .iter()
            .enumerate()
            .map(|(index, &value)| {
                usize::try_from(value).map_err(|_| Error::CoinTooLarge { index, value })
            })
            .collect::<Result<Vec<_>>>()?;
        let amount = usize::try_from(amount).map_err(|_| Error::AmountTooLarge(amount))?;

        Ok(Self { coins, amount })
    }

    /// Builds a problem from denominations that are already unsigned.
    pub fn from_unsigned(coins: &[usize], amount: usize) -> Result<Self> {
        if coins.is_empty() {
            log::warn!("rejected coin change input: empty coin set");
            return Err(Error::EmptyCoins);
        }
        if let Some(index) = coins.iter().position(|&c| c == 0) {
            log::warn!("rejected coin change input: zero coin at {index}");
            return Err(Error::NonPositiveCoin { index, value: 0 });
        }
        Ok(Self {
            coins: coins.to_vec(),
            amount,
        })
    }

    pub fn coins(&self) -> &[usize] {
        &self.coins
    }

    pub fn amount(&self) -> usize {
        self.amount
    }
}

/// Common interface of the coin change strategies.
///
/// Implementations are stateless: the same problem always yields the same
/// output, and one solver value may be shared across threads.
pub trait CoinChangeSolver {
    type Output;

    fn solve(&self, problem: &ChangeProblem) -> Self::Output;
}
