//! Enumerates every distinct way to make change for an amount.
//!
//! The work is split in two passes. A [`ReachabilityTable`] records, for each
//! sum up to the amount, which coins can be the largest coin of a combination
//! of that sum. A [`CombinationGraph`] then turns the table into a shared DAG
//! whose root-to-leaf paths are the combinations, or [`count_combinations`]
//! walks the table directly when only the number is wanted.
//!
//! Every combination is read from its largest coin to its smallest, so
//! `[4, 3, 3]` is produced once and `[3, 4, 3]` never is.
//!
//! # Examples
//!
//! ```
//! use changemaker::ChangeMaker;
//!
//! let maker = ChangeMaker::new(&[3, 4, 5, 7]).unwrap();
//! assert_eq!(
//!     maker.change(10).unwrap(),
//!     Some(vec![vec![7, 3], vec![5, 5], vec![4, 3, 3]])
//! );
//! assert_eq!(maker.count_change(10).unwrap(), Some(3));
//! assert_eq!(maker.change(1).unwrap(), None);
//! ```

pub mod benchmark;
pub mod count;
pub mod denominations;
pub mod format;
pub mod graph;
pub mod reachability;

use log::debug;

pub use benchmark::{benchmark_count_change, Sample};
pub use count::count_combinations;
pub use denominations::Denominations;
pub use graph::{CombinationGraph, Node, NodeId};
pub use reachability::ReachabilityTable;

use crate::error::{ChangeError, Result};

/// Coin values summing to an amount, largest first.
pub type Combination = Vec<usize>;

/// What an amount of 0 means.
///
/// The table has no cell for 0, so the answer is a convention rather than
/// something the algorithm derives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ZeroAmountPolicy {
    /// One combination with no coins; `count_change(0)` is 1.
    #[default]
    EmptyCombination,
    /// Report NO-SOLUTION (`Ok(None)`).
    NoSolution,
    /// Report [`ChangeError::ZeroAmount`].
    Reject,
}

/// Configuration for a [`ChangeMaker`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChangeMakerConfig {
    /// Handling of an amount of 0
    pub zero_amount: ZeroAmountPolicy,
    /// Amounts above this are rejected before any table is built
    pub max_amount: Option<usize>,
}

/// Makes change from a fixed set of denominations.
///
/// Each call builds its own table, so one maker can serve any number of
/// amounts, from any number of threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeMaker {
    denominations: Denominations,
    config: ChangeMakerConfig,
}

impl ChangeMaker {
    /// Creates a maker with the default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ChangeError::InvalidDenomination`] if any value is not positive.
    pub fn new(denominations: &[i64]) -> Result<Self> {
        Self::with_config(denominations, ChangeMakerConfig::default())
    }

    pub fn with_config(denominations: &[i64], config: ChangeMakerConfig) -> Result<Self> {
        Ok(Self::from_denominations(
            Denominations::new(denominations)?,
            config,
        ))
    }

    pub fn from_denominations(denominations: Denominations, config: ChangeMakerConfig) -> Self {
        Self {
            denominations,
            config,
        }
    }

    pub fn denominations(&self) -> &Denominations {
        &self.denominations
    }

    pub fn config(&self) -> &ChangeMakerConfig {
        &self.config
    }

    /// Builds the reachability table for `amount` after validating it.
    ///
    /// An amount of 0 yields an empty table unless the policy rejects it.
    pub fn table(&self, amount: i64) -> Result<ReachabilityTable> {
        let amount = self.check_amount(amount)?;
        Ok(ReachabilityTable::build(&self.denominations, amount))
    }

    /// Every distinct combination summing to `amount`, or `None` when there is
    /// no solution.
    ///
    /// Combinations are sorted non-increasing and returned in descending
    /// lexicographic order. The result grows combinatorially with the amount
    /// for dense denomination sets; callers that only need the number should
    /// use [`count_change`](Self::count_change) or cap the amount through
    /// [`ChangeMakerConfig::max_amount`].
    ///
    /// # Errors
    ///
    /// * [`ChangeError::NegativeAmount`] if `amount < 0`
    /// * [`ChangeError::AmountTooLarge`] if `amount` exceeds the configured limit
    /// * [`ChangeError::EmptyDenominations`] if `amount > 0` and there are no coins
    /// * [`ChangeError::ZeroAmount`] if `amount == 0` under [`ZeroAmountPolicy::Reject`]
    pub fn change(&self, amount: i64) -> Result<Option<Vec<Combination>>> {
        let amount = self.check_amount(amount)?;
        if amount == 0 {
            return Ok(match self.config.zero_amount {
                ZeroAmountPolicy::EmptyCombination => Some(vec![Vec::new()]),
                _ => None,
            });
        }

        let table = ReachabilityTable::build(&self.denominations, amount);
        if !table.is_solvable() {
            debug!("no solution for amount {}", amount);
            return Ok(None);
        }
        Ok(Some(CombinationGraph::build(&table).enumerate()))
    }

    /// The number of combinations [`change`](Self::change) would return,
    /// computed without building them.
    ///
    /// Fails under the same conditions as `change`, and additionally with
    /// [`ChangeError::CountOverflow`] when the count does not fit in a `u64`.
    pub fn count_change(&self, amount: i64) -> Result<Option<u64>> {
        let amount = self.check_amount(amount)?;
        if amount == 0 {
            return Ok(match self.config.zero_amount {
                ZeroAmountPolicy::EmptyCombination => Some(1),
                _ => None,
            });
        }

        let table = ReachabilityTable::build(&self.denominations, amount);
        match count_combinations(&table)? {
            0 => Ok(None),
            count => Ok(Some(count)),
        }
    }

    fn check_amount(&self, amount: i64) -> Result<usize> {
        let value = usize::try_from(amount).map_err(|_| ChangeError::NegativeAmount { amount })?;

        if let Some(limit) = self.config.max_amount {
            if value > limit {
                return Err(ChangeError::AmountTooLarge {
                    amount: value,
                    limit,
                });
            }
        }
        if value == 0 && self.config.zero_amount == ZeroAmountPolicy::Reject {
            return Err(ChangeError::ZeroAmount);
        }
        if value > 0 && self.denominations.is_empty() {
            return Err(ChangeError::EmptyDenominations { amount: value });
        }

        debug!(
            "making change for {} from {} denominations",
            value,
            self.denominations.len()
        );
        Ok(value)
    }
}
