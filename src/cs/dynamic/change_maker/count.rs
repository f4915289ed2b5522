use log::debug;

use super::reachability::ReachabilityTable;
use crate::error::{ChangeError, Result};

/// Counts the combinations recorded in `table` without building any of them.
///
/// Counts the same paths [`CombinationGraph::enumerate`](super::CombinationGraph::enumerate)
/// lists, but shares every `(remaining, ceiling)` subproblem. `ways[s][j]` is the
/// number of combinations of `s` whose largest coin is denomination `j` or
/// smaller, filled for ascending `s` so each entry reads only finished ones:
///
/// `ways[s][j] = ways[s][j - 1] + [table has coin d_j at s] · (d_j == s ? 1 : ways[s - d_j][j])`
///
/// The result always equals the number of combinations enumeration would
/// return. An unsolvable or empty table counts 0.
///
/// # Errors
///
/// Returns [`ChangeError::CountOverflow`] when the count does not fit in a `u64`.
///
/// # Complexity
/// * Time: O(N·C) for N = amount and C = denominations
/// * Space: O(N·C) counters
///
/// # Examples
///
/// ```
/// use changemaker::{count_combinations, Denominations, ReachabilityTable};
///
/// let denoms = Denominations::new(&[2, 1]).unwrap();
/// let table = ReachabilityTable::build(&denoms, 3);
/// assert_eq!(count_combinations(&table).unwrap(), 2);
/// ```
pub fn count_combinations(table: &ReachabilityTable) -> Result<u64> {
    if !table.is_solvable() {
        return Ok(0);
    }

    let denominations = table.denominations();
    let width = denominations.len();
    let amount = table.amount();
    // Row `s - 1` holds the prefix counts for sum `s`.
    let mut ways = vec![0_u64; amount * width];
    let overflow = || ChangeError::CountOverflow { amount };

    for sum in 1..=amount {
        let row = (sum - 1) * width;
        let mut cells = table.cell_indices(sum).peekable();
        let mut running = 0_u64;

        for j in 0..width {
            if cells.next_if_eq(&j).is_some() {
                let coin = denominations.value(j);
                let tails = if coin == sum {
                    1
                } else {
                    ways[(sum - coin - 1) * width + j]
                };
                running = running.checked_add(tails).ok_or_else(overflow)?;
            }
            ways[row + j] = running;
        }
    }

    let count = ways[amount * width - 1];
    debug!("counted {} combinations for amount {}", count, amount);
    Ok(count)
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::super::denominations::Denominations;
    use super::super::graph::CombinationGraph;
    use super::*;
    use crate::cs::dynamic::coin_change::count_change_ways;

    fn count_for(coins: &[i64], amount: usize) -> Result<u64> {
        let denoms = Denominations::new(coins).unwrap();
        count_combinations(&ReachabilityTable::build(&denoms, amount))
    }

    #[test]
    fn test_small_counts() {
        assert_eq!(count_for(&[2, 1], 3), Ok(2));
        assert_eq!(count_for(&[2], 2), Ok(1));
        assert_eq!(count_for(&[2], 1), Ok(0));
        assert_eq!(count_for(&[3, 4, 5, 7], 10), Ok(3));
        assert_eq!(count_for(&[25, 10, 5, 1], 8), Ok(2));
    }

    #[test]
    fn test_us_dollar() {
        // 242 ways to change a dollar with pennies, nickels, dimes and quarters.
        assert_eq!(count_for(&[25, 10, 5, 1], 100), Ok(242));
    }

    #[test]
    fn test_empty_table_counts_zero() {
        assert_eq!(count_for(&[1], 0), Ok(0));
        assert_eq!(count_for(&[], 5), Ok(0));
    }

    #[test]
    fn test_matches_enumeration() {
        let denoms = Denominations::new(&[1, 2, 3, 5, 8]).unwrap();
        for amount in 1..=40 {
            let table = ReachabilityTable::build(&denoms, amount);
            let listed = CombinationGraph::build(&table).enumerate().len() as u64;
            assert_eq!(count_combinations(&table), Ok(listed), "amount {}", amount);
        }
    }

    #[test]
    fn test_deep_walk_with_pennies() {
        assert_eq!(count_for(&[1], 100_000), Ok(1));
    }

    #[test]
    fn test_large_amount_shares_subproblems() {
        let start = Instant::now();
        let count = count_for(&[25, 10, 5, 1], 5_000);
        assert!(start.elapsed() < Duration::from_secs(2));
        assert_eq!(count, Ok(count_change_ways(&[1, 5, 10, 25], 5_000)));
        assert_eq!(count, Ok(16_892_551));

        let coins: Vec<i64> = (1..=19).collect();
        let reference: Vec<usize> = (1..=19).collect();
        assert_eq!(count_for(&coins, 100), Ok(count_change_ways(&reference, 100)));
    }

    #[test]
    fn test_overflow_is_reported() {
        let coins: Vec<i64> = (1..=64).collect();
        assert_eq!(
            count_for(&coins, 5_000),
            Err(ChangeError::CountOverflow { amount: 5_000 })
        );
    }
}
