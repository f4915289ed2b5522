use bitvec::prelude::*;
use log::{debug, trace};

use super::denominations::Denominations;

/// Per-sum record of which coins can be the largest coin of some combination.
///
/// Cell `i` (sum `i + 1`) holds one bit per denomination, in ascending order.
/// Bit `j` is set when the coin `d = denominations[j]` either equals the sum
/// or can be followed by a combination of `sum - d` whose largest coin is at
/// most `d`. Reading coins from largest to smallest therefore never revisits a
/// multiset in another order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReachabilityTable {
    denominations: Denominations,
    cells: Vec<BitVec>,
}

impl ReachabilityTable {
    /// Fills the table for every sum from 1 to `amount` in one forward pass.
    ///
    /// An `amount` of 0 yields a table with no cells.
    ///
    /// # Complexity
    /// * Time: O(C·N) bit tests plus the prefix scans, C = denominations, N = amount
    /// * Space: O(C·N) bits
    ///
    /// # Examples
    ///
    /// ```
    /// use changemaker::{Denominations, ReachabilityTable};
    ///
    /// let denoms = Denominations::new(&[25, 10, 5, 1]).unwrap();
    /// let table = ReachabilityTable::build(&denoms, 10);
    /// assert_eq!(table.cell(10).collect::<Vec<_>>(), vec![1, 5, 10]);
    /// assert!(table.is_solvable());
    /// ```
    pub fn build(denominations: &Denominations, amount: usize) -> Self {
        let width = denominations.len();
        let mut cells: Vec<BitVec> = Vec::with_capacity(amount);

        for sum in 1..=amount {
            let mut cell = bitvec![0; width];
            for (j, coin) in denominations.iter().enumerate() {
                if coin > sum {
                    break;
                }
                // The remainder must be reachable with a largest coin <= `coin`.
                if coin == sum || cells[sum - coin - 1][..=j].any() {
                    cell.set(j, true);
                }
            }
            trace!("reachability cell {}: {} candidate coins", sum, cell.count_ones());
            cells.push(cell);
        }

        debug!(
            "built reachability table for amount {} over {} denominations",
            amount, width
        );

        Self {
            denominations: denominations.clone(),
            cells,
        }
    }

    /// The target amount this table was built for.
    pub fn amount(&self) -> usize {
        self.cells.len()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn denominations(&self) -> &Denominations {
        &self.denominations
    }

    /// Whether at least one combination reaches the full amount.
    ///
    /// Always `false` for an empty table.
    pub fn is_solvable(&self) -> bool {
        self.cells.last().is_some_and(|cell| cell.any())
    }

    /// Coin values recorded for `sum`, ascending.
    ///
    /// # Panics
    ///
    /// Panics if `sum` is 0 or larger than [`amount`](Self::amount).
    pub fn cell(&self, sum: usize) -> impl Iterator<Item = usize> + '_ {
        self.cell_indices(sum)
            .map(move |j| self.denominations.value(j))
    }

    /// Whether `value` is recorded for `sum`. Out-of-range sums hold nothing.
    pub fn contains(&self, sum: usize, value: usize) -> bool {
        if sum == 0 || sum > self.cells.len() {
            return false;
        }
        self.denominations
            .as_slice()
            .binary_search(&value)
            .map(|j| self.cells[sum - 1][j])
            .unwrap_or(false)
    }

    /// Denomination indices recorded for `sum`, ascending.
    pub(crate) fn cell_indices(&self, sum: usize) -> impl Iterator<Item = usize> + '_ {
        self.cells[sum - 1].iter_ones()
    }
}
