/// Counts the multisets of `coins` summing to `amount` with the classic
/// unbounded-knapsack recurrence.
///
/// This never looks at individual combinations, so it serves as an independent
/// reference for [`ChangeMaker::count_change`](crate::ChangeMaker::count_change).
/// Zero-valued and repeated coins are ignored. By the recurrence's base case,
/// an `amount` of 0 has exactly one way (no coins).
///
/// # Examples
///
/// ```
/// use changemaker::count_change_ways;
///
/// // 1+1+1+1+1, 1+1+1+2, 1+2+2, 5
/// assert_eq!(count_change_ways(&[1, 2, 5], 5), 4);
/// ```
pub fn count_change_ways(coins: &[usize], amount: usize) -> u64 {
    let mut distinct: Vec<usize> = coins.iter().copied().filter(|&c| c > 0).collect();
    distinct.sort_unstable();
    distinct.dedup();

    // ways[i] = number of multisets of the coins seen so far that sum to i
    let mut ways = vec![0_u64; amount + 1];
    ways[0] = 1;

    // Coins in the outer loop so each multiset is counted once, not per ordering.
    for &coin in &distinct {
        for curr_amount in coin..=amount {
            ways[curr_amount] += ways[curr_amount - coin];
        }
    }

    ways[amount]
}
