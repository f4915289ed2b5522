use std::time::{Duration, Instant};

use log::debug;
use rand::Rng;

use super::ChangeMaker;
use crate::error::{ChangeError, Result};

/// One timed call to [`ChangeMaker::count_change`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sample {
    pub amount: usize,
    /// Number of combinations, 0 when the amount cannot be made.
    pub count: u64,
    pub elapsed: Duration,
}

/// Times `count_change` on `samples` amounts drawn uniformly from `1..=max_amount`.
///
/// # Errors
///
/// Returns [`ChangeError::AmountTooLarge`] before sampling when `max_amount`
/// exceeds the maker's configured limit, and otherwise propagates any error
/// from `count_change`. A `max_amount` of 0 leaves nothing to sample and yields
/// no samples.
///
/// # Examples
///
/// ```
/// use changemaker::{benchmark_count_change, ChangeMaker};
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
///
/// let maker = ChangeMaker::new(&[25, 10, 5, 1]).unwrap();
/// let mut rng = StdRng::seed_from_u64(42);
/// let samples = benchmark_count_change(&maker, 200, 10, &mut rng).unwrap();
/// assert_eq!(samples.len(), 10);
/// ```
pub fn benchmark_count_change<R: Rng>(
    maker: &ChangeMaker,
    max_amount: usize,
    samples: usize,
    rng: &mut R,
) -> Result<Vec<Sample>> {
    if max_amount == 0 {
        return Ok(Vec::new());
    }
    if let Some(limit) = maker.config().max_amount {
        if max_amount > limit {
            return Err(ChangeError::AmountTooLarge {
                amount: max_amount,
                limit,
            });
        }
    }

    let mut results = Vec::with_capacity(samples);
    for _ in 0..samples {
        let amount = rng.gen_range(1..=max_amount);
        let signed = i64::try_from(amount).map_err(|_| ChangeError::AmountTooLarge {
            amount,
            limit: i64::MAX as usize,
        })?;

        let start = Instant::now();
        let count = maker.count_change(signed)?.unwrap_or(0);
        let elapsed = start.elapsed();

        results.push(Sample {
            amount,
            count,
            elapsed,
        });
    }

    debug!("collected {} count_change samples up to {}", results.len(), max_amount);
    Ok(results)
}
