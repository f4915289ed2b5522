use crate::error::{ChangeError, Result};

/// The coin values a [`ChangeMaker`](super::ChangeMaker) may use.
///
/// Values are copied out of the caller's slice, sorted ascending and
/// deduplicated. The set is immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Denominations {
    values: Vec<usize>,
}

impl Denominations {
    /// Validates and normalizes `values`.
    ///
    /// Any iteration order is accepted. Repeated values collapse into one.
    ///
    /// # Errors
    ///
    /// Returns [`ChangeError::InvalidDenomination`] for the first value that is
    /// zero or negative.
    ///
    /// # Examples
    ///
    /// ```
    /// use changemaker::Denominations;
    ///
    /// let coins = [25, 1, 10, 5, 5];
    /// let denoms = Denominations::new(&coins).unwrap();
    /// assert_eq!(denoms.as_slice(), &[1, 5, 10, 25]);
    /// // The caller's slice is untouched.
    /// assert_eq!(coins, [25, 1, 10, 5, 5]);
    /// ```
    pub fn new(values: &[i64]) -> Result<Self> {
        let mut owned = Vec::with_capacity(values.len());
        for &value in values {
            let coin = usize::try_from(value)
                .ok()
                .filter(|&coin| coin > 0)
                .ok_or(ChangeError::InvalidDenomination { value })?;
            owned.push(coin);
        }
        owned.sort_unstable();
        owned.dedup();
        Ok(Self { values: owned })
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The smallest coin, which bounds the depth of any combination.
    pub fn smallest(&self) -> Option<usize> {
        self.values.first().copied()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = usize> + ExactSizeIterator + '_ {
        self.values.iter().copied()
    }

    /// Value of the denomination at `index` in ascending order.
    pub(crate) fn value(&self, index: usize) -> usize {
        self.values[index]
    }
}
