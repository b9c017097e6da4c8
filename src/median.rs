//! Median aggregate

use crate::error::{Error, Result};
use log::debug;

/// Default number of values a single group may hold (2 GiB of `f64`s)
pub const DEFAULT_LIMIT: usize = 268_435_455;

/// Accumulator for the `median()` aggregate
///
/// Follows the aggregate lifecycle of a query engine: [`clear`](Self::clear)
/// at the start of each group, [`add`](Self::add) once per row and
/// [`result`](Self::result) at the end of the group.
///
/// ```
/// use scisql::Median;
///
/// let mut median = Median::new();
/// for value in [Some(3.0), None, Some(1.0), Some(2.0), Some(10.0)] {
///     median.add(value)?;
/// }
/// assert_eq!(median.result(), Some(2.5));
/// # Ok::<(), scisql::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Median {
    values: Vec<f64>,
    limit: usize,
    overflowed: bool,
}

impl Default for Median {
    fn default() -> Self {
        Self::new()
    }
}

impl Median {
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            limit: DEFAULT_LIMIT,
            overflowed: false,
        }
    }

    /// Configure the maximum number of values per group
    ///
    /// Default is [`DEFAULT_LIMIT`].
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Number of values collected for the current group
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Start a new group
    pub fn clear(&mut self) {
        self.values.clear();
        self.overflowed = false;
    }

    /// Add a value to the current group
    ///
    /// Missing and NaN values are skipped. Exceeding the limit returns an
    /// error and leaves the group without a result until the next
    /// [`clear`](Self::clear).
    pub fn add(&mut self, value: Option<f64>) -> Result<()> {
        let Some(value) = value.filter(|v| !v.is_nan()) else {
            return Ok(());
        };

        if self.values.len() >= self.limit {
            debug!("median: group exceeded {} values", self.limit);
            self.overflowed = true;
            return Err(Error::TooManyValues { limit: self.limit });
        }

        self.values.push(value);
        Ok(())
    }

    /// Start a new group with `value` as its first row
    pub fn reset(&mut self, value: Option<f64>) -> Result<()> {
        self.clear();
        self.add(value)
    }

    /// Median of the current group
    ///
    /// Returns `None` if the group is empty or overflowed. For an even
    /// number of values the two middle values are averaged.
    pub fn result(&mut self) -> Option<f64> {
        if self.overflowed || self.values.is_empty() {
            return None;
        }

        let n = self.values.len();
        self.values.sort_unstable_by(f64::total_cmp);

        if n % 2 == 1 {
            Some(self.values[n / 2])
        } else {
            Some((self.values[n / 2 - 1] + self.values[n / 2]) / 2.0)
        }
    }
}
