use core::fmt;

use rand::rngs::ThreadRng;
use rand::Rng;

use crate::RangeError;

/// Default upper bound on the random gap between consecutive values.
pub const DEFAULT_GAP_BOUND: i64 = 5;

/// Default floor: produced values start strictly above this.
pub const DEFAULT_FLOOR: i64 = -1;

/// A lazy, strictly increasing integer sequence with random gaps.
///
/// Each value exceeds its predecessor (or the floor, for the first value)
/// by a uniformly drawn gap in `1..=gap_bound`. A `GappedRange` built for
/// `count` yields exactly `count + 1` values and is then exhausted; build
/// a fresh one to produce another sequence.
///
/// The random source is a type parameter defaulting to the thread-local
/// generator. Swap in a seeded generator via [`with_rng`] for reproducible
/// output.
///
/// [`with_rng`]: GappedRange::with_rng
///
/// # Examples
/// ```
/// use range_search::GappedRange;
///
/// let values: Vec<i64> = GappedRange::new(10).collect();
/// assert_eq!(values.len(), 11);
/// assert!(values[0] > -1);
/// assert!(values.windows(2).all(|w| w[1] - w[0] >= 1 && w[1] - w[0] <= 5));
/// ```
#[derive(Clone)]
pub struct GappedRange<R: Rng = ThreadRng> {
    remaining: usize,
    prev: i64,
    gap_bound: i64,
    rng: R,
}

impl GappedRange<ThreadRng> {
    /// Creates a generator yielding `count + 1` values, starting strictly
    /// above [`DEFAULT_FLOOR`] with gaps in `1..=`[`DEFAULT_GAP_BOUND`],
    /// drawn from the thread-local random generator.
    pub fn new(count: usize) -> Self {
        Self {
            remaining: count + 1,
            prev: DEFAULT_FLOOR,
            gap_bound: DEFAULT_GAP_BOUND,
            rng: rand::rng(),
        }
    }
}

impl<R: Rng> GappedRange<R> {
    /// Sets the floor: every produced value is strictly greater than
    /// `floor`.
    #[inline]
    pub fn starting_above(mut self, floor: i64) -> Self {
        self.prev = floor;
        self
    }

    /// Sets the upper bound on the random gap.
    ///
    /// # Panics (debug only)
    /// If `bound` is less than 1.
    #[inline]
    pub fn gap_bound(mut self, bound: i64) -> Self {
        debug_assert!(bound >= 1, "gap bound must be at least 1");
        self.gap_bound = bound;
        self
    }

    /// Sets the upper bound on the random gap if it is valid.
    ///
    /// Returns [`RangeError::InvalidGapBound`] if `bound` is less than 1.
    ///
    /// [`RangeError::InvalidGapBound`]: crate::RangeError::InvalidGapBound
    #[inline]
    pub fn try_gap_bound(mut self, bound: i64) -> Result<Self, RangeError> {
        if bound < 1 {
            return Err(RangeError::InvalidGapBound);
        }
        self.gap_bound = bound;
        Ok(self)
    }

    /// Replaces the random source, e.g. with a seeded generator for
    /// reproducible sequences.
    ///
    /// # Examples
    /// ```
    /// use range_search::GappedRange;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let a: Vec<i64> = GappedRange::new(10).with_rng(StdRng::seed_from_u64(7)).collect();
    /// let b: Vec<i64> = GappedRange::new(10).with_rng(StdRng::seed_from_u64(7)).collect();
    /// assert_eq!(a, b);
    /// ```
    pub fn with_rng<S: Rng>(self, rng: S) -> GappedRange<S> {
        GappedRange {
            remaining: self.remaining,
            prev: self.prev,
            gap_bound: self.gap_bound,
            rng,
        }
    }
}

impl<R: Rng> Iterator for GappedRange<R> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let gap = self.rng.random_range(1..=self.gap_bound);
        let value = self.prev + gap;
        self.prev = value;
        Some(value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Rng> ExactSizeIterator for GappedRange<R> {}

impl<R: Rng> fmt::Debug for GappedRange<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GappedRange")
            .field("remaining", &self.remaining)
            .field("prev", &self.prev)
            .field("gap_bound", &self.gap_bound)
            .finish()
    }
}
