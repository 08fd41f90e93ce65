//! Bucket distribution statistics for `ChainedHashSet`.

use crate::chained_hash_set::ChainedHashSet;

/// One-pass snapshot of a table's distribution, as reported by
/// [`ChainedHashSet::distribution`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableStats {
    pub len: usize,
    pub capacity: usize,
    pub load_factor: f64,
    pub collisions: usize,
    pub biggest_bucket: usize,
    pub empty_buckets: usize,
}

impl<E, S> ChainedHashSet<E, S> {
    /// Ratio of stored elements to buckets.
    pub fn load_factor(&self) -> f64 {
        self.len() as f64 / self.capacity() as f64
    }

    /// Total collisions: a bucket holding `k` elements contributes
    /// `k - 1`, one per element that landed in an already-occupied
    /// bucket.
    pub fn collisions(&self) -> usize {
        self.buckets
            .iter()
            .map(|b| b.len().saturating_sub(1))
            .sum()
    }

    /// Length of the longest chain; 0 when the table is empty.
    pub fn biggest_bucket(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Number of buckets currently holding nothing.
    pub fn empty_buckets(&self) -> usize {
        self.buckets.iter().filter(|b| b.is_empty()).count()
    }

    /// Computes every distribution statistic in a single scan of the
    /// bucket array.
    pub fn distribution(&self) -> TableStats {
        let mut collisions = 0;
        let mut biggest_bucket = 0;
        let mut empty_buckets = 0;
        for bucket in &self.buckets {
            let n = bucket.len();
            if n == 0 {
                empty_buckets += 1;
            } else {
                collisions += n - 1;
            }
            biggest_bucket = biggest_bucket.max(n);
        }
        TableStats {
            len: self.len(),
            capacity: self.capacity(),
            load_factor: self.load_factor(),
            collisions,
            biggest_bucket,
            empty_buckets,
        }
    }
}
