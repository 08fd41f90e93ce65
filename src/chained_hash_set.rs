//! ChainedHashSet: fixed-capacity separate-chaining set over a bucket array.

use core::borrow::Borrow;
use core::hash::{BuildHasher, Hash};
use std::collections::hash_map::RandomState;

/// Errors surfaced by fallible `ChainedHashSet` operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetError {
    /// Construction was asked for a table with zero buckets.
    ZeroCapacity,
    /// The operation is intentionally not provided by this structure.
    Unsupported(UnsupportedOp),
}

/// Bulk operations that fail with [`SetError::Unsupported`] instead of
/// silently doing nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnsupportedOp {
    RemoveAll,
    RetainAll,
    ToVec,
}

/// A hash set with a fixed number of buckets and separate chaining.
///
/// Elements are dispatched to `hash(e) mod capacity` and stored in their
/// bucket in insertion order; equal elements are never stored twice. The
/// bucket count is chosen at construction and never changes: there is no
/// rehashing policy, so a poorly sized table degrades to long chains
/// rather than resizing. The distribution accessors (`load_factor`,
/// `collisions`, `biggest_bucket`, `empty_buckets`) report how well the
/// hasher spreads the current contents.
///
/// Absent elements cannot be expressed: `add` takes an `E` by value, so
/// the no-null invariant of the set holds by construction.
///
/// Single-threaded; mutation requires `&mut self`.
pub struct ChainedHashSet<E, S = RandomState> {
    hasher: S,
    pub(crate) buckets: Vec<Vec<E>>,
    len: usize,
}

impl<E> ChainedHashSet<E>
where
    E: Eq + Hash,
{
    /// Creates a set with `capacity` buckets and the default hasher.
    pub fn with_capacity(capacity: usize) -> Result<Self, SetError> {
        Self::with_capacity_and_hasher(capacity, RandomState::default())
    }
}

impl<E, S> ChainedHashSet<E, S>
where
    E: Eq + Hash,
    S: BuildHasher,
{
    /// Creates a set with `capacity` buckets using `hasher` for bucket
    /// selection. Fails with [`SetError::ZeroCapacity`] when `capacity`
    /// is zero.
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Result<Self, SetError> {
        if capacity == 0 {
            return Err(SetError::ZeroCapacity);
        }
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, Vec::new);
        Ok(Self {
            hasher,
            buckets,
            len: 0,
        })
    }

    fn make_hash<Q>(&self, q: &Q) -> u64
    where
        Q: ?Sized + Hash,
    {
        self.hasher.hash_one(q)
    }

    /// Maps a hash code to a bucket index in `[0, capacity)`.
    ///
    /// The code is interpreted as signed and reduced with `rem_euclid` in
    /// a 128-bit intermediate. Taking the absolute value before the
    /// modulo, as chaining tables with signed hash codes traditionally
    /// do, is wrong for the single most-negative code: its absolute value
    /// is unrepresentable and the negation overflows. The wider euclidean
    /// reduction has no such case.
    fn bucket_index(&self, hash: u64) -> usize {
        i128::from(hash as i64).rem_euclid(self.buckets.len() as i128) as usize
    }

    /// Adds `element` to the set if no equal element is present.
    ///
    /// Returns `true` if the set changed; `false` leaves the set
    /// untouched (the already-stored equal element wins).
    pub fn add(&mut self, element: E) -> bool {
        let idx = self.bucket_index(self.make_hash(&element));
        let bucket = &mut self.buckets[idx];
        if bucket.contains(&element) {
            return false;
        }
        bucket.push(element);
        self.len += 1;
        true
    }

    /// Adds every element of `elements` in input order. Returns `true`
    /// if at least one add changed the set. Elements added before a
    /// duplicate stay in; there is no rollback.
    pub fn add_all<I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = E>,
    {
        let mut changed = false;
        for element in elements {
            changed |= self.add(element);
        }
        changed
    }

    /// Returns whether an element equal to `target` is stored. Probes
    /// only the bucket `target` hashes to.
    pub fn contains<Q>(&self, target: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = self.bucket_index(self.make_hash(target));
        self.buckets[idx].iter().any(|e| e.borrow() == target)
    }

    /// Returns whether every target is contained; stops at the first
    /// miss.
    pub fn contains_all<'a, I, Q>(&self, targets: I) -> bool
    where
        I: IntoIterator<Item = &'a Q>,
        E: Borrow<Q>,
        Q: ?Sized + Hash + Eq + 'a,
    {
        targets.into_iter().all(|q| self.contains(q))
    }

    /// Removes the element equal to `target`, if present. The rest of
    /// the bucket keeps its insertion order. Returns whether the set
    /// changed.
    pub fn remove<Q>(&mut self, target: &Q) -> bool
    where
        E: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let idx = self.bucket_index(self.make_hash(target));
        let bucket = &mut self.buckets[idx];
        match bucket.iter().position(|e| e.borrow() == target) {
            Some(pos) => {
                bucket.remove(pos);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /// Bulk set difference. Not provided; always fails with
    /// [`SetError::Unsupported`], never a silent no-op.
    pub fn remove_all<I>(&mut self, _elements: I) -> Result<bool, SetError>
    where
        I: IntoIterator<Item = E>,
    {
        Err(SetError::Unsupported(UnsupportedOp::RemoveAll))
    }

    /// Bulk set intersection. Not provided; see [`Self::remove_all`].
    pub fn retain_all<I>(&mut self, _elements: I) -> Result<bool, SetError>
    where
        I: IntoIterator<Item = E>,
    {
        Err(SetError::Unsupported(UnsupportedOp::RetainAll))
    }

    /// Exports the contents as an owned `Vec`. Not provided; see
    /// [`Self::remove_all`].
    pub fn to_vec(&self) -> Result<Vec<E>, SetError>
    where
        E: Clone,
    {
        Err(SetError::Unsupported(UnsupportedOp::ToVec))
    }
}

impl<E, S> ChainedHashSet<E, S> {
    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Empties every bucket and resets the length. Capacity is
    /// unchanged.
    pub fn clear(&mut self) {
        for bucket in &mut self.buckets {
            bucket.clear();
        }
        self.len = 0;
    }

    /// Iterates the stored elements, buckets in index order and each
    /// bucket in insertion order. The borrow rules keep the set
    /// unmodified for the iterator's lifetime.
    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            buckets: self.buckets.iter(),
            bucket: [].iter(),
        }
    }
}

/// Lazy iterator over the elements of a `ChainedHashSet`.
pub struct Iter<'a, E> {
    buckets: core::slice::Iter<'a, Vec<E>>,
    bucket: core::slice::Iter<'a, E>,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = &'a E;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(e) = self.bucket.next() {
                return Some(e);
            }
            self.bucket = self.buckets.next()?.iter();
        }
    }
}

impl<'a, E, S> IntoIterator for &'a ChainedHashSet<E, S> {
    type Item = &'a E;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
