//! Fenwick-tree pool over a fixed set of non-negative integer weights.
//!
//! Supports removing an entry's weight and mapping a cumulative position to
//! the entry owning it, both in O(log n). Built once per use; entries leave
//! the pool by having their weight zeroed, the index space never shrinks.

/// Order-statistics structure over integer weights.
///
/// Entry `i` owns the half-open cumulative bracket
/// `[prefix_sum(i), prefix_sum(i + 1))`; [`WeightedPool::locate`] maps a
/// position in `[0, total)` back to the owning entry.
///
/// # Example
/// ```
/// use weighted_pool::WeightedPool;
/// let mut pool = WeightedPool::new([1, 3, 6]);
///
/// assert_eq!(pool.total(), 10);
/// assert_eq!(pool.locate(0.5), 0);
/// assert_eq!(pool.locate(4.5), 2);
///
/// pool.remove(2);
/// assert_eq!(pool.total(), 4);
/// assert_eq!(pool.locate(3.5), 1);
/// ```
#[derive(Clone, Debug)]
pub struct WeightedPool {
    weights: Vec<u64>,
    // 1-indexed; tree[i] holds the sum of the lowbit(i) weights ending at i
    tree: Vec<u64>,
    total: u64,
    max_bit: usize,
}

impl WeightedPool {
    pub fn new(weights: impl IntoIterator<Item = u64>) -> Self {
        let weights: Vec<u64> = weights.into_iter().collect();
        let n = weights.len();

        let mut tree = vec![0u64; n + 1];
        let mut total = 0u64;

        for i in 1..=n {
            total += weights[i - 1];
            tree[i] += weights[i - 1];

            let parent = i + lowbit(i);
            if parent <= n {
                tree[parent] += tree[i];
            }
        }

        Self {
            weights,
            tree,
            total,
            max_bit: highest_power_of_two_leq(n),
        }
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Current sum of all weights still in the pool.
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn weight(&self, index: usize) -> u64 {
        self.weights[index]
    }

    /// Sum of the first `count` weights.
    pub fn prefix_sum(&self, count: usize) -> u64 {
        let mut i = count.min(self.len());
        let mut sum = 0u64;
        while i > 0 {
            sum += self.tree[i];
            i &= i - 1;
        }
        sum
    }

    /// Zeroes the weight at `index` by applying the negative delta to every
    /// covering tree node. Indices whose weight is already zero are left
    /// untouched.
    pub fn remove(&mut self, index: usize) {
        let delta = self.weights[index];
        if delta == 0 {
            return;
        }

        self.weights[index] = 0;
        self.total -= delta;

        let mut i = index + 1;
        while i <= self.len() {
            self.tree[i] -= delta;
            i += lowbit(i);
        }
    }

    /// Returns the smallest index whose cumulative bracket contains `target`,
    /// for `0 <= target < total()`.
    ///
    /// Binary-lifting descent: starting from the largest power of two not
    /// exceeding `n`, a subtree is absorbed whenever the accumulated prefix
    /// stays at or below `target`. Zero-weight entries have empty brackets and
    /// are never returned. A `target` at or past `total()` (possible through
    /// floating-point overshoot in callers) resolves to the last index with
    /// positive weight.
    pub fn locate(&self, target: f64) -> usize {
        let n = self.len();
        debug_assert!(self.total > 0);

        let mut index = 0usize;
        let mut accumulated = 0u64;
        let mut bit = self.max_bit;

        while bit > 0 {
            let next = index + bit;
            if next <= n && (accumulated + self.tree[next]) as f64 <= target {
                accumulated += self.tree[next];
                index = next;
            }
            bit >>= 1;
        }

        // `index` now counts the entries whose brackets end at or before
        // `target`; the owning entry is the next one.
        if index < n && self.weights[index] > 0 {
            index
        } else {
            self.weights.iter().rposition(|&w| w > 0).unwrap()
        }
    }
}

#[inline]
fn lowbit(i: usize) -> usize {
    i & i.wrapping_neg()
}

fn highest_power_of_two_leq(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        1 << (usize::BITS - 1 - n.leading_zeros())
    }
}
