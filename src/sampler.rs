use crate::entry::Entry;
use crate::random_source::RandomSource;
use weighted_pool::WeightedPool;

/// Draws up to `requested` distinct winners from `entries`, without
/// replacement: at every step the probability of selecting a still-eligible
/// entry is its weight divided by the sum of all remaining weights.
///
/// Entries with non-positive weight never occupy a pool slot and never win.
/// When `requested` exceeds the eligible count, every eligible entry wins
/// exactly once; the returned order is the draw order.
pub fn draw(entries: &[Entry], requested: usize, rng: &mut impl RandomSource) -> Vec<Entry> {
    if entries.is_empty() || requested == 0 {
        return Vec::new();
    }

    let eligible: Vec<&Entry> = entries.iter().filter(|e| e.is_eligible()).collect();
    if eligible.is_empty() {
        return Vec::new();
    }

    let mut pool = WeightedPool::new(eligible.iter().map(|e| e.weight as u64));
    let num_winners = requested.min(eligible.len());
    let mut winners = Vec::with_capacity(num_winners);

    // the total() guard stops the loop with a partial result should the
    // weight bookkeeping ever disagree with the winner count
    while winners.len() < num_winners && pool.total() > 0 {
        let target = scale_to_pool(rng.next(), pool.total());
        let index = pool.locate(target);

        winners.push(eligible[index].clone());
        pool.remove(index);
    }

    winners
}

/// Scales a unit-interval value into `[0, total)`, pulled below `total` by an
/// epsilon proportional to the current sum. The epsilon absorbs rounding at
/// the top of the range; the bias it introduces at the extreme boundary is
/// bounded by one unit in the last place of `total`.
fn scale_to_pool(r: f64, total: u64) -> f64 {
    let total = total as f64;
    let epsilon = f64::EPSILON * total;
    (r * total).min(total - epsilon).max(0.0)
}
