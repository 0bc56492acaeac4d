//! Pairing engine: greedy first-match assignment of sources to targets.

use cohort_core::Identified;
use tracing::{debug, trace};

use crate::pair::MergePair;

/// Match a source collection against a target collection.
///
/// Greedy, single pass, order-sensitive by design: a working pool is copied
/// from `targets` in order, and each source claims the *first* pool element
/// for which `equivalent` holds. The claimed element is removed from the
/// pool positionally, so value-duplicates in the target collection remain
/// distinguishable. Sources without a match become source-only pairs;
/// whatever remains in the pool afterwards becomes target-only pairs, in
/// pool order.
///
/// This is not a globally optimal bipartite matching. If a source satisfies
/// `equivalent` against several targets, it binds to whichever qualifying
/// target occurs earliest in target order at the time of scanning; the rest
/// stay unclaimed. Known limitation, kept deliberately.
///
/// Output order is fixed: one pair per source in source order, then one pair
/// per unclaimed target in target order. Every input record appears in
/// exactly one output pair. Cost is O(|sources| × |targets|) comparator
/// evaluations, acceptable for the small, operator-triggered collections
/// reconciliation runs on.
pub fn pair_records<'a, T, E>(
    sources: &'a [T],
    targets: &'a [T],
    equivalent: E,
) -> Vec<MergePair<&'a T>>
where
    T: Identified,
    E: Fn(&T, &T) -> bool,
{
    let mut pool: Vec<&'a T> = targets.iter().collect();
    let mut pairs = Vec::with_capacity(sources.len() + targets.len());
    let mut matched = 0usize;

    for source in sources {
        match pool.iter().position(|t| equivalent(source, *t)) {
            Some(idx) => {
                let target = pool.remove(idx);
                trace!(
                    source_id = %source.record_id(),
                    target_id = %target.record_id(),
                    "matched source to target"
                );
                matched += 1;
                pairs.push(MergePair::matched(source, target));
            }
            None => {
                trace!(source_id = %source.record_id(), "source has no counterpart");
                pairs.push(MergePair::source_only(source));
            }
        }
    }

    for target in pool {
        trace!(target_id = %target.record_id(), "target has no counterpart");
        pairs.push(MergePair::target_only(target));
    }

    debug!(
        sources = sources.len(),
        targets = targets.len(),
        matched,
        pairs = pairs.len(),
        "paired record collections"
    );

    pairs
}
