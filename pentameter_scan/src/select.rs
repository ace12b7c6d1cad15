// Selector: picks the best realization from an enumerated set.
//
// Priority, in order:
// 1. any realization that is iambic pentameter;
// 2. otherwise any realization that is iambic;
// 3. otherwise the realization with the fewest mismatches.
//
// `Classification::rank` encodes exactly that order, so selection is a
// minimum over ranks. Ties go to the earliest realization in enumeration
// order. A pentameter realization ends the scan early since nothing can
// outrank it.

use crate::classify::{Classification, Tier, classify};
use crate::enumerate::RealizedPhrase;

/// Select the best realization and its classification. Returns `None` only
/// for an empty slice; an empty phrase still has one (empty) realization.
pub fn select<'r, 'a>(
    realizations: &'r [RealizedPhrase<'a>],
) -> Option<(&'r RealizedPhrase<'a>, Classification)> {
    let mut best: Option<(&'r RealizedPhrase<'a>, Classification)> = None;

    for realized in realizations {
        let c = classify(realized);
        let better = match &best {
            None => true,
            Some((_, current)) => c.rank() < current.rank(),
        };
        if better {
            best = Some((realized, c));
            if c.tier() == Tier::IambicPentameter {
                break;
            }
        }
    }

    best
}
