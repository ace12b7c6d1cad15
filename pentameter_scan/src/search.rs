// Best-realization search without enumeration.
//
// The enumerator materializes every combination of token readings, which is
// exponential in the number of ambiguous tokens. This module reaches the same
// verdict in time linear in the token count.
//
// Key observation: the expected stress of a syllable depends only on its
// position, so everything the rest of the walk needs to know about a prefix is
// how many voiced syllables it has. That count is tracked exactly up to the
// pentameter length and folded by parity beyond it (11 stands for "odd and
// past ten", 12 for "even and past ten"). For each of those 13 states the
// search keeps the fewest mismatches any prefix reaching it can have, plus a
// back-pointer to rebuild that prefix.
//
// The final choice applies the selector's priority to the states: a
// zero-mismatch prefix in state 10 is pentameter, any other zero-mismatch
// state is iambic, otherwise the state with fewest mismatches wins. Ties go to
// the lowest state and, within a state, to the first candidate that reached
// it, so the search may pick a different (equally ranked) realization than
// `select::select` would.

use pentameter_lang::Pronunciation;

use crate::classify::{Classification, PENTAMETER_SYLLABLES, Tier, classify, expected_stress};
use crate::enumerate::{Realized, RealizedPhrase};
use crate::expand::TokenCandidates;

/// Exact counts 0..=10, then "past ten" odd and even.
const STATES: usize = PENTAMETER_SYLLABLES + 3;

/// State index for a syllable count.
fn state_of(count: usize) -> usize {
    if count <= PENTAMETER_SYLLABLES {
        count
    } else {
        PENTAMETER_SYLLABLES + 1 + (count - PENTAMETER_SYLLABLES - 1) % 2
    }
}

/// Mismatches a pronunciation adds when its first voiced syllable falls at
/// position `start`.
fn mismatches_from(start: usize, pronunciation: &Pronunciation) -> usize {
    pronunciation
        .voiced()
        .enumerate()
        .filter(|&(i, stress)| stress != expected_stress(start + i))
        .count()
}

#[derive(Debug, Clone, Copy)]
struct Step<'a> {
    mismatches: usize,
    from: usize,
    pronunciation: &'a Pronunciation,
}

/// Find a best-ranked realization and its classification.
pub fn search<'a>(expanded: &'a [TokenCandidates<'a>]) -> (RealizedPhrase<'a>, Classification) {
    // frontier[s] = fewest mismatches of any prefix ending in state s.
    let mut frontier: [Option<usize>; STATES] = [None; STATES];
    frontier[0] = Some(0);
    let mut layers: Vec<[Option<Step<'a>>; STATES]> = Vec::with_capacity(expanded.len());

    for tc in expanded {
        let mut layer: [Option<Step<'a>>; STATES] = [None; STATES];
        for (from, reached) in frontier.iter().enumerate() {
            let Some(base) = *reached else { continue };
            // A state index is itself a syllable count of the right parity.
            let start = from;
            for pronunciation in tc.candidates {
                let to = state_of(start + pronunciation.voiced().count());
                let mismatches = base + mismatches_from(start, pronunciation);
                let improves = layer[to].is_none_or(|s| mismatches < s.mismatches);
                if improves {
                    layer[to] = Some(Step {
                        mismatches,
                        from,
                        pronunciation,
                    });
                }
            }
        }
        frontier = layer.map(|step| step.map(|s| s.mismatches));
        layers.push(layer);
    }

    let end = best_final_state(&frontier);

    // Walk the back-pointers from the chosen final state.
    let mut chosen: Vec<&'a Pronunciation> = Vec::with_capacity(expanded.len());
    let mut state = end;
    for layer in layers.iter().rev() {
        let step = layer[state].expect("every reached state has a predecessor");
        chosen.push(step.pronunciation);
        state = step.from;
    }
    chosen.reverse();

    let parts = expanded
        .iter()
        .zip(chosen)
        .map(|(tc, pronunciation)| Realized {
            token: &tc.token,
            pronunciation,
        })
        .collect();
    let realized = RealizedPhrase::new(parts);
    let classification = classify(&realized);
    (realized, classification)
}

/// Apply the selection priority to the final frontier. State 0 is always
/// reachable for an empty phrase and some state is reachable otherwise,
/// because candidate sets are never empty.
fn best_final_state(frontier: &[Option<usize>; STATES]) -> usize {
    let rank = |state: usize, mismatches: usize| {
        let tier = if mismatches > 0 {
            Tier::Other
        } else if state == PENTAMETER_SYLLABLES {
            Tier::IambicPentameter
        } else {
            Tier::Iambic
        };
        (tier, mismatches)
    };

    frontier
        .iter()
        .enumerate()
        .filter_map(|(state, m)| m.map(|m| (rank(state, m), state)))
        .min()
        .map_or(0, |(_, state)| state)
}
