use std::cmp::Reverse;

use itertools::Itertools;

use crate::puzzle::{Crossword, SlotId, WordId};
use crate::solve::{Assignment, Domains, Problem};

/// Chooses the unassigned slot with the fewest remaining words.
/// Ties go to the slot crossing the most other slots, then to the lowest `SlotId`.
/// Returns `None` if every slot is assigned.
pub fn select_unassigned_variable(
    crossword: &Crossword,
    domains: &Domains,
    assignment: &Assignment,
) -> Option<SlotId> {
    crossword
        .variables()
        .filter(|&slot| !assignment.contains(slot))
        .min_by_key(|&slot| (domains[slot].len(), Reverse(crossword.degree(slot))))
}

/// Orders the words of a slot so that the words ruling out the fewest words
/// in unassigned neighboring slots come first
pub fn order_domain_values(
    problem: Problem<'_>,
    domains: &Domains,
    slot: SlotId,
    assignment: &Assignment,
) -> Vec<WordId> {
    let crossword = problem.crossword;
    let neighbors: Vec<_> = crossword
        .neighbors(slot)
        .filter(|&neighbor| !assignment.contains(neighbor))
        .filter_map(|neighbor| {
            crossword
                .overlap(slot, neighbor)
                .map(|overlap| (neighbor, overlap))
        })
        .collect();
    let ruled_out = |word: WordId| -> usize {
        neighbors
            .iter()
            .map(|&(neighbor, overlap)| {
                domains[neighbor]
                    .iter()
                    .filter(|&other| !problem.letters_agree(overlap, word, other))
                    .count()
            })
            .sum()
    };
    domains[slot].iter().sorted_by_key(|&word| ruled_out(word)).collect()
}

pub(crate) enum SearchResult {
    /// the assignment is complete
    Found,
    /// no word fits the next slot
    Exhausted,
    LimitReached,
}

/// Depth-first search over partial assignments
pub(crate) struct Search<'a> {
    problem: Problem<'a>,
    domains: &'a Domains,
    node_limit: Option<u64>,
    nodes: u64,
    backtracks: u64,
    depth: u32,
}

impl<'a> Search<'a> {
    pub fn new(problem: Problem<'a>, domains: &'a Domains, node_limit: Option<u64>) -> Self {
        Self {
            problem,
            domains,
            node_limit,
            nodes: 0,
            backtracks: 0,
            depth: 0,
        }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    pub fn backtracks(&self) -> u64 {
        self.backtracks
    }

    /// Extends the assignment until every slot has a word.
    /// The assignment is left complete if a solution is found and unchanged otherwise.
    pub fn backtrack(&mut self, assignment: &mut Assignment) -> SearchResult {
        self.nodes += 1;
        if self.node_limit.map_or(false, |limit| self.nodes > limit) {
            debug!("Node limit reached");
            return SearchResult::LimitReached;
        }
        let crossword = self.problem.crossword;
        let slot = match select_unassigned_variable(crossword, self.domains, assignment) {
            Some(slot) => slot,
            None => return SearchResult::Found,
        };
        self.depth += 1;
        let result = self.try_words(assignment, slot);
        self.depth -= 1;
        result
    }

    fn try_words(&mut self, assignment: &mut Assignment, slot: SlotId) -> SearchResult {
        debug!(
            "Backtracking (depth={}) at slot {}",
            self.depth,
            self.problem.crossword.slot(slot)
        );
        let words = order_domain_values(self.problem, self.domains, slot, assignment);
        for (i, word) in words.into_iter().enumerate() {
            let mut binding = assignment.bind(slot, word);
            if !binding.is_consistent(self.problem) {
                continue;
            }
            trace!(
                "Trying {} at {}, guess #: {}",
                self.problem.vocabulary.word(word),
                self.problem.crossword.slot(slot),
                i + 1
            );
            match self.backtrack(&mut binding) {
                SearchResult::Found => {
                    binding.keep();
                    return SearchResult::Found;
                }
                SearchResult::Exhausted => self.backtracks += 1,
                SearchResult::LimitReached => return SearchResult::LimitReached,
            }
        }
        SearchResult::Exhausted
    }
}
