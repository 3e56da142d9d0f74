//! Solve crosswords
//!
//! Solving is done in three phases. Node consistency removes words of the wrong length from each slot.
//! Arc consistency (AC-3) removes words which cannot cross any word in a neighboring slot.
//! Finally, a backtracking search assigns words to slots one at a time.

pub use self::assignment::{Assignment, Binding};
pub use self::constraint::{ac3, ac3_with_arcs, enforce_node_consistency, revise, Arc};
pub use self::domain::{Domains, WordSet};
pub use self::search::{order_domain_values, select_unassigned_variable};
pub use self::solution::Solution;

use crate::puzzle::{Crossword, Overlap, Vocabulary, WordId};
use crate::solve::search::{Search, SearchResult};

mod assignment;
mod constraint;
mod domain;
mod search;
mod solution;

/// The outcome of solving a crossword
#[derive(Debug)]
pub enum SolveResult {
    /// No assignment of words satisfies the crossword
    Unsolvable,
    /// Every slot was filled
    Solved(SolvedData),
    /// The search visited more nodes than the configured limit allows
    LimitReached,
}

impl SolveResult {
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveResult::Solved(_))
    }

    pub fn solved(&self) -> Option<&SolvedData> {
        match self {
            SolveResult::Solved(data) => Some(data),
            _ => None,
        }
    }

    pub fn into_solution(self) -> Option<Solution> {
        match self {
            SolveResult::Solved(data) => Some(data.solution),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct SolvedData {
    pub solution: Solution,
    /// true if the search had to backtrack
    pub used_search: bool,
    /// the number of partial assignments visited by the search
    pub nodes: u64,
    /// the number of consistent words which were taken back because no solution followed them
    pub backtracks: u64,
}

/// A crossword together with the words available to fill it
#[derive(Clone, Copy, Debug)]
pub struct Problem<'a> {
    pub crossword: &'a Crossword,
    pub vocabulary: &'a Vocabulary,
}

impl<'a> Problem<'a> {
    pub fn new(crossword: &'a Crossword, vocabulary: &'a Vocabulary) -> Self {
        Self {
            crossword,
            vocabulary,
        }
    }

    /// Returns true if two words have the same letter at the shared cell.
    /// A word too short to reach the shared cell agrees with nothing.
    pub fn letters_agree(self, overlap: Overlap, a: WordId, b: WordId) -> bool {
        let letter_a = self.vocabulary.word(a).get(overlap.a);
        letter_a.is_some() && letter_a == self.vocabulary.word(b).get(overlap.b)
    }
}

/// Fills a crossword with words from a vocabulary
pub struct CrosswordSolver<'a> {
    problem: Problem<'a>,
    node_limit: Option<u64>,
}

impl<'a> CrosswordSolver<'a> {
    pub fn new(crossword: &'a Crossword, vocabulary: &'a Vocabulary) -> Self {
        Self {
            problem: Problem::new(crossword, vocabulary),
            node_limit: None,
        }
    }

    /// Stop searching after visiting `limit` nodes
    pub fn node_limit(&mut self, limit: u64) -> &mut Self {
        self.node_limit = Some(limit);
        self
    }

    pub fn solve(&self) -> SolveResult {
        let problem = self.problem;
        let mut domains = Domains::new(problem.crossword, problem.vocabulary);
        enforce_node_consistency(problem, &mut domains);
        if !ac3(problem, &mut domains) {
            info!("Arc consistency left a slot with no words");
            return SolveResult::Unsolvable;
        }
        let decided = domains
            .iter()
            .filter(|(_, domain)| domain.single_value().is_some())
            .count();
        info!(
            "Propagation decided {}/{} slots, begin backtracking",
            decided,
            domains.len()
        );
        let mut search = Search::new(problem, &domains, self.node_limit);
        let mut assignment = Assignment::new();
        let result = search.backtrack(&mut assignment);
        info!(
            "Search finished after {} nodes and {} backtracks",
            search.nodes(),
            search.backtracks()
        );
        match result {
            SearchResult::Found => {
                debug_assert!(assignment.is_complete(problem.crossword));
                debug_assert!(assignment.is_consistent(problem));
                let solution = assignment.to_solution(problem.vocabulary);
                debug_assert!(problem.crossword.verify_solution(&solution));
                SolveResult::Solved(SolvedData {
                    solution,
                    used_search: search.backtracks() > 0,
                    nodes: search.nodes(),
                    backtracks: search.backtracks(),
                })
            }
            SearchResult::Exhausted => SolveResult::Unsolvable,
            SearchResult::LimitReached => SolveResult::LimitReached,
        }
    }
}

/// Fills a crossword with words from a vocabulary. Returns `None` if there is no solution.
pub fn solve(crossword: &Crossword, vocabulary: &Vocabulary) -> Option<Solution> {
    CrosswordSolver::new(crossword, vocabulary)
        .solve()
        .into_solution()
}
