//! Remove words from a slot which cannot cross any word in a neighboring slot

use crate::collections::LinkedAHashSet;
use crate::puzzle::{SlotId, WordId};
use crate::solve::{Domains, Problem};

/// A directed pair of slots. The domain of `from` is made consistent with the domain of `to`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Arc {
    pub from: SlotId,
    pub to: SlotId,
}

impl Arc {
    pub fn new(from: SlotId, to: SlotId) -> Self {
        Self { from, to }
    }
}

/// Makes slot `x` arc consistent with slot `y` by removing every word in `x` which has no
/// different word in `y` with the same letter at the shared cell.
/// Returns true if any word was removed. Slots that do not cross are left alone.
pub fn revise(problem: Problem<'_>, domains: &mut Domains, x: SlotId, y: SlotId) -> bool {
    let overlap = match problem.crossword.overlap(x, y) {
        Some(overlap) => overlap,
        None => return false,
    };
    let y_domain = &domains[y];
    let has_support = |i: WordId| {
        y_domain
            .iter()
            .any(|j| i != j && problem.letters_agree(overlap, i, j))
    };
    let unsupported: Vec<WordId> = domains[x].iter().filter(|&i| !has_support(i)).collect();
    if unsupported.is_empty() {
        return false;
    }
    trace!(
        "removing {} words from slot {} which do not cross slot {}",
        unsupported.len(),
        problem.crossword.slot(x),
        problem.crossword.slot(y)
    );
    let x_domain = &mut domains[x];
    for word in unsupported {
        x_domain.remove(word);
    }
    true
}

/// Enforces arc consistency across every pair of crossing slots.
/// Returns false if a slot is left with no words, meaning the crossword cannot be solved.
pub fn ac3(problem: Problem<'_>, domains: &mut Domains) -> bool {
    let crossword = problem.crossword;
    let arcs = crossword
        .variables()
        .flat_map(|x| crossword.neighbors(x).map(move |y| Arc::new(x, y)));
    ac3_with_arcs(problem, domains, arcs)
}

/// Enforces arc consistency starting from the given arcs.
/// Returns false if a slot is left with no words.
pub fn ac3_with_arcs(
    problem: Problem<'_>,
    domains: &mut Domains,
    arcs: impl IntoIterator<Item = Arc>,
) -> bool {
    let mut queue: LinkedAHashSet<Arc> = arcs.into_iter().collect();
    let mut revisions = 0;
    while let Some(Arc { from: x, to: y }) = queue.pop_front() {
        if !revise(problem, domains, x, y) {
            continue;
        }
        revisions += 1;
        if domains[x].is_empty() {
            debug!(
                "arc consistency failed, no words left for slot {}",
                problem.crossword.slot(x)
            );
            return false;
        }
        // x lost words, so its other neighbors may have lost support
        for z in problem.crossword.neighbors(x).filter(|&z| z != y) {
            queue.insert_if_absent(Arc::new(z, x));
        }
    }
    debug!(
        "arc consistency finished after {} revisions, {} words remain",
        revisions,
        domains.word_count()
    );
    true
}

#[cfg(test)]
mod tests {
    use crate::puzzle::{Crossword, Vocabulary};
    use crate::solve::{ac3, ac3_with_arcs, enforce_node_consistency, revise, Arc, Domains, Problem};

    // slot 0 is across, slot 1 is down, crossing at offset 1 of slot 0 and offset 0 of slot 1
    const CROSSING: &str = "___\n#_#\n#_#";

    fn words(vocabulary: &Vocabulary, domains: &Domains, slot: usize) -> Vec<String> {
        domains[slot]
            .iter()
            .map(|id| vocabulary.word(id).to_string())
            .collect()
    }

    #[test]
    fn revise_removes_unsupported_words() {
        let crossword = Crossword::parse(CROSSING).unwrap();
        let vocabulary: Vocabulary = vec!["CAT", "DOG", "ACT"].into_iter().collect();
        let problem = Problem::new(&crossword, &vocabulary);
        let mut domains = Domains::new(&crossword, &vocabulary);
        assert!(revise(problem, &mut domains, 0, 1));
        // DOG has an O in the middle but no word starts with O
        assert_eq!(vec!["ACT", "CAT"], words(&vocabulary, &domains, 0));
        assert_eq!(3, domains[1].len());
        assert!(!revise(problem, &mut domains, 0, 1));
    }

    #[test]
    fn revise_requires_a_different_word() {
        let crossword = Crossword::parse(CROSSING).unwrap();
        // AAA supports itself only
        let vocabulary: Vocabulary = vec!["AAA"].into_iter().collect();
        let problem = Problem::new(&crossword, &vocabulary);
        let mut domains = Domains::new(&crossword, &vocabulary);
        assert!(revise(problem, &mut domains, 0, 1));
        assert!(domains[0].is_empty());
    }

    #[test]
    fn revise_without_overlap() {
        let crossword = Crossword::parse("___\n###\n___").unwrap();
        let vocabulary: Vocabulary = vec!["CAT", "DOG"].into_iter().collect();
        let problem = Problem::new(&crossword, &vocabulary);
        let mut domains = Domains::new(&crossword, &vocabulary);
        let before = domains.clone();
        assert!(!revise(problem, &mut domains, 0, 1));
        assert_eq!(before, domains);
    }

    #[test]
    fn ac3_is_sound() {
        let crossword = Crossword::parse("#___#\n#_##_\n#_##_\n#_##_\n#____").unwrap();
        let vocabulary: Vocabulary = vec![
            "ONE", "TWO", "THREE", "FOUR", "FIVE", "SIX", "SEVEN", "EIGHT", "NINE", "TEN",
        ]
        .into_iter()
        .collect();
        let problem = Problem::new(&crossword, &vocabulary);
        let mut domains = Domains::new(&crossword, &vocabulary);
        enforce_node_consistency(problem, &mut domains);
        assert!(ac3(problem, &mut domains));
        for x in crossword.variables() {
            for y in crossword.neighbors(x) {
                let overlap = crossword.overlap(x, y).unwrap();
                for i in domains[x].iter() {
                    assert!(
                        domains[y]
                            .iter()
                            .any(|j| i != j && problem.letters_agree(overlap, i, j)),
                        "{} in slot {} has no support in slot {}",
                        vocabulary.word(i),
                        crossword.slot(x),
                        crossword.slot(y)
                    );
                }
            }
        }
        // THREE ends in E but no four letter word starts with E
        assert_eq!(vec!["SEVEN"], words(&vocabulary, &domains, 0));
    }

    #[test]
    fn ac3_detects_empty_domain() {
        let crossword = Crossword::parse(CROSSING).unwrap();
        let vocabulary: Vocabulary = vec!["CAT", "DOG"].into_iter().collect();
        let problem = Problem::new(&crossword, &vocabulary);
        let mut domains = Domains::new(&crossword, &vocabulary);
        assert!(!ac3(problem, &mut domains));
    }

    #[test]
    fn ac3_with_given_arcs() {
        let crossword = Crossword::parse(CROSSING).unwrap();
        let vocabulary: Vocabulary = vec!["CAT", "DOG", "ACT", "OAK"].into_iter().collect();
        let problem = Problem::new(&crossword, &vocabulary);
        let mut domains = Domains::new(&crossword, &vocabulary);
        assert!(ac3_with_arcs(problem, &mut domains, vec![Arc::new(1, 0)]));
        // only the down slot was revised against the across slot
        assert_eq!(4, domains[0].len());
        assert_eq!(vec!["ACT", "CAT", "OAK"], words(&vocabulary, &domains, 1));
    }
}
