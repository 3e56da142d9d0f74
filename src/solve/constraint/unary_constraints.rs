use crate::solve::{Domains, Problem};

/// Removes every word whose length does not match the length of its slot
pub fn enforce_node_consistency(problem: Problem<'_>, domains: &mut Domains) {
    debug!("reducing slot domains by word length");
    let mut removed = 0;
    for slot_id in problem.crossword.variables() {
        let length = problem.crossword.slot(slot_id).len();
        removed += domains[slot_id].retain(|word| problem.vocabulary.word(word).len() == length);
        if domains[slot_id].is_empty() {
            debug!("no words of length {} for slot {}", length, problem.crossword.slot(slot_id));
        }
    }
    debug!(
        "removed {} words of the wrong length, {} remain",
        removed,
        domains.word_count()
    );
}

#[cfg(test)]
mod tests {
    use crate::puzzle::{Crossword, Vocabulary};
    use crate::solve::{enforce_node_consistency, Domains, Problem};

    #[test]
    fn removes_words_of_wrong_length() {
        let crossword = Crossword::parse("____\n####\n___").unwrap();
        let vocabulary: Vocabulary = vec!["CAT", "FISH", "DOG", "BIRDS", "OX"]
            .into_iter()
            .collect();
        let problem = Problem::new(&crossword, &vocabulary);
        let mut domains = Domains::new(&crossword, &vocabulary);
        enforce_node_consistency(problem, &mut domains);
        for (slot_id, domain) in domains.iter() {
            let length = crossword.slot(slot_id).len();
            for (word_id, word) in vocabulary.iter() {
                assert_eq!(word.len() == length, domain.contains(word_id));
            }
        }
        let words = |slot_id: usize| -> Vec<String> {
            domains[slot_id]
                .iter()
                .map(|id| vocabulary.word(id).to_string())
                .collect()
        };
        assert_eq!(vec!["FISH"], words(0));
        assert_eq!(vec!["CAT", "DOG"], words(1));
    }

    #[test]
    fn domain_may_become_empty() {
        let crossword = Crossword::parse("_____").unwrap();
        let vocabulary: Vocabulary = vec!["CAT"].into_iter().collect();
        let mut domains = Domains::new(&crossword, &vocabulary);
        enforce_node_consistency(Problem::new(&crossword, &vocabulary), &mut domains);
        assert!(domains[0].is_empty());
    }
}
