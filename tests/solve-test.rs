use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crossfill::error::{FromFileError, ParseErrorType};
use crossfill::image::CrosswordImageBuilder;
use crossfill::puzzle::{Crossword, Vocabulary, Word};
use crossfill::solve::{solve, CrosswordSolver, SolveResult};

#[test]
fn test_puzzles() -> Result<()> {
    test_puzzle_dir(project_path("res/test/puzzles/require-search"), true)?;
    test_puzzle_dir(project_path("res/test/puzzles/no-require-search"), false)?;
    Ok(())
}

fn test_puzzle_dir(path: impl AsRef<Path>, require_search: bool) -> Result<()> {
    let mut dirs: Vec<_> = fs::read_dir(path)?.collect::<Result<_, _>>()?;
    dirs.sort_unstable_by_key(|dir| dir.path());
    for dir in dirs {
        println!("Solving {}", dir.path().display());
        let (crossword, vocabulary) = read_puzzle(dir.path())?;
        let solve_result = CrosswordSolver::new(&crossword, &vocabulary).solve();
        assert!(
            solve_result.is_solved(),
            "Could not solve {}",
            dir.path().display()
        );
        let data = solve_result.solved().unwrap();
        assert!(crossword.verify_solution(&data.solution));
        assert_eq!(
            data.used_search,
            require_search,
            "{}",
            dir.path().display()
        );
        assert_eq!(data.used_search, data.backtracks > 0);
    }
    Ok(())
}

#[test]
fn numbers_solution() -> Result<()> {
    let (crossword, vocabulary) =
        read_puzzle(project_path("res/test/puzzles/no-require-search/numbers"))?;
    let solution = solve(&crossword, &vocabulary).unwrap();
    let text = crossword.display_solution(&solution).to_string();
    assert_eq!("█SIX█\n█E██F\n█V██I\n█E██V\n█NINE\n", text);
    Ok(())
}

#[test]
fn search_statistics() -> Result<()> {
    let (crossword, vocabulary) = read_puzzle(project_path("res/test/puzzles/require-search/chain"))?;
    let data = match CrosswordSolver::new(&crossword, &vocabulary).solve() {
        SolveResult::Solved(data) => data,
        result => panic!("expected a solution, got {:?}", result),
    };
    assert_eq!(6, data.nodes);
    assert_eq!(2, data.backtracks);
    let text = crossword.display_solution(&data.solution).to_string();
    assert_eq!("BOG\nE█E\nE█M\n", text);
    Ok(())
}

#[test]
fn repeated_word_is_not_a_solution() -> Result<()> {
    let (crossword, vocabulary) =
        read_puzzle(project_path("res/test/puzzles/no-require-search/numbers"))?;
    let mut solution = solve(&crossword, &vocabulary).unwrap();
    assert!(crossword.verify_solution(&solution));
    let nine = solution
        .iter()
        .find(|(_, word)| word.to_string() == "NINE")
        .map(|(slot, _)| slot)
        .unwrap();
    solution.insert(nine, Word::from("FIVE"));
    assert!(!crossword.verify_solution(&solution));
    Ok(())
}

#[test]
fn deterministic() -> Result<()> {
    for dir in &[
        "res/test/puzzles/require-search/chain",
        "res/test/puzzles/no-require-search/numbers",
    ] {
        let (crossword, vocabulary) = read_puzzle(project_path(dir))?;
        let first = solve(&crossword, &vocabulary);
        let second = solve(&crossword, &vocabulary);
        assert!(first.is_some());
        assert_eq!(first, second, "{}", dir);
    }
    Ok(())
}

#[test]
fn word_order_does_not_matter() -> Result<()> {
    let crossword = Crossword::from_file(project_path(
        "res/test/puzzles/require-search/chain/structure.txt",
    ))?;
    let forward = Vocabulary::parse("aba\nace\nbee\nbog\ngem")?;
    let backward = Vocabulary::parse("GEM\nBOG\nBEE\nACE\nABA\nbog")?;
    assert_eq!(solve(&crossword, &forward), solve(&crossword, &backward));
    Ok(())
}

#[test]
fn unsolvable() -> Result<()> {
    let (crossword, vocabulary) = read_puzzle(project_path("res/test/unsolvable/same-word"))?;
    let result = CrosswordSolver::new(&crossword, &vocabulary).solve();
    assert!(matches!(result, SolveResult::Unsolvable));
    Ok(())
}

#[test]
fn node_limit() -> Result<()> {
    let (crossword, vocabulary) = read_puzzle(project_path("res/test/puzzles/require-search/chain"))?;
    let mut solver = CrosswordSolver::new(&crossword, &vocabulary);
    assert!(matches!(
        solver.node_limit(5).solve(),
        SolveResult::LimitReached
    ));
    assert!(solver.node_limit(6).solve().is_solved());
    Ok(())
}

#[test]
fn save_image() -> Result<()> {
    let (crossword, vocabulary) =
        read_puzzle(project_path("res/test/puzzles/no-require-search/numbers"))?;
    let solution = solve(&crossword, &vocabulary).unwrap();
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("solution.svg");
    CrosswordImageBuilder::new(&crossword)
        .solution(&solution)
        .build()
        .save_svg(&path)?;
    let svg = fs::read_to_string(&path)?;
    assert!(svg.starts_with("<svg"));
    for letter in "SEVENSIXNINEFIVE".chars() {
        assert!(svg.contains(&format!(">{}</text>", letter)));
    }
    Ok(())
}

#[test]
fn file_errors() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let missing = Crossword::from_file(dir.path().join("missing.txt"));
    assert!(matches!(missing, Err(FromFileError::Io(_))));

    let path = dir.path().join("empty.txt");
    fs::write(&path, "")?;
    match Crossword::from_file(&path) {
        Err(FromFileError::Parse(e)) => {
            assert_eq!(ParseErrorType::EmptyStructure, e.error_type())
        }
        result => panic!("expected a parse error, got {:?}", result),
    }

    let path = dir.path().join("words.txt");
    fs::write(&path, "cat\nice cream\n")?;
    match Vocabulary::from_file(&path) {
        Err(FromFileError::Parse(e)) => assert_eq!(ParseErrorType::InvalidWord, e.error_type()),
        result => panic!("expected a parse error, got {:?}", result),
    }
    Ok(())
}

fn read_puzzle(dir: impl AsRef<Path>) -> Result<(Crossword, Vocabulary)> {
    let dir = dir.as_ref();
    let crossword = Crossword::from_file(dir.join("structure.txt"))?;
    let vocabulary = Vocabulary::from_file(dir.join("words.txt"))?;
    Ok((crossword, vocabulary))
}

fn project_path(path: impl AsRef<Path>) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(path)
}
