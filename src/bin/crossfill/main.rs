#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

use anyhow::{Context, Result};
use crossfill::image::CrosswordImageBuilder;
use crossfill::puzzle::{Crossword, Vocabulary};
use crossfill::solve::{CrosswordSolver, SolveResult, SolvedData};
use log::info;

use crate::options::Options;

mod options;

fn main() -> Result<()> {
    env_logger::init();
    let options = Options::from_args()?;
    let crossword = Crossword::from_file(options.structure()).with_context(|| {
        format!(
            "failed to read structure from \"{}\"",
            options.structure().display()
        )
    })?;
    let vocabulary = Vocabulary::from_file(options.words()).with_context(|| {
        format!("failed to read words from \"{}\"", options.words().display())
    })?;
    info!(
        "{} slots, {} words",
        crossword.slot_count(),
        vocabulary.len()
    );
    let mut solver = CrosswordSolver::new(&crossword, &vocabulary);
    if let Some(limit) = options.node_limit() {
        solver.node_limit(limit);
    }
    match solver.solve() {
        SolveResult::Solved(data) => on_solved(&options, &crossword, &data)?,
        SolveResult::Unsolvable => println!("No solution."),
        SolveResult::LimitReached => println!("Search limit reached."),
    }
    Ok(())
}

fn on_solved(options: &Options, crossword: &Crossword, data: &SolvedData) -> Result<()> {
    print!("{}", crossword.display_solution(&data.solution));
    if options.stats() {
        println!(
            "Search visited {} nodes with {} backtracks",
            data.nodes, data.backtracks
        );
    }
    if let Some(path) = options.output() {
        let image = CrosswordImageBuilder::new(crossword)
            .solution(&data.solution)
            .numbers(options.numbers())
            .build();
        image
            .save_svg(path)
            .with_context(|| format!("failed to save image to \"{}\"", path.display()))?;
        println!("Saved image to {}", path.display());
    }
    Ok(())
}
