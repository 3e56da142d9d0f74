use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::ArgMatches;

#[derive(Clone)]
pub(crate) struct Options {
    structure: PathBuf,
    words: PathBuf,
    output: Option<PathBuf>,
    node_limit: Option<u64>,
    numbers: bool,
    stats: bool,
}

impl Options {
    pub fn from_args() -> Result<Self> {
        Self::from_arg_matches(&clap_app().get_matches())
    }

    fn from_arg_matches(matches: &ArgMatches<'_>) -> Result<Self> {
        let node_limit = match matches.value_of("node_limit") {
            Some(s) => Some(
                s.parse::<u64>()
                    .with_context(|| format!("invalid node limit \"{}\"", s))?,
            ),
            None => None,
        };
        Ok(Self {
            structure: required_path(matches, "structure")?,
            words: required_path(matches, "words")?,
            output: matches.value_of_os("output").map(PathBuf::from),
            node_limit,
            numbers: !matches.is_present("no_numbers"),
            stats: matches.is_present("stats"),
        })
    }

    pub fn structure(&self) -> &Path {
        &self.structure
    }

    pub fn words(&self) -> &Path {
        &self.words
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    pub fn node_limit(&self) -> Option<u64> {
        self.node_limit
    }

    pub fn numbers(&self) -> bool {
        self.numbers
    }

    pub fn stats(&self) -> bool {
        self.stats
    }
}

fn required_path(matches: &ArgMatches<'_>, name: &str) -> Result<PathBuf> {
    let path = matches
        .value_of_os(name)
        .with_context(|| format!("missing {} argument", name))?;
    Ok(path.into())
}

fn clap_app() -> clap::App<'static, 'static> {
    use clap::{App, AppSettings, Arg};

    App::new("Crossfill")
        .author("Cameron Steffen <cam.steffen94@gmail.com>")
        .about("Fill crossword grids with words from a word list")
        .setting(AppSettings::ArgRequiredElseHelp)
        .arg(
            Arg::with_name("structure")
                .value_name("STRUCTURE")
                .required(true)
                .help("crossword structure file, where _ marks a cell to fill"),
        )
        .arg(
            Arg::with_name("words")
                .value_name("WORDS")
                .required(true)
                .help("word list file with one word per line"),
        )
        .arg(
            Arg::with_name("output")
                .value_name("OUTPUT")
                .help("save an SVG image of the solution"),
        )
        .arg(
            Arg::with_name("node_limit")
                .long("node-limit")
                .short("n")
                .takes_value(true)
                .value_name("N")
                .help("give up after visiting N search nodes"),
        )
        .arg(
            Arg::with_name("no_numbers")
                .long("no-numbers")
                .requires("output")
                .help("leave slot numbers out of the image"),
        )
        .arg(
            Arg::with_name("stats")
                .long("stats")
                .help("print search statistics"),
        )
}
