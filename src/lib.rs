//! Fill crossword grids with words from a vocabulary

#![warn(rust_2018_idioms)]
#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unused_qualifications)]

#[macro_use]
extern crate log;

pub mod collections;
pub mod error;
pub mod image;
pub mod puzzle;
pub mod solve;
