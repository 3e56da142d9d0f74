//! Generate images of empty or filled crosswords

use std::fmt::{Result, Write};
use std::fs::File;
use std::io;
use std::io::{BufWriter, Write as ioWrite};
use std::path::Path;

use itertools::Itertools;
use once_cell::sync::Lazy;
use xml::Xml;

use crate::collections::grid::Coord;
use crate::collections::Grid;
use crate::image::xml::XmlProducer;
use crate::puzzle::{Crossword, Slot};
use crate::solve::Solution;

#[macro_use]
mod xml;

// colors
const COLOR_BLOCKED: &str = "black";
const COLOR_CELL_BORDER: &str = "#999";
const COLOR_NUMBER: &str = "#444";

// dimensions
const CELL_WIDTH: i32 = 60;
const BORDER_WIDTH_CELL: i32 = 2;
const BORDER_WIDTH_OUTER: i32 = 4;
const OUTER_PAD: i32 = BORDER_WIDTH_OUTER - BORDER_WIDTH_CELL / 2;
const NUMBER_PAD: i32 = BORDER_WIDTH_CELL + CELL_WIDTH / 20;

// font sizes
const FONT_SIZE_LETTER: i32 = 40;
const FONT_SIZE_NUMBER: i32 = 14;

static STYLE: Lazy<String> = Lazy::new(|| {
    format!(
        "\
        text{{\
          font-family:sans-serif\
        }}\
        .numbers{{\
          font-size:{number_font_size}px;\
          fill:{color_number}\
        }}\
        .letters{{\
          font-size:{letter_font_size}px;\
          text-anchor:middle\
        }}",
        number_font_size = FONT_SIZE_NUMBER,
        letter_font_size = FONT_SIZE_LETTER,
        color_number = COLOR_NUMBER,
    )
});

/// Creates an image of a crossword with an optional solution
pub struct CrosswordImageBuilder<'a> {
    crossword: &'a Crossword,
    solution: Option<&'a Solution>,
    numbers: bool,
}

impl<'a> CrosswordImageBuilder<'a> {
    pub fn new(crossword: &'a Crossword) -> Self {
        Self {
            crossword,
            solution: None,
            numbers: true,
        }
    }

    pub fn solution(&mut self, solution: &'a Solution) -> &mut Self {
        self.solution = Some(solution);
        self
    }

    /// Show the number of each cell which starts a slot. Enabled by default.
    pub fn numbers(&mut self, numbers: bool) -> &mut Self {
        self.numbers = numbers;
        self
    }

    pub fn build(&self) -> CrosswordImage<'a> {
        let crossword = self.crossword;
        let cells_width = CELL_WIDTH * crossword.width() as i32;
        let cells_height = CELL_WIDTH * crossword.height() as i32;
        let letters = match self.solution {
            Some(solution) => crossword.letter_grid(solution),
            None => Grid::with_value(crossword.width(), crossword.height(), None),
        };
        let numbers = if self.numbers {
            // slots are ordered by their first cell
            crossword
                .slots()
                .iter()
                .map(Slot::start)
                .dedup()
                .zip(1..)
                .collect()
        } else {
            Vec::new()
        };
        CrosswordImage {
            crossword,
            letters,
            numbers,
            cells_width,
            cells_height,
            width: cells_width + OUTER_PAD * 2,
            height: cells_height + OUTER_PAD * 2,
        }
    }
}

pub struct CrosswordImage<'a> {
    crossword: &'a Crossword,
    letters: Grid<Option<char>>,
    numbers: Vec<(Coord, u32)>,
    cells_width: i32,
    cells_height: i32,
    width: i32,
    height: i32,
}

impl CrosswordImage<'_> {
    /// The image as an SVG document
    pub fn to_svg(&self) -> String {
        XmlProducer::new(|xml| CrosswordSvgContext { image: self, xml }.write()).to_string()
    }

    pub fn save_svg(&self, path: impl AsRef<Path>) -> io::Result<()> {
        let xml = XmlProducer::new(|xml| CrosswordSvgContext { image: self, xml }.write());
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        write!(writer, "{}", xml)?;
        writer.flush()?;
        Ok(())
    }
}

struct CrosswordSvgContext<'a, 'b, 'c> {
    image: &'a CrosswordImage<'a>,
    xml: &'a mut Xml<'b, 'c>,
}

impl CrosswordSvgContext<'_, '_, '_> {
    fn write(mut self) -> Result {
        self.header()?;
        self.background()?;
        self.blocked_cells()?;
        self.grid()?;
        self.outer_border()?;
        self.numbers()?;
        self.letters()
    }

    fn header(&mut self) -> Result {
        xml! {
            self.xml,
            open "svg",
            "xmlns" = "http://www.w3.org/2000/svg",
            "viewBox" = format!("0 0 {} {}", self.image.width, self.image.height),
            open "style",
            text = STYLE.as_str(),
            close,
        }
        Ok(())
    }

    fn background(&mut self) -> Result {
        xml! {
            self.xml,
            open "rect",
            "x" = OUTER_PAD,
            "y" = OUTER_PAD,
            "width" = self.image.cells_width,
            "height" = self.image.cells_height,
            "fill" = "white",
            close,
        }
        Ok(())
    }

    fn blocked_cells(&mut self) -> Result {
        let structure = self.image.crossword.structure();
        let mut d = String::new();
        for (row, cells) in structure.rows().enumerate() {
            let runs = cells
                .iter()
                .enumerate()
                .filter(|&(_, &fillable)| !fillable)
                // run start column and run length in cells
                .map(|(col, _)| (col, 1))
                // combine adjacent blocked cells
                .coalesce(|a, b| {
                    if b.0 == a.0 + a.1 {
                        Ok((a.0, a.1 + b.1))
                    } else {
                        Err((a, b))
                    }
                });
            for (col, len) in runs {
                let width = CELL_WIDTH * len as i32;
                write!(
                    d,
                    "M{}h{}v{}h{}z",
                    path_coord(cell_coord(Coord::new(col, row))),
                    width,
                    CELL_WIDTH,
                    -width,
                )?;
            }
        }
        if d.is_empty() {
            return Ok(());
        }
        xml! {
            self.xml,
            open "path",
            "fill" = COLOR_BLOCKED,
            "d" = d,
            close,
        }
        Ok(())
    }

    fn grid(&mut self) -> Result {
        let crossword = self.image.crossword;
        let mut d = String::new();
        for col in 1..crossword.width() {
            let coord = cell_coord(Coord::new(col, 0));
            write!(d, "M{}v{}", path_coord(coord), self.image.cells_height)?;
        }
        for row in 1..crossword.height() {
            let coord = cell_coord(Coord::new(0, row));
            write!(d, "M{}h{}", path_coord(coord), self.image.cells_width)?;
        }
        if d.is_empty() {
            return Ok(());
        }
        xml! {
            self.xml,
            open "path",
            "stroke" = COLOR_CELL_BORDER,
            "stroke-width" = BORDER_WIDTH_CELL,
            "d" = d,
            close,
        }
        Ok(())
    }

    fn outer_border(&mut self) -> Result {
        let x = BORDER_WIDTH_OUTER / 2;
        xml! {
            self.xml,
            open "rect",
            "x" = x,
            "y" = x,
            "width" = self.image.width - BORDER_WIDTH_OUTER,
            "height" = self.image.height - BORDER_WIDTH_OUTER,
            "fill" = "none",
            "stroke" = COLOR_BLOCKED,
            "stroke-width" = BORDER_WIDTH_OUTER,
            "stroke-linejoin" = "round",
            close,
        }
        Ok(())
    }

    fn numbers(&mut self) -> Result {
        if self.image.numbers.is_empty() {
            return Ok(());
        }
        xml!(self.xml, open "g", "class" = "numbers");
        for &(coord, number) in &self.image.numbers {
            let pos = cell_coord(coord);
            xml! {
                self.xml,
                open "text",
                "x" = pos.col() + NUMBER_PAD,
                "y" = pos.row() + NUMBER_PAD,
                "dy" = ".8em",
                text = number,
                close,
            }
        }
        xml!(self.xml, close);
        Ok(())
    }

    fn letters(&mut self) -> Result {
        let letters: Vec<_> = self
            .image
            .letters
            .iter_coord()
            .filter_map(|(coord, letter)| letter.map(|letter| (coord, letter)))
            .collect();
        if letters.is_empty() {
            return Ok(());
        }
        xml!(self.xml, open "g", "class" = "letters");
        for (coord, letter) in letters {
            let pos = cell_coord(coord);
            xml! {
                self.xml,
                open "text",
                "x" = pos.col() + CELL_WIDTH / 2,
                "y" = pos.row() + CELL_WIDTH / 2,
                "dy" = ".35em",
                text = letter,
                close,
            }
        }
        xml!(self.xml, close);
        Ok(())
    }
}

fn cell_coord(coord: Coord) -> Coord<i32> {
    Coord::new(
        coord.col() as i32 * CELL_WIDTH + OUTER_PAD,
        coord.row() as i32 * CELL_WIDTH + OUTER_PAD,
    )
}

fn path_coord(coord: Coord<i32>) -> String {
    format!("{},{}", coord.col(), coord.row())
}
