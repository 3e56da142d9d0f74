mod coord;

pub use self::coord::Coord;

use std::fmt;
use std::fmt::{Debug, Formatter};
use std::ops::{Index, IndexMut};

/// A container of elements laid out in a rectangular grid of rows
#[derive(Clone, PartialEq)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    elements: Vec<T>,
}

impl<T> Grid<T> {
    /// Create a new `Grid` of a specified size and fill with a specified value
    pub fn with_value(width: usize, height: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            width,
            height,
            elements: vec![value; width * height],
        }
    }

    /// Create a new `Grid` from rows of possibly different lengths.
    /// Rows shorter than the longest row are padded with `fill`.
    pub fn from_ragged_rows(rows: Vec<Vec<T>>, fill: T) -> Self
    where
        T: Clone,
    {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        let height = rows.len();
        let mut elements = Vec::with_capacity(width * height);
        for mut row in rows {
            row.resize(width, fill.clone());
            elements.extend(row);
        }
        Self {
            width,
            height,
            elements,
        }
    }

    /// The number of columns
    pub fn width(&self) -> usize {
        self.width
    }

    /// The number of rows
    pub fn height(&self) -> usize {
        self.height
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.col() < self.width && coord.row() < self.height
    }

    pub fn get(&self, coord: Coord) -> Option<&T> {
        if self.contains(coord) {
            Some(&self[coord])
        } else {
            None
        }
    }

    /// Returns an iterator over the rows of the grid
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        // chunks panics on a zero chunk size
        self.elements.chunks(self.width.max(1))
    }

    /// Returns an iterator over every coordinate in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let width = self.width;
        (0..self.height).flat_map(move |row| (0..width).map(move |col| Coord::new(col, row)))
    }

    /// Returns an iterator over every element, paired with its `Coord`
    pub fn iter_coord(&self) -> impl Iterator<Item = (Coord, &T)> {
        self.coords().zip(self.elements.iter())
    }

    fn element_index(&self, coord: Coord) -> usize {
        assert!(
            self.contains(coord),
            "{:?} is outside of a {}x{} grid",
            coord,
            self.width,
            self.height
        );
        coord.row() * self.width + coord.col()
    }
}

impl<T> Index<Coord> for Grid<T> {
    type Output = T;

    fn index(&self, coord: Coord) -> &Self::Output {
        &self.elements[self.element_index(coord)]
    }
}

impl<T> IndexMut<Coord> for Grid<T> {
    fn index_mut(&mut self, coord: Coord) -> &mut Self::Output {
        let index = self.element_index(coord);
        &mut self.elements[index]
    }
}

impl<T> Debug for Grid<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rows()).finish()
    }
}
