//! Bordered text grids for matrices.
//!
//! [`Grid`] renders any [`MatrixRef`] whose entries implement [`Cell`] into a
//! `String` (through [`fmt::Display`]); nothing here writes to the console.
//!
//! ```
//! use linalg_kernel::Matrix;
//! use linalg_kernel::display::Grid;
//!
//! let m = Matrix::from_rows(vec![vec![1.0, -2.5]]).unwrap();
//! let text = Grid::new(&m).to_string();
//! let lines: Vec<&str> = text.lines().collect();
//! assert_eq!(lines[0], "---------- ---------- ");
//! assert_eq!(lines[1], "|  1.000   |  -2.500  |");
//! assert_eq!(lines[2], lines[0]);
//! ```

use core::fmt;
use core::marker::PhantomData;

use crate::complex::Complex;
use crate::complex_matrix::ComplexMatrix;
use crate::matrix::Matrix;
use crate::traits::MatrixRef;

const YELLOW: &str = "\u{1b}[33m";
const RESET: &str = "\u{1b}[0m";

/// An entry that knows how to render itself in a fixed-width grid cell.
pub trait Cell {
    /// Cell width in characters, excluding the `|` separator.
    const WIDTH: usize;

    /// Text for the cell, before centering.
    fn render(&self) -> String;
}

impl Cell for f64 {
    const WIDTH: usize = 10;

    fn render(&self) -> String {
        format!("{self:.3}")
    }
}

impl Cell for Complex {
    const WIDTH: usize = 22;

    fn render(&self) -> String {
        let sign = if self.im() >= 0.0 { '+' } else { '-' };
        format!("{:.3} {} {:.3} i", self.re(), sign, self.im().abs())
    }
}

/// Presenter that draws a matrix as a bordered grid.
///
/// Layout: a border line, then each row of `|`-separated centered cells,
/// with a border line after every row.
pub struct Grid<'a, T, M: ?Sized> {
    matrix: &'a M,
    colored: bool,
    _cell: PhantomData<fn() -> T>,
}

impl<'a, T, M> Grid<'a, T, M>
where
    T: Cell,
    M: MatrixRef<T> + ?Sized,
{
    pub fn new(matrix: &'a M) -> Self {
        Self {
            matrix,
            colored: false,
            _cell: PhantomData,
        }
    }

    /// Wrap borders and separators in ANSI yellow.
    pub fn colored(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    fn paint(&self, f: &mut fmt::Formatter<'_>, s: &str) -> fmt::Result {
        if self.colored {
            write!(f, "{YELLOW}{s}{RESET}")
        } else {
            f.write_str(s)
        }
    }

    fn border(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let segment = "-".repeat(T::WIDTH);
        let mut line = String::with_capacity((T::WIDTH + 1) * self.matrix.ncols());
        for _ in 0..self.matrix.ncols() {
            line.push_str(&segment);
            line.push(' ');
        }
        self.paint(f, &line)?;
        writeln!(f)
    }
}

impl<'a, T, M> fmt::Display for Grid<'a, T, M>
where
    T: Cell,
    M: MatrixRef<T> + ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.border(f)?;
        for i in 0..self.matrix.nrows() {
            for j in 0..self.matrix.ncols() {
                self.paint(f, "|")?;
                let text = self.matrix.get(i, j).render();
                let pad = T::WIDTH.saturating_sub(text.chars().count());
                let left = pad / 2;
                write!(f, "{:left$}{text}{:right$}", "", "", right = pad - left)?;
            }
            self.paint(f, "|")?;
            writeln!(f)?;
            self.border(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Grid::new(self), f)
    }
}

impl fmt::Display for ComplexMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&Grid::new(self), f)
    }
}
