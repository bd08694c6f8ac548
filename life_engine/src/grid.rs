use crate::cell::{Cell, SpawnChance};
use crate::error::{Error, Result};
use rand::Rng;
use std::ops::Index;

/// A fixed-size two dimensional array of cells.
///
/// Cells are addressed by `(x, y)` where `x` is the column and `y` the row, with row 0 being
/// the first line of a board file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a grid with every cell dead.
    pub fn new(width: usize, height: usize) -> Result<Grid> {
        check_dimensions(width, height)?;

        Ok(Grid {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        })
    }

    /// Creates a grid from a list of rows, all of which must have the same length.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Grid> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        check_dimensions(width, height)?;

        if let Some((y, row)) = rows
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != width)
        {
            return Err(Error::invalid_dimensions(format!(
                "row {} has {} cells but row 0 has {}",
                y,
                row.len(),
                width
            )));
        }

        Ok(Grid {
            width,
            height,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Creates a grid where every cell is independently alive with the default spawn chance.
    pub fn random<R: Rng + ?Sized>(width: usize, height: usize, rng: &mut R) -> Result<Grid> {
        check_dimensions(width, height)?;

        let chance = SpawnChance::default();
        let cells = (0..width * height).map(|_| rng.sample(chance)).collect();

        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x).copied()
    }

    /// Sets the cell at `(x, y)`.
    ///
    /// # Panics
    /// If the coordinate is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        assert!(
            x < self.width && y < self.height,
            "({}, {}) is outside a {}x{} grid",
            x,
            y,
            self.width,
            self.height
        );
        self.cells[y * self.width + x] = cell;
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Dimensions as `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width)
    }

    /// Coordinates of every live cell in row-major order.
    pub fn alive_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(|(index, _)| (index % self.width, index / self.width))
            .collect()
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Cell;

    fn index(&self, (x, y): (usize, usize)) -> &Cell {
        assert!(x < self.width && y < self.height);
        &self.cells[y * self.width + x]
    }
}

fn check_dimensions(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(Error::invalid_dimensions(format!(
            "{}x{} has no cells",
            width, height
        )));
    }
    Ok(())
}
