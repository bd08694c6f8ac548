use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::grid::Grid;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};

/// A Game of Life board on a torus.
///
/// The board owns the live grid, a copy of the grid it was created with and the history of
/// every generation it has advanced past. `history()[i]` is the grid as it was right before the
/// `i`-th call to [`Board::tick`], so the history followed by [`Board::grid`] covers every
/// generation in order.
#[derive(Clone, Debug)]
pub struct Board {
    grid: Grid,
    initial: Grid,
    history: Vec<Grid>,
}

impl Board {
    /// Creates a new board.
    ///
    /// # Arguments
    /// * `size` - The board dimensions as `(width, height)`.
    /// * `grid` - The initial grid. Its size must equal `size`. If `None`, a random grid is
    ///   generated where each cell is alive with a 20% chance.
    /// * `seed` - The seed for the random number generator used when `grid` is `None`.
    pub fn new(size: (usize, usize), grid: Option<Grid>, seed: u64) -> Result<Board> {
        match grid {
            Some(grid) => {
                if grid.size() != size {
                    return Err(Error::invalid_dimensions(format!(
                        "grid is {}x{} but the board size is {}x{}",
                        grid.width(),
                        grid.height(),
                        size.0,
                        size.1
                    )));
                }
                Ok(Board::from_grid(grid))
            }
            None => Board::random(size, &mut StdRng::seed_from_u64(seed)),
        }
    }

    /// Creates a board whose size is taken from the given grid.
    pub fn from_grid(grid: Grid) -> Board {
        debug!(
            width = grid.width(),
            height = grid.height(),
            population = grid.population(),
            "created board"
        );

        Board {
            initial: grid.clone(),
            grid,
            history: Vec::new(),
        }
    }

    /// Creates a board with a random grid drawn from the given generator.
    pub fn random<R: Rng + ?Sized>(size: (usize, usize), rng: &mut R) -> Result<Board> {
        let grid = Grid::random(size.0, size.1, rng)?;
        Ok(Board::from_grid(grid))
    }

    /// Wraps a coordinate around the edges of the board.
    ///
    /// Works for coordinates any distance outside of the board, not only its direct neighbours.
    pub fn normalize(&self, x: isize, y: isize) -> (usize, usize) {
        let (width, height) = self.size();
        (
            x.rem_euclid(width as isize) as usize,
            y.rem_euclid(height as isize) as usize,
        )
    }

    /// Counts the live cells among the 8 cells surrounding `(x, y)`, wrapping around the edges.
    pub fn count_neighbors(&self, x: usize, y: usize) -> usize {
        let mut count = 0;

        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }

                let (nx, ny) = self.normalize(x as isize + dx, y as isize + dy);
                if self.grid[(nx, ny)].is_alive() {
                    count += 1;
                }
            }
        }

        count
    }

    /// The state `(x, y)` will have in the next generation.
    pub fn next_state(&self, x: usize, y: usize) -> Cell {
        self.grid[(x, y)].next(self.count_neighbors(x, y))
    }

    /// Advances the board by one generation.
    ///
    /// All cells are updated at once: every next state is computed from the current grid into
    /// a fresh buffer, which then replaces the live grid.
    pub fn tick(&mut self) {
        let (width, height) = self.size();
        let mut next = self.grid.clone();

        for y in 0..height {
            for x in 0..width {
                next.set(x, y, self.next_state(x, y));
            }
        }

        let previous = std::mem::replace(&mut self.grid, next);
        self.history.push(previous);

        trace!(
            generation = self.history.len(),
            population = self.grid.population(),
            "tick"
        );
    }

    /// The live grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Dimensions as `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        self.grid.size()
    }

    /// The grid the board was created with.
    pub fn initial_grid(&self) -> &Grid {
        &self.initial
    }

    /// Grids recorded before each tick, oldest first.
    pub fn history(&self) -> &[Grid] {
        &self.history
    }

    /// Number of ticks applied so far.
    pub fn generation(&self) -> usize {
        self.history.len()
    }

    /// Every generation seen so far: the history followed by the live grid.
    pub fn generations(&self) -> impl Iterator<Item = &Grid> {
        self.history.iter().chain(std::iter::once(&self.grid))
    }
}
