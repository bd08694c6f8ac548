use crossterm::style::Color;
use rand::distributions::Distribution;
use rand::Rng;

/// Chance that a cell starts alive on a randomly generated board.
pub const SPAWN_CHANCE: f64 = 0.2;

/// The state of a single cell.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Cell {
    #[default]
    Dead,
    Alive,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    /// Applies the B3/S23 rule given the number of live neighbours around the cell.
    ///
    /// A live cell survives with 2 or 3 neighbours and a dead cell is born with exactly 3.
    /// Every other case leaves the cell dead.
    pub fn next(self, neighbors: usize) -> Cell {
        match (self, neighbors) {
            (Cell::Alive, 2) | (Cell::Alive, 3) => Cell::Alive,
            (Cell::Dead, 3) => Cell::Alive,
            _ => Cell::Dead,
        }
    }

    /// Parses a token of the board text format.
    pub fn from_token(token: &str) -> Option<Cell> {
        match token {
            "0" => Some(Cell::Dead),
            "1" => Some(Cell::Alive),
            _ => None,
        }
    }

    pub fn token(self) -> char {
        match self {
            Cell::Dead => '0',
            Cell::Alive => '1',
        }
    }

    pub fn char(self) -> char {
        match self {
            Cell::Dead => '.',
            Cell::Alive => '█',
        }
    }

    pub fn color(self) -> Color {
        match self {
            Cell::Dead => Color::DarkGrey,
            Cell::Alive => Color::White,
        }
    }
}

/// Samples cells that are alive with the wrapped probability.
#[derive(Clone, Copy, Debug)]
pub struct SpawnChance(pub f64);

impl Default for SpawnChance {
    fn default() -> Self {
        SpawnChance(SPAWN_CHANCE)
    }
}

impl Distribution<Cell> for SpawnChance {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        if rng.gen::<f64>() < self.0 {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn when_an_alive_cell_has_two_or_three_neighbors_it_survives() {
        assert_eq!(Cell::Alive.next(2), Cell::Alive);
        assert_eq!(Cell::Alive.next(3), Cell::Alive);
    }

    #[test]
    fn when_an_alive_cell_is_lonely_or_crowded_it_dies() {
        for neighbors in [0, 1, 4, 5, 6, 7, 8] {
            assert_eq!(Cell::Alive.next(neighbors), Cell::Dead);
        }
    }

    #[test]
    fn when_a_dead_cell_has_exactly_three_neighbors_it_is_born() {
        assert_eq!(Cell::Dead.next(3), Cell::Alive);
    }

    #[test]
    fn when_a_dead_cell_does_not_have_three_neighbors_it_stays_dead() {
        for neighbors in [0, 1, 2, 4, 5, 6, 7, 8] {
            assert_eq!(Cell::Dead.next(neighbors), Cell::Dead);
        }
    }

    #[test]
    fn when_parsing_tokens_only_zero_and_one_are_accepted() {
        assert_eq!(Cell::from_token("0"), Some(Cell::Dead));
        assert_eq!(Cell::from_token("1"), Some(Cell::Alive));
        assert_eq!(Cell::from_token("2"), None);
        assert_eq!(Cell::from_token("01"), None);
        assert_eq!(Cell::from_token("x"), None);
    }

    #[test]
    fn when_sampling_with_the_extreme_chances_the_outcome_is_fixed() {
        let mut rng = StdRng::seed_from_u64(7);

        assert!((0..100).all(|_| SpawnChance(0.0).sample(&mut rng) == Cell::Dead));
        assert!((0..100).all(|_| SpawnChance(1.0).sample(&mut rng) == Cell::Alive));
    }

    #[test]
    fn when_sampling_with_the_default_chance_roughly_a_fifth_of_cells_are_alive() {
        let mut rng = StdRng::seed_from_u64(0);
        let alive = (0..10_000)
            .filter(|_| SpawnChance::default().sample(&mut rng).is_alive())
            .count();

        assert!((1_700..2_300).contains(&alive), "alive = {}", alive);
    }
}
