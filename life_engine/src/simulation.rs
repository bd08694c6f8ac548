use crate::board::Board;
use crate::error::Result;
use crate::format::{read_board, save_board};
use crate::grid::Grid;
use crate::progress::ProgressBar;
use crate::render::Animation;
use crate::replay::{create_replay_logger, ReplayLogger};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::stdout;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{info, info_span};
use uuid::Uuid;

/// Board size used for random boards when none is configured.
pub const DEFAULT_SIZE: (usize, usize) = (50, 50);

/// Settings for a simulation run.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Number of steps to simulate. The board is ticked `n_steps + 1` times.
    pub n_steps: usize,
    /// Board size as `(width, height)`. Checked against the board file when both are set.
    pub size: Option<(usize, usize)>,
    /// Board file to start from. A random board is generated when `None`.
    pub board_file: Option<PathBuf>,
    /// Seed for random boards. Drawn at random and logged when `None`.
    pub seed: Option<u64>,
    /// Where the starting board is written after the run, so random boards can be replayed.
    pub initial_board_file: Option<PathBuf>,
    /// Play the history in the terminal after the run.
    pub animate: bool,
    /// Extra frames of the first generation shown before the animation starts.
    pub start_delay: Option<usize>,
    /// Time between animation frames in milliseconds.
    pub interval_ms: u64,
    /// JSON replay file. No replay is written when `None`.
    pub replay_file: Option<String>,
    /// Print a progress bar while ticking.
    pub progress: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            n_steps: 100,
            size: None,
            board_file: None,
            seed: None,
            initial_board_file: Some(PathBuf::from("initial-board.txt")),
            animate: true,
            start_delay: None,
            interval_ms: 400,
            replay_file: None,
            progress: true,
        }
    }
}

impl SimulationConfig {
    pub fn from_json(contents: &str) -> Result<SimulationConfig> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<SimulationConfig> {
        SimulationConfig::from_json(&fs::read_to_string(path)?)
    }

    pub fn animation(&self) -> Animation {
        Animation::new(
            Duration::from_millis(self.interval_ms),
            self.start_delay.unwrap_or(0),
        )
    }
}

/// Summary of a finished run.
#[derive(Clone, Debug)]
pub struct SimulationReport {
    pub id: String,
    pub seed: Option<u64>,
    /// Number of ticks applied.
    pub generations: usize,
    /// Live cells on the final grid.
    pub population: usize,
    /// Time spent ticking and saving the initial board, without the animation.
    pub elapsed: Duration,
}

/// Drives a board through a fixed number of steps and hands the history to the persistence
/// and presentation layers.
pub struct Simulation {
    id: String,
    config: SimulationConfig,
    seed: Option<u64>,
    board: Board,
    replay_logger: Box<dyn ReplayLogger>,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Simulation> {
        let id = Uuid::new_v4().to_string();

        let (board, seed) = match &config.board_file {
            Some(path) => {
                let grid = read_board(path)?;
                let size = config.size.unwrap_or_else(|| grid.size());
                (Board::new(size, Some(grid), 0)?, None)
            }
            None => {
                let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
                let size = config.size.unwrap_or(DEFAULT_SIZE);
                (Board::new(size, None, seed)?, Some(seed))
            }
        };

        info!(
            id = %id,
            seed = ?seed,
            width = board.size().0,
            height = board.size().1,
            "created simulation"
        );

        let replay_logger =
            create_replay_logger(config.replay_file.clone(), id.clone(), board.initial_grid());

        Ok(Simulation {
            id,
            config,
            seed,
            board,
            replay_logger,
        })
    }

    /// Creates a simulation around an already loaded grid, ignoring `board_file` and `size`.
    pub fn with_grid(config: SimulationConfig, grid: Grid) -> Simulation {
        let id = Uuid::new_v4().to_string();
        let board = Board::from_grid(grid);
        let replay_logger =
            create_replay_logger(config.replay_file.clone(), id.clone(), board.initial_grid());

        Simulation {
            id,
            config,
            seed: None,
            board,
            replay_logger,
        }
    }

    /// Runs the simulation.
    ///
    /// The board is ticked `n_steps + 1` times, the initial board is saved, the history is
    /// animated if requested and the replay is saved.
    pub fn run(&mut self) -> Result<SimulationReport> {
        let span = info_span!("simulation", id = %self.id);
        let _enter = span.enter();

        let start = Instant::now();
        let ticks = self.config.n_steps + 1;
        let progress = ProgressBar::new(ticks);
        let mut out = stdout();

        self.replay_logger.clear();

        for step in 0..ticks {
            self.replay_logger
                .log_generation(self.board.generation(), self.board.grid());
            self.board.tick();

            if self.config.progress {
                progress.update(&mut out, step)?;
            }
        }

        if self.config.progress {
            progress.finish(&mut out)?;
        }

        if let Some(path) = &self.config.initial_board_file {
            save_board(self.board.initial_grid(), path)?;
        }

        let elapsed = start.elapsed();
        info!(
            ticks,
            population = self.board.grid().population(),
            elapsed_ms = elapsed.as_millis() as u64,
            "simulation finished"
        );

        if self.config.animate {
            self.config.animation().play(&mut out, self.board.history())?;
        }

        self.replay_logger.save()?;

        Ok(SimulationReport {
            id: self.id.clone(),
            seed: self.seed,
            generations: self.board.generation(),
            population: self.board.grid().population(),
            elapsed,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }
}
