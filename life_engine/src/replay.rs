use crate::error::Result;
use crate::format::format_board;
use crate::grid::Grid;
use serde_json::json;
use std::{fs::File, io::BufWriter};
use tracing::info;

pub fn create_replay_logger(
    filename: Option<String>,
    id: String,
    initial: &Grid,
) -> Box<dyn ReplayLogger> {
    match filename {
        None => Box::new(NoOpReplayLogger {}),
        Some(filename) => Box::new(JsonReplayLogger::new(filename, id, initial)),
    }
}

/// Records the generations of a simulation so they can be replayed outside of the terminal.
pub trait ReplayLogger {
    #[allow(unused_variables)]
    fn log_generation(&mut self, generation: usize, grid: &Grid) {}

    fn clear(&mut self) {}

    fn save(&self) -> Result<()> {
        Ok(())
    }
}

#[derive(serde::Serialize)]
struct Generation {
    generation: usize,
    population: usize,
    alive: Vec<(usize, usize)>,
}

struct NoOpReplayLogger;
impl ReplayLogger for NoOpReplayLogger {}

struct JsonReplayLogger {
    filename: String,
    id: String,
    width: usize,
    height: usize,
    initial: String,
    generations: Vec<Generation>,
}

impl JsonReplayLogger {
    pub fn new(filename: String, id: String, initial: &Grid) -> JsonReplayLogger {
        JsonReplayLogger {
            filename,
            id,
            width: initial.width(),
            height: initial.height(),
            initial: format_board(initial),
            generations: Vec::new(),
        }
    }
}

impl ReplayLogger for JsonReplayLogger {
    fn log_generation(&mut self, generation: usize, grid: &Grid) {
        // Only live cells are stored, boards are mostly dead
        self.generations.push(Generation {
            generation,
            population: grid.population(),
            alive: grid.alive_cells(),
        });
    }

    fn clear(&mut self) {
        self.generations.clear();
    }

    fn save(&self) -> Result<()> {
        let file = File::create(&self.filename)?;

        let data = json!({
            "id": self.id,
            "board": {
                "width": self.width,
                "height": self.height,
                "initial": self.initial,
            },
            "generations": self.generations,
        });

        let mut writer = BufWriter::new(&file);
        serde_json::to_writer_pretty(&mut writer, &data)?;

        info!(
            filename = %self.filename,
            generations = self.generations.len(),
            "saved replay"
        );

        Ok(())
    }
}
