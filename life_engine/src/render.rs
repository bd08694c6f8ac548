use crate::error::Result;
use crate::grid::Grid;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    style::{Color, Print, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::Write;
use std::thread;
use std::time::Duration;
use tracing::debug;

/// Plays a sequence of grids in the terminal.
#[derive(Clone, Debug)]
pub struct Animation {
    /// Time each frame stays on screen.
    pub interval: Duration,
    /// How many extra times the first frame is shown before playback starts.
    pub start_delay: usize,
}

impl Default for Animation {
    fn default() -> Self {
        Animation {
            interval: Duration::from_millis(400),
            start_delay: 0,
        }
    }
}

impl Animation {
    pub fn new(interval: Duration, start_delay: usize) -> Animation {
        Animation {
            interval,
            start_delay,
        }
    }

    /// The frames in playback order, with the first frame repeated `start_delay` times.
    pub fn frames<'a>(&self, history: &'a [Grid]) -> Vec<(usize, &'a Grid)> {
        let delay = match history.first() {
            Some(first) => vec![(0, first); self.start_delay],
            None => Vec::new(),
        };

        delay
            .into_iter()
            .chain(history.iter().enumerate())
            .collect()
    }

    /// Draws every frame to `out`, waiting `interval` between frames.
    pub fn play<W: Write>(&self, out: &mut W, history: &[Grid]) -> Result<()> {
        let frames = self.frames(history);
        debug!(frames = frames.len(), "playing animation");

        for (index, (generation, grid)) in frames.iter().enumerate() {
            if index > 0 {
                thread::sleep(self.interval);
            }
            draw_frame(out, *generation, grid)?;
        }

        queue!(out, Show)?;
        out.flush()?;

        Ok(())
    }
}

/// Clears the terminal and draws a single grid, row 0 on top.
pub fn draw_frame<W: Write>(out: &mut W, generation: usize, grid: &Grid) -> Result<()> {
    queue!(
        out,
        Clear(ClearType::All),
        MoveTo(0, 0),
        Hide,
        Print("Generation: "),
        Print(generation.to_string()),
        Print("  Population: "),
        Print(grid.population().to_string()),
        Print("\n\n")
    )?;

    for row in grid.rows() {
        for cell in row {
            queue!(
                out,
                SetForegroundColor(cell.color()),
                Print(cell.char()),
                SetForegroundColor(Color::Reset)
            )?;
        }
        queue!(out, Print("\n"))?;
    }

    out.flush()?;

    Ok(())
}
