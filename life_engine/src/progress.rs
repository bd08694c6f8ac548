use std::io::{self, Write};

const BAR_LENGTH: usize = 60;

/// A single line progress bar, redrawn in place with a carriage return.
#[derive(Clone, Debug)]
pub struct ProgressBar {
    total: usize,
}

impl ProgressBar {
    pub fn new(total: usize) -> ProgressBar {
        ProgressBar { total }
    }

    /// Renders the bar for `step`, e.g. `Simulating... [||||      ] 40 %`.
    pub fn line(&self, step: usize) -> String {
        let total = self.total.max(1);
        let step = step.min(total);
        let percentage = step * 100 / total;
        let fill = step * BAR_LENGTH / total;

        format!(
            "Simulating... [{}{}] {} %",
            "|".repeat(fill),
            " ".repeat(BAR_LENGTH - fill),
            percentage
        )
    }

    /// Writes the bar for `step`. The line is terminated with a newline once `step` reaches the
    /// total, so later output starts on a fresh line.
    pub fn update<W: Write>(&self, out: &mut W, step: usize) -> io::Result<()> {
        let line = self.line(step);
        if step < self.total {
            write!(out, "{}\r", line)?;
        } else {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }

    pub fn finish<W: Write>(&self, out: &mut W) -> io::Result<()> {
        self.update(out, self.total)
    }
}
