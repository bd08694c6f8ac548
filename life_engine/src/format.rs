//! Plain text board files.
//!
//! A board is stored as one line per row, each cell written as `0` (dead) or `1` (alive) and
//! separated by whitespace:
//!
//! ```text
//! 0 1 0 0 0 0 1
//! 1 0 0 0 0 1 0
//! 0 0 0 0 0 0 0
//! 1 1 0 0 0 0 0
//! ```
use crate::cell::Cell;
use crate::error::{Error, Result};
use crate::grid::Grid;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Parses the contents of a board file.
pub fn parse_board(contents: &str) -> Result<Grid> {
    let token = Regex::new(r"\S+").unwrap();

    // Trailing blank lines are tolerated, blank lines between rows are not
    let lines: Vec<&str> = contents.lines().collect();
    let last = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .ok_or_else(|| Error::malformed(1, "board file contains no rows"))?;

    let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(last + 1);

    for (index, line) in lines[..=last].iter().enumerate() {
        let line_number = index + 1;
        let row = token
            .find_iter(line)
            .map(|m| {
                Cell::from_token(m.as_str()).ok_or_else(|| {
                    Error::malformed(
                        line_number,
                        format!(
                            "unexpected token `{}` at column {}, expected `0` or `1`",
                            m.as_str(),
                            m.start() + 1
                        ),
                    )
                })
            })
            .collect::<Result<Vec<Cell>>>()?;

        if let Some(first) = rows.first() {
            if row.len() != first.len() {
                return Err(Error::malformed(
                    line_number,
                    format!("row has {} cells but the first row has {}", row.len(), first.len()),
                ));
            }
        } else if row.is_empty() {
            return Err(Error::malformed(line_number, "first row is empty"));
        }

        rows.push(row);
    }

    Grid::from_rows(rows)
}

/// Reads a board file from disk.
pub fn read_board<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let grid = parse_board(&contents)?;

    debug!(
        path = %path.display(),
        width = grid.width(),
        height = grid.height(),
        "read board file"
    );

    Ok(grid)
}

/// Formats a grid in the board file format. Every token is followed by a single space and every
/// row ends with a newline.
pub fn format_board(grid: &Grid) -> String {
    let mut text = String::with_capacity((grid.width() * 2 + 1) * grid.height());

    for row in grid.rows() {
        for cell in row {
            text.push(cell.token());
            text.push(' ');
        }
        text.push('\n');
    }

    text
}

/// Writes a grid to disk, overwriting any existing file.
pub fn save_board<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, format_board(grid))?;

    debug!(path = %path.display(), "saved board file");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("{}-{}", Uuid::new_v4(), name))
    }

    #[test]
    fn when_parsing_a_board_it_is_created_with_the_correct_width_and_height() {
        let grid = parse_board(
            "\
            0 1 0 0
            1 0 0 1
            0 0 0 0",
        )
        .unwrap();

        assert_eq!(grid.width(), 4);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.alive_cells(), vec![(1, 0), (0, 1), (3, 1)]);
    }

    #[test]
    fn when_parsing_a_board_with_trailing_spaces_and_newlines_they_are_ignored() {
        let grid = parse_board("0 1 \n1 0 \n\n\n").unwrap();

        assert_eq!(grid.size(), (2, 2));
        assert_eq!(grid.population(), 2);
    }

    #[test]
    fn when_parsing_a_board_with_an_invalid_token_an_error_with_the_line_is_returned() {
        let result = parse_board("0 1 0\n0 2 0\n");

        match result {
            Err(Error::MalformedBoardFile { line, reason }) => {
                assert_eq!(line, 2);
                assert!(reason.contains("`2`"));
                assert!(reason.contains("column 3"));
            }
            other => panic!("Expected a malformed board error, got {:?}", other),
        }
    }

    #[test]
    fn when_parsing_a_board_with_rows_of_different_lengths_an_error_is_returned() {
        let result = parse_board("0 1 0\n0 1\n");

        assert!(matches!(
            result,
            Err(Error::MalformedBoardFile { line: 2, .. })
        ));
    }

    #[test]
    fn when_parsing_a_board_with_a_blank_row_between_rows_an_error_is_returned() {
        let result = parse_board("0 1\n\n1 0\n");

        assert!(matches!(
            result,
            Err(Error::MalformedBoardFile { line: 2, .. })
        ));
    }

    #[test]
    fn when_parsing_an_empty_board_an_error_is_returned() {
        assert!(matches!(
            parse_board(""),
            Err(Error::MalformedBoardFile { line: 1, .. })
        ));
        assert!(matches!(
            parse_board("  \n\n"),
            Err(Error::MalformedBoardFile { line: 1, .. })
        ));
    }

    #[test]
    fn when_formatting_a_board_every_token_is_followed_by_a_space() {
        let grid = parse_board("0 1\n1 1").unwrap();

        assert_eq!(format_board(&grid), "0 1 \n1 1 \n");
    }

    #[test]
    fn when_saving_and_reading_a_board_the_same_grid_is_returned() {
        let grid = parse_board(
            "\
            0 1 0 0 0 0 1
            1 0 0 0 0 1 0
            0 0 0 0 0 0 0
            1 1 0 0 0 0 0",
        )
        .unwrap();
        let path = temp_path("board.txt");

        save_board(&grid, &path).unwrap();
        let loaded = read_board(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(loaded, grid);
    }

    #[test]
    fn when_reading_a_missing_file_an_io_error_is_returned() {
        let result = read_board(temp_path("missing.txt"));

        assert!(matches!(result, Err(Error::Io(_))));
    }
}
