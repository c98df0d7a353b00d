use std::fs;
use std::path::Path;

use super::error::LoaderError;
use super::{Cell, GridMaze, Position};

//─────────────────────────────────────────────────────────────────────────────

/// Loads a maze from a text file.
pub fn load_maze(file_path: &Path) -> Result<GridMaze, LoaderError> {
    let file_content = fs::read_to_string(file_path)
        .map_err(|e| LoaderError::ReadFile(file_path.display().to_string(), e))?;
    parse_maze(&file_content)
}

/// Parses the text form of a maze.
///
/// One row per non-empty line. `#` or `1` is a wall, `.`, `0` or a space is
/// open, `S` and `E` mark the (open) start and end cells. Lines are taken as
/// written, trailing spaces included; only a `\r` line ending is dropped.
/// Short rows are padded with walls. Without an `S`, the first open cell of
/// the top row is the start; without an `E`, the last open cell of the bottom
/// row is the end. Error positions refer to lines of `text`, counted from 1.
pub fn parse_maze(text: &str) -> Result<GridMaze, LoaderError> {
    let mut cells: Vec<Vec<Cell>> = Vec::new();
    let mut start: Option<Position> = None;
    let mut end: Option<Position> = None;

    for (line_idx, line) in text.lines().enumerate() {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.is_empty() {
            continue;
        }
        let row_idx = cells.len();
        let mut row = Vec::with_capacity(line.len());
        for (col, ch) in line.chars().enumerate() {
            let cell = match ch {
                '#' | '1' => Cell::Wall,
                '.' | '0' | ' ' => Cell::Open,
                'S' | 'E' => {
                    let marker = if ch == 'S' { &mut start } else { &mut end };
                    if marker.replace(Position::new(row_idx, col)).is_some() {
                        return Err(LoaderError::DuplicateMarker(ch));
                    }
                    Cell::Open
                }
                _ => {
                    return Err(LoaderError::UnknownCell {
                        line: line_idx + 1,
                        column: col + 1,
                        ch,
                    })
                }
            };
            row.push(cell);
        }
        cells.push(row);
    }

    // Rows shorter than the widest one end in walls.
    let width = cells.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut cells {
        row.resize(width, Cell::Wall);
    }

    let start = match start {
        Some(pos) => pos,
        None => border_opening(cells.first(), 0, false)
            .ok_or(LoaderError::NoDefaultOpening('S'))?,
    };
    let end = match end {
        Some(pos) => pos,
        None => border_opening(cells.last(), cells.len().saturating_sub(1), true)
            .ok_or(LoaderError::NoDefaultOpening('E'))?,
    };

    Ok(GridMaze::new(cells, start, end)?)
}

/// Finds the first (or last) open cell of a border row.
fn border_opening(row: Option<&Vec<Cell>>, row_idx: usize, from_right: bool) -> Option<Position> {
    let row = row?;
    let is_open = |(_, cell): &(usize, &Cell)| **cell == Cell::Open;
    let col = if from_right {
        row.iter().enumerate().rev().find(is_open)?.0
    } else {
        row.iter().enumerate().find(is_open)?.0
    };
    Some(Position::new(row_idx, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_markers_and_walls() {
        let maze = parse_maze("#S#\n#.#\n#E#\n").unwrap();
        assert_eq!(maze.start(), Position::new(0, 1));
        assert_eq!(maze.end(), Position::new(2, 1));
        assert_eq!(maze.open_cells().count(), 3);
    }

    #[test]
    fn defaults_to_border_openings() {
        let maze = parse_maze("1011\n1001\n1101\n").unwrap();
        assert_eq!(maze.start(), Position::new(0, 1));
        assert_eq!(maze.end(), Position::new(2, 2));
    }

    #[test]
    fn rejects_unknown_characters() {
        let err = parse_maze("#S#\n#x#\n#E#").unwrap_err();
        assert!(matches!(
            err,
            LoaderError::UnknownCell {
                line: 2,
                column: 2,
                ch: 'x'
            }
        ));
    }

    #[test]
    fn unknown_character_reports_the_file_line() {
        let err = parse_maze("\n\n#S#\n#x#\n#E#\n").unwrap_err();
        assert!(matches!(
            err,
            LoaderError::UnknownCell {
                line: 4,
                column: 2,
                ch: 'x'
            }
        ));
    }

    #[test]
    fn trailing_spaces_are_open_cells() {
        let maze = parse_maze("S. \n#.E\n").unwrap();
        assert_eq!(maze.cols(), 3);
        assert_eq!(maze.cell(Position::new(0, 2)), Some(Cell::Open));
        assert_eq!(maze.degree(Position::new(0, 2)), 2);
    }

    #[test]
    fn row_of_spaces_is_an_open_row() {
        let maze = parse_maze("S##\n   \n##E\n").unwrap();
        assert_eq!(maze.rows(), 3);
        assert_eq!(maze.end(), Position::new(2, 2));
        for col in 0..3 {
            assert!(maze.is_open(Position::new(1, col)));
        }
    }

    #[test]
    fn blank_lines_do_not_shift_rows() {
        let maze = parse_maze("\n#S#\n\n#.#\r\n#E#\n").unwrap();
        assert_eq!(maze.rows(), 3);
        assert_eq!(maze.start(), Position::new(0, 1));
        assert_eq!(maze.end(), Position::new(2, 1));
    }

    #[test]
    fn rejects_duplicate_start() {
        let err = parse_maze("SS\nE.").unwrap_err();
        assert!(matches!(err, LoaderError::DuplicateMarker('S')));
    }

    #[test]
    fn rejects_closed_border() {
        let err = parse_maze("###\n#.#\n#E#").unwrap_err();
        assert!(matches!(err, LoaderError::NoDefaultOpening('S')));
    }

    #[test]
    fn blank_text_has_no_opening() {
        let err = parse_maze("\n\n").unwrap_err();
        assert!(matches!(err, LoaderError::NoDefaultOpening('S')));
    }
}
