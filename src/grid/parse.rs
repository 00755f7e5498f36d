use std::str::FromStr;

use tracing::debug;

use super::{CellId, HeightMap, MAX_ELEVATION};
use crate::errors::GridError;


/// Parses the text format: one row per line, `a`-`z` for elevation 0-25,
/// `S` for the start (elevation 0) and `E` for the target (elevation 25).
/// Blank lines are skipped and a trailing `\r` is stripped; any other whitespace is invalid.
impl FromStr for HeightMap {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut elevations = Vec::new();
        let mut width: Option<usize> = None;
        let mut start: Option<CellId> = None;
        let mut target: Option<CellId> = None;

        for (i, line) in s.lines().enumerate() {
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            let line_no = i + 1;

            let found = line.chars().count();
            match width {
                Some(expected) if expected != found => {
                    return Err(GridError::RaggedRow { line: line_no, expected, found });
                }
                Some(_) => {}
                None => width = Some(found),
            }

            for (column, c) in line.chars().enumerate() {
                let id = elevations.len();
                let elevation = match c {
                    'a'..='z' => c as u8 - b'a',
                    'S' => {
                        if start.replace(id).is_some() {
                            return Err(GridError::DuplicateStart { line: line_no, column: column + 1 });
                        }
                        0
                    }
                    'E' => {
                        if target.replace(id).is_some() {
                            return Err(GridError::DuplicateTarget { line: line_no, column: column + 1 });
                        }
                        MAX_ELEVATION
                    }
                    _ => {
                        return Err(GridError::InvalidCharacter { line: line_no, column: column + 1, found: c });
                    }
                };
                elevations.push(elevation);
            }
        }

        let width = width.ok_or(GridError::Empty)?;
        let start = start.ok_or(GridError::MissingStart)?;
        let target = target.ok_or(GridError::MissingTarget)?;

        debug!(width, height = elevations.len() / width, start, goal = target, "loaded height map");
        HeightMap::from_elevations(width, elevations, start, target)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_parse_elevations() {
        let grid: HeightMap = "Sbz\nyxE\n".parse().unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 2);
        let e: Vec<u8> = (0..grid.len()).map(|id| grid.elevation(id)).collect();
        assert_eq!(e, vec![0, 1, 25, 24, 23, 25]);
        assert_eq!(grid.start(), 0);
        assert_eq!(grid.target(), 5);
    }

    #[test]
    fn test_parse_ignores_blank_lines_and_crlf() {
        let grid: HeightMap = "\r\nSab\r\n\r\nbcE\r\n\n".parse().unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.to_string(), "Sab\nbcE");
    }

    #[rstest]
    #[case("", GridError::Empty)]
    #[case("\n\n", GridError::Empty)]
    #[case("abc\nabE", GridError::MissingStart)]
    #[case("Sbc\nabc", GridError::MissingTarget)]
    #[case("SaE\nab", GridError::RaggedRow { line: 2, expected: 3, found: 2 })]
    #[case("SaE\nabcd", GridError::RaggedRow { line: 2, expected: 3, found: 4 })]
    #[case("Sa1\nabE", GridError::InvalidCharacter { line: 1, column: 3, found: '1' })]
    #[case("SaE\naSb", GridError::DuplicateStart { line: 2, column: 2 })]
    #[case("SaE\nEab", GridError::DuplicateTarget { line: 2, column: 1 })]
    #[case("Sa \nabE", GridError::InvalidCharacter { line: 1, column: 3, found: ' ' })]
    #[case("SaE\nabE\t", GridError::RaggedRow { line: 2, expected: 3, found: 4 })]
    #[case(" Sa\nabE", GridError::InvalidCharacter { line: 1, column: 1, found: ' ' })]
    fn test_parse_rejects_invalid_grids(#[case] input: &str, #[case] expected: GridError) {
        assert_eq!(input.parse::<HeightMap>(), Err(expected));
    }
}
