//! Reading grid rows and dimensions from text.
//!
//! The input format is one padded grid row per line, values separated by
//! commas. Surrounding whitespace is ignored, and so are blank lines.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

/// Failure to obtain raw grid data.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value in the grid file; `line` and `column` are 1-based.
    #[error("line {line}, column {column}: invalid integer {token:?}: {source}")]
    Parse {
        line: usize,
        column: usize,
        token: String,
        #[source]
        source: ParseIntError,
    },

    /// A row or column count on the command line is not an integer.
    #[error("{token:?} is not a cell count: {source}")]
    Count {
        token: String,
        #[source]
        source: ParseIntError,
    },

    /// A row or column count on the command line is zero or negative.
    #[error("cell counts must be > 0, got {value}")]
    Dimension { value: i64 },
}

/// Parse a row or column count given on the command line.
///
/// `clap` reports which argument the error belongs to.
pub fn parse_dimension(s: &str) -> Result<usize, LoadError> {
    let token = s.trim();
    let value: i64 = token.parse().map_err(|source| LoadError::Count {
        token: token.to_string(),
        source,
    })?;
    usize::try_from(value)
        .ok()
        .filter(|&v| v > 0)
        .ok_or(LoadError::Dimension { value })
}

/// Read comma-separated integer rows.
///
/// Only the syntax is checked here; the shape is validated by
/// [`DistanceGrid::from_rows`](sweepgrid_core::DistanceGrid::from_rows).
pub fn load_rows(reader: impl BufRead) -> Result<Vec<Vec<i32>>, LoadError> {
    let mut rows = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| LoadError::Io {
            path: PathBuf::from("<input>"),
            source,
        })?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let row = line
            .split(',')
            .enumerate()
            .map(|(j, token)| {
                let token = token.trim();
                token.parse::<i32>().map_err(|source| LoadError::Parse {
                    line: i + 1,
                    column: j + 1,
                    token: token.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }
    log::debug!("loaded {} rows", rows.len());
    Ok(rows)
}

/// Read rows from the file at `path`.
pub fn load_file(path: &Path) -> Result<Vec<Vec<i32>>, LoadError> {
    let io_err = |source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    load_rows(BufReader::new(file)).map_err(|err| match err {
        LoadError::Io { source, .. } => io_err(source),
        other => other,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimensions() {
        assert_eq!(parse_dimension("3").unwrap(), 3);
        assert_eq!(parse_dimension(" 12 ").unwrap(), 12);
        assert!(matches!(
            parse_dimension("0"),
            Err(LoadError::Dimension { value: 0, .. })
        ));
        assert!(matches!(
            parse_dimension("-4"),
            Err(LoadError::Dimension { value: -4, .. })
        ));
        assert!(matches!(
            parse_dimension("three"),
            Err(LoadError::Count { ref token, .. }) if token == "three"
        ));
    }

    #[test]
    fn dimension_errors_name_no_file_position() {
        let err = parse_dimension("x").unwrap_err().to_string();
        assert!(err.starts_with("\"x\" is not a cell count"), "{err}");
        assert!(!err.contains("line"));
        let err = parse_dimension("0").unwrap_err().to_string();
        assert_eq!(err, "cell counts must be > 0, got 0");
    }

    #[test]
    fn rows_with_spaces_and_blank_lines() {
        let input = "5, 5,5\n\n 5,0 ,5 \n5,5,5\n\n";
        let rows = load_rows(input.as_bytes()).unwrap();
        assert_eq!(rows, vec![vec![5, 5, 5], vec![5, 0, 5], vec![5, 5, 5]]);
    }

    #[test]
    fn ragged_rows_are_loaded_as_is() {
        let rows = load_rows("1,2\n3\n".as_bytes()).unwrap();
        assert_eq!(rows, vec![vec![1, 2], vec![3]]);
    }

    #[test]
    fn bad_token_reports_position() {
        let err = load_rows("5,5,5\n5,x,5\n".as_bytes()).unwrap_err();
        match err {
            LoadError::Parse {
                line, column, token, ..
            } => {
                assert_eq!((line, column), (2, 2));
                assert_eq!(token, "x");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(load_rows("1,,2".as_bytes()).is_err());
    }

    #[test]
    fn missing_file() {
        let err = load_file(Path::new("/nonexistent/grid.dat")).unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/grid.dat"));
    }
}
