use std::fmt::Display;
use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use crate::types::SampleIoError;

/// Write `values` to `path`, one per line, replacing any existing file.
///
/// # Errors
///
/// Returns `SampleIoError::Io` if the file cannot be created or written.
pub fn write_sample<P, T>(path: P, values: &[T]) -> Result<(), SampleIoError>
where
    P: AsRef<Path>,
    T: Display,
{
    let path = path.as_ref();
    let io_err = |source| SampleIoError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    for value in values {
        writeln!(writer, "{}", value).map_err(io_err)?;
    }
    writer.flush().map_err(io_err)
}

/// Read a sample written by [`write_sample`].
///
/// # Errors
///
/// - `SampleIoError::Io` if the file cannot be opened or read
/// - `SampleIoError::Parse` for the first line that is not a float
pub fn read_floats<P: AsRef<Path>>(path: P) -> Result<Vec<f64>, SampleIoError> {
    let path = path.as_ref();
    let mut content = String::new();
    File::open(path)
        .and_then(|mut file| file.read_to_string(&mut content))
        .map_err(|source| SampleIoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    parse_floats(&content)
}

/// Parse one float per line. Surrounding whitespace on each line is ignored;
/// a blank line is malformed.
///
/// # Examples
///
/// ```
/// use mcstat_core::io::parse_floats;
/// use mcstat_core::types::SampleIoError;
///
/// assert_eq!(parse_floats("1.5\n-2\n").unwrap(), vec![1.5, -2.0]);
/// assert!(matches!(
///     parse_floats("1.5\nabc\n"),
///     Err(SampleIoError::Parse { line: 2, .. })
/// ));
/// ```
pub fn parse_floats(content: &str) -> Result<Vec<f64>, SampleIoError> {
    content
        .lines()
        .enumerate()
        .map(|(index, line)| {
            line.trim()
                .parse::<f64>()
                .map_err(|_| SampleIoError::Parse {
                    line: index + 1,
                    content: line.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_exact() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.txt");
        let values = vec![0.1, 1.0 / 3.0, -2.5e-300, 1e300, 0.0];

        write_sample(&path, &values).unwrap();
        let read = read_floats(&path).unwrap();
        assert_eq!(read, values);
    }

    #[test]
    fn test_integer_counts_readable_as_floats() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counts.txt");

        write_sample(&path, &[3_u64, 0, 7]).unwrap();
        assert_eq!(read_floats(&path).unwrap(), vec![3.0, 0.0, 7.0]);
    }

    #[test]
    fn test_empty_sample() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.txt");

        write_sample::<_, f64>(&path, &[]).unwrap();
        assert!(read_floats(&path).unwrap().is_empty());
    }

    #[test]
    fn test_whitespace_and_crlf() {
        assert_eq!(
            parse_floats("  1.0 \r\n2.0\r\n").unwrap(),
            vec![1.0, 2.0]
        );
    }

    #[test]
    fn test_blank_line_is_malformed() {
        match parse_floats("1.0\n\n2.0\n") {
            Err(SampleIoError::Parse { line, content }) => {
                assert_eq!(line, 2);
                assert!(content.is_empty());
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_special_values_parse() {
        let values = parse_floats("inf\n-inf\nNaN\n").unwrap();
        assert!(values[0].is_infinite() && values[0] > 0.0);
        assert!(values[1].is_infinite() && values[1] < 0.0);
        assert!(values[2].is_nan());
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_floats(dir.path().join("nope.txt")).unwrap_err();
        assert!(matches!(err, SampleIoError::Io { .. }));
    }
}
