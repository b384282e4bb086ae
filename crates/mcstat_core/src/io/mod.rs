//! Sample persistence.
//!
//! Samples are stored as plain text, one value per line. Values are written
//! with `Display`, which round-trips `f64` exactly.
//!
//! ```no_run
//! use mcstat_core::io::{read_floats, write_sample};
//!
//! write_sample("exp.txt", &[0.25, 1.5, 3.0]).unwrap();
//! let sample = read_floats("exp.txt").unwrap();
//! assert_eq!(sample, vec![0.25, 1.5, 3.0]);
//! ```

mod sample_file;

pub use sample_file::{parse_floats, read_floats, write_sample};
