//! Plain-text lookup tables.
//!
//! The `singleval` format has one record per line, `x0 x1 y`, whitespace
//! separated, with no header or comments. Records are grouped by contiguous
//! runs of equal `x0`; the file must already be sorted by `x0`, since no
//! reordering is done. Only the first group's `x1` values are kept, and later
//! groups are expected to repeat them.
//!
//! ```text
//! 0 0 0
//! 0 1 0
//! 10 0 10
//! 10 1 20
//! ```
use core::fmt::{self, Display};
use core::str::FromStr;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use itertools::Itertools;
use log::{debug, warn};
use num_traits::Float;

use crate::error::{GridError, Result};
use crate::grid::GridLookup;

/// Text layouts understood by [`GridLookup::load`] and [`GridLookup::save`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextFormat {
    /// One `x0 x1 y` record per line.
    #[default]
    SingleVal,
}

impl FromStr for TextFormat {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "singleval" => Ok(Self::SingleVal),
            other => Err(GridError::UnsupportedFormat(other.to_owned())),
        }
    }
}

impl Display for TextFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SingleVal => f.write_str("singleval"),
        }
    }
}

impl<T> GridLookup<T>
where
    T: Float + FromStr,
    <T as FromStr>::Err: Display,
{
    /// Read a lookup table from a text file.
    ///
    /// The format identifier is checked before the file is opened.
    ///
    /// # Errors
    /// * [`GridError::UnsupportedFormat`] for an unknown `format`
    /// * [`GridError::Io`] if the file cannot be read
    /// * Any error from [`GridLookup::read`]
    pub fn load<P: AsRef<Path>>(path: P, format: &str) -> Result<Self> {
        let format: TextFormat = format.parse()?;
        let path = path.as_ref();
        debug!("Loading {format} lookup table from {}", path.display());

        let file = File::open(path)?;
        Self::read(BufReader::new(file), format)
    }

    /// Parse a lookup table held in memory.
    ///
    /// # Errors
    /// * Same as [`GridLookup::read`]
    pub fn parse(text: &str, format: TextFormat) -> Result<Self> {
        Self::read(text.as_bytes(), format)
    }

    /// Read a lookup table from any buffered reader.
    ///
    /// # Errors
    /// * [`GridError::Parse`] for a line without exactly three numbers
    /// * [`GridError::EmptyGrid`] if there are no records
    /// * [`GridError::DimensionMismatch`] if a row has a different number of
    ///   x1 samples than the first row
    /// * Any error from [`GridLookup::new`]
    pub fn read<R: BufRead>(reader: R, format: TextFormat) -> Result<Self> {
        match format {
            TextFormat::SingleVal => read_singleval(reader),
        }
    }
}

impl<T: Float + Display> GridLookup<T> {
    /// Write the table to a text file, replacing any existing contents.
    ///
    /// # Errors
    /// * [`GridError::UnsupportedFormat`] for an unknown `format`
    /// * [`GridError::Io`] if the file cannot be written
    pub fn save<P: AsRef<Path>>(&self, path: P, format: &str) -> Result<()> {
        let format: TextFormat = format.parse()?;
        let path = path.as_ref();
        debug!("Saving {format} lookup table to {}", path.display());

        self.write(BufWriter::new(File::create(path)?), format)
    }

    /// Write the table in the given format.
    ///
    /// Numbers use the shortest representation that parses back to the
    /// same value, so reading the output reproduces the table exactly.
    ///
    /// # Errors
    /// * [`GridError::Io`] if the writer fails
    pub fn write<W: Write>(&self, mut writer: W, format: TextFormat) -> Result<()> {
        match format {
            TextFormat::SingleVal => {
                for (i, a) in self.x0().iter().enumerate() {
                    let row = self.row(i).unwrap_or_default();
                    for (b, y) in self.x1().iter().zip(row) {
                        writeln!(writer, "{a} {b} {y}")?;
                    }
                }
            }
        }
        writer.flush()?;
        Ok(())
    }
}

fn read_singleval<T, R>(reader: R) -> Result<GridLookup<T>>
where
    T: Float + FromStr,
    <T as FromStr>::Err: Display,
    R: BufRead,
{
    let mut records: Vec<[T; 3]> = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = i + 1;

        let fields: Vec<&str> = line.split_whitespace().collect();
        match fields[..] {
            [] => continue,
            [a, b, c] => records.push([
                parse_field(lineno, a)?,
                parse_field(lineno, b)?,
                parse_field(lineno, c)?,
            ]),
            _ => {
                return Err(GridError::Parse {
                    line: lineno,
                    message: format!("expected 3 fields, found {}", fields.len()),
                });
            }
        }
    }

    let mut x0 = Vec::new();
    let mut x1: Option<Vec<T>> = None;
    let mut vals = Vec::with_capacity(records.len());

    for (key, group) in &records.iter().group_by(|r| r[0]) {
        let (cols, ys): (Vec<T>, Vec<T>) = group.map(|r| (r[1], r[2])).unzip();

        match &x1 {
            None => x1 = Some(cols),
            Some(first) if first.len() != cols.len() => {
                return Err(GridError::DimensionMismatch {
                    context: "x1 samples per row",
                    expected: first.len(),
                    got: cols.len(),
                });
            }
            Some(first) if *first != cols => {
                warn!(
                    "Row at x0 = {:?} has different x1 values than the first row; using the first row's",
                    key.to_f64()
                );
            }
            Some(_) => {}
        }

        x0.push(key);
        vals.extend(ys);
    }

    let x1 = x1.ok_or(GridError::EmptyGrid)?;
    debug!("Read {} records into {} rows", records.len(), x0.len());

    GridLookup::new(x0, x1, vals)
}

fn parse_field<T>(line: usize, s: &str) -> Result<T>
where
    T: FromStr,
    <T as FromStr>::Err: Display,
{
    s.parse().map_err(|e| GridError::Parse {
        line,
        message: format!("invalid number `{s}`: {e}"),
    })
}
