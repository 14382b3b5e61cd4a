/// ASCII PLY to matrix file conversion.
/// Streams the input line by line, skips the header section and re-buckets
/// the point list into an (x, z)-indexed grid with a fixed row stride.
use crate::error::{Error, Result};
use constants::{PLY_END_ATTRIBUTE, PLY_END_HEADER};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Per-file conversion statistics.
#[derive(Debug, Default)]
pub struct FileStats {
    /// Output lines written, one per input data row.
    pub samples: usize,
}

/// Converts one PLY-like file into a `row col y` matrix dump.
///
/// Header lines are ignored until a line containing the end-of-header
/// marker; a line exactly matching the end-of-attributes marker ends data
/// capture. Each data line contributes one sample, with the column index
/// cycling `0..stride-1` and the row index incrementing on wrap.
pub fn convert_to_matrix_file(load_path: &Path, save_path: &Path, stride: u32) -> Result<FileStats> {
    let input = File::open(load_path)?;
    let reader = BufReader::new(input);
    let output = File::create(save_path)?;
    let mut writer = BufWriter::new(output);

    let mut in_attributes = false;
    let mut row: u32 = 0;
    let mut col: u32 = 0;
    let mut stats = FileStats::default();

    for line in reader.lines() {
        let line = line?;

        if line.contains(PLY_END_HEADER) {
            in_attributes = true;
        } else if line == PLY_END_ATTRIBUTE {
            in_attributes = false;
        } else if in_attributes {
            let position = parse_position(&line, load_path)?;
            writeln!(writer, "{} {} {}", row, col, position.1)?;
            stats.samples += 1;

            if col < stride - 1 {
                col += 1;
            } else {
                row += 1;
                col = 0;
            }
        }
    }

    writer.flush()?;
    Ok(stats)
}

/// Parses the first three whitespace-separated fields as an X/Y/Z triple.
/// Short or non-numeric lines surface as a recoverable per-file error.
fn parse_position(line: &str, path: &Path) -> Result<(f32, f32, f32)> {
    let mut fields = line.split_whitespace();
    let mut next = || -> Option<f32> { fields.next()?.parse().ok() };

    match (next(), next(), next()) {
        (Some(x), Some(y), Some(z)) => Ok((x, y, z)),
        _ => Err(Error::MalformedRecord {
            file: path.to_path_buf(),
            line: line.to_string(),
        }),
    }
}
