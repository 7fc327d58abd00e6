//! Disk data file parsing.
//!
//! A data file starts with a record count on its own line (read, required
//! to be numeric, but never checked against the actual number of rows),
//! followed by one `x,y,width,height` record per line, comma-separated
//! integers. The y axis is flipped on load against the exporter's
//! 1000-unit coordinate space.

use {
  crate::{
    error::{Error, Result},
    geometry::Disk
  },
  euclid::Point2D,
  std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path
  }
};

/// Height of the exporter's coordinate space. Parsed y values are stored
/// as `FLIP_SPAN - y`.
pub const FLIP_SPAN: i32 = 1000;

/// Read a data file into disks tagged with `group`.
pub fn load_disks(path: &Path, group: usize) -> Result<Vec<Disk>> {
  let file = File::open(path)?;
  parse_disks(BufReader::new(file), group, &path.display().to_string())
}

/// Parse disk records from any buffered reader; `source` only labels
/// errors and log lines.
///
/// Records are scanned as adjacent pairs: a disk is marked maximal when the
/// next record has a different center. The final record has no successor to
/// compare against and is discarded, matching the original loader.
pub fn parse_disks(reader: impl BufRead, group: usize, source: &str) -> Result<Vec<Disk>> {
  let parse_error = |line: usize, reason: String| Error::Parse {
    source: source.to_string(),
    line,
    reason
  };

  let mut lines = reader.lines().enumerate();

  let count = match lines.next() {
    Some((_, line)) => line?,
    None => return Err(parse_error(1, "missing record count".to_string())),
  };
  let count = count.trim_end_matches('\r');
  let count = count.parse::<i64>()
    .map_err(|_| parse_error(1, format!("invalid record count {:?}", count)))?;

  let mut disks: Vec<Disk> = vec![];
  let mut prev: Option<Disk> = None;
  let mut rows = 0usize;

  for (index, line) in lines {
    let line = line?;
    let next = parse_row(line.trim_end_matches('\r'), group)
      .map_err(|reason| parse_error(index + 1, reason))?;
    rows += 1;

    if let Some(mut current) = prev.take() {
      if next.center != current.center {
        current.maximal = true;
      }
      disks.push(current);
    }
    prev = Some(next);
  }

  log::debug!(
    "{}: {} row(s) declared {}, kept {} disk(s) for group {}",
    source, rows, count, disks.len(), group
  );
  Ok(disks)
}

fn parse_row(line: &str, group: usize) -> std::result::Result<Disk, String> {
  let field = |s: &str| s.parse::<i32>()
    .map_err(|_| format!("invalid integer {:?}", s));

  match line.split(',').collect::<Vec<_>>().as_slice() {
    [x, y, width, height] => Ok(Disk::from_bounding_box(
      Point2D::new(field(x)?, FLIP_SPAN - field(y)?),
      field(width)?,
      field(height)?,
      group
    )),
    fields => Err(format!("expected 4 fields, got {}", fields.len())),
  }
}
