//! Bounded k-nearest selection over a stream of catalog lines.

use core::cmp::Ordering;
use std::{
    borrow::Cow,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{Error, Point, Record, Result, SizedHeap};

/// A record paired with its squared distance to the query.
///
/// Neighbors are totally ordered by squared distance, then by id compared
/// byte-wise, then by position. The same order drives eviction from the heap
/// and the final sort, so the two can never disagree about which of two
/// equally distant records survives.
#[derive(Debug, Clone)]
pub struct Neighbor {
    /// Squared Euclidean distance to the query.
    squared_distance: f64,
    /// The record itself.
    record: Record,
}

impl Neighbor {
    /// Scores `record` against `query`.
    #[must_use]
    pub fn new(record: Record, query: &Point) -> Self {
        Self {
            squared_distance: record.squared_distance_to(query),
            record,
        }
    }

    /// The squared Euclidean distance to the query.
    #[must_use]
    pub const fn squared_distance(&self) -> f64 {
        self.squared_distance
    }

    /// The Euclidean distance to the query.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.squared_distance.sqrt()
    }

    /// The scored record.
    #[must_use]
    pub const fn record(&self) -> &Record {
        &self.record
    }

    /// Discards the score.
    #[must_use]
    pub fn into_record(self) -> Record {
        self.record
    }
}

impl PartialEq for Neighbor {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Neighbor {}

impl PartialOrd for Neighbor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Neighbor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.squared_distance
            .total_cmp(&other.squared_distance)
            .then_with(|| self.record.id().as_bytes().cmp(other.record.id().as_bytes()))
            .then_with(|| {
                self.record
                    .position()
                    .iter()
                    .zip(other.record.position())
                    .map(|(a, b)| a.total_cmp(b))
                    .find(|o| o.is_ne())
                    .unwrap_or(Ordering::Equal)
            })
    }
}

/// The working set of one selection.
struct Selector {
    /// The query point.
    query: Point,
    /// The nearest records seen so far.
    hits: SizedHeap<Neighbor>,
    /// How many valid records have been offered.
    scanned: usize,
}

impl Selector {
    /// Creates an empty selector for the `k` records nearest to `query`.
    fn new(query: Point, k: usize) -> Self {
        Self {
            query,
            hits: SizedHeap::new(k),
            scanned: 0,
        }
    }

    /// Parses and offers one line. Malformed lines are ignored.
    fn offer(&mut self, line: &str) {
        if let Some(record) = Record::parse(line) {
            self.scanned += 1;
            self.hits.push(Neighbor::new(record, &self.query));
        }
    }

    /// Returns the selected records, nearest first.
    fn finish(self) -> Vec<Neighbor> {
        let hits = self.hits.into_sorted_vec();
        ftlog::info!(
            "Selected {} of {} records nearest to {:?}",
            hits.len(),
            self.scanned,
            self.query
        );
        hits
    }
}

/// Selects the `k` records nearest to `query` from in-memory lines.
///
/// Lines that do not parse as `<id>,<x>,<y>,<z>` are skipped. The result is
/// sorted by distance to `query`, with ties broken by id.
pub fn select_lines_scored<I, S>(lines: I, query: Point, k: usize) -> Vec<Neighbor>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut selector = Selector::new(query, k);
    lines.into_iter().for_each(|line| selector.offer(line.as_ref()));
    selector.finish()
}

/// Like [`select_lines_scored`], but returns only the records.
pub fn select_lines<I, S>(lines: I, query: Point, k: usize) -> Vec<Record>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    into_records(select_lines_scored(lines, query, k))
}

/// Selects the `k` records nearest to `query`, streaming lines from `reader`.
///
/// Lines may end in `\n` or `\r\n`. Bytes that are not valid UTF-8 are
/// replaced rather than rejected, so they can only make a line malformed.
///
/// # Errors
///
/// - [`Error::Read`] if reading from `reader` fails. No partial result is
///   returned.
pub fn select_reader_scored<R: BufRead>(mut reader: R, query: Point, k: usize) -> Result<Vec<Neighbor>> {
    let mut selector = Selector::new(query, k);
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        selector.offer(&decode_line(&buf));
    }
    Ok(selector.finish())
}

/// Like [`select_reader_scored`], but returns only the records.
///
/// # Errors
///
/// See [`select_reader_scored`].
pub fn select_reader<R: BufRead>(reader: R, query: Point, k: usize) -> Result<Vec<Record>> {
    select_reader_scored(reader, query, k).map(into_records)
}

/// Selects the `k` records nearest to `query` from the catalog file at `path`.
///
/// # Errors
///
/// - [`Error::Open`] if the file cannot be opened.
/// - [`Error::Read`] if reading the file fails part way through.
pub fn select_file_scored<P: AsRef<Path>>(path: P, query: Point, k: usize) -> Result<Vec<Neighbor>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    ftlog::debug!("Reading catalog from {path:?}");
    select_reader_scored(BufReader::new(file), query, k)
}

/// Like [`select_file_scored`], but returns only the records.
///
/// # Errors
///
/// See [`select_file_scored`].
pub fn select_file<P: AsRef<Path>>(path: P, query: Point, k: usize) -> Result<Vec<Record>> {
    select_file_scored(path, query, k).map(into_records)
}

/// Drops the scores, keeping the order.
fn into_records(neighbors: Vec<Neighbor>) -> Vec<Record> {
    neighbors.into_iter().map(Neighbor::into_record).collect()
}

/// Strips the line terminator and decodes the rest.
fn decode_line(buf: &[u8]) -> Cow<'_, str> {
    let line = buf.strip_suffix(b"\n").unwrap_or(buf);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line)
}
