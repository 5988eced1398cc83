//! Chunked run-length-encoded label storage.
//!
//! Design
//! - The page's linear address range is cut into fixed-size chunks of
//!   [`CHUNK_SIZE`] positions. Each chunk owns a sorted list of runs
//!   `(start, end, value)` with bounds relative to the chunk, so offsets
//!   fit in `u16` regardless of raster size and any single lookup scans
//!   one bounded list instead of the whole page.
//! - Only non-zero spans are materialized. Any position not covered by a
//!   run reads as background, which is what makes sparse binary pages
//!   cheap.
//! - `set` keeps the per-chunk invariant after every mutation: runs sorted
//!   by start, non-overlapping, and no two positionally adjacent runs with
//!   equal value (those are merged on the spot).
//! - Runs never span or merge across chunk boundaries; the chunk is the
//!   invariant's scope.
//!
//! Writing background into a position no run covers is a true no-op.
//! Writing background inside a run shrinks, splits, or deletes that run.
//! Both go through the single `set` entry point.

use super::PixelStore;
use crate::types::{Label, BACKGROUND};

/// Positions covered by one chunk.
pub const CHUNK_SIZE: usize = 256;

/// Width of in-chunk run offsets; must cover `0..CHUNK_SIZE`.
type RunOffset = u16;

/// Maximal span of equal-valued positions, bounds relative to the owning
/// chunk and inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Run {
    start: RunOffset,
    end: RunOffset,
    value: Label,
}

#[derive(Clone, Debug, Default)]
struct Chunk {
    runs: Vec<Run>,
}

impl Chunk {
    /// Locate the run covering `rel`: `Ok(index)` of the covering run, or
    /// `Err(index)` where a run for `rel` would be inserted.
    fn find(&self, rel: RunOffset) -> Result<usize, usize> {
        self.runs.binary_search_by(|run| {
            if run.end < rel {
                std::cmp::Ordering::Less
            } else if run.start > rel {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
    }

    /// Remove position `rel` from the run at `index`, shrinking, deleting,
    /// or splitting it. `rel` must lie inside that run.
    fn carve(&mut self, index: usize, rel: RunOffset) {
        let run = self.runs[index];
        if run.start == run.end {
            self.runs.remove(index);
        } else if rel == run.start {
            self.runs[index].start = rel + 1;
        } else if rel == run.end {
            self.runs[index].end = rel - 1;
        } else {
            self.runs[index].end = rel - 1;
            self.runs.insert(
                index + 1,
                Run {
                    start: rel + 1,
                    end: run.end,
                    value: run.value,
                },
            );
        }
    }

    /// Insert a one-position run at `rel` (which must be uncovered) and
    /// merge it with equal-valued positional neighbors.
    fn insert_run(&mut self, rel: RunOffset, value: Label) {
        let index = match self.find(rel) {
            Err(index) => index,
            Ok(_) => unreachable!("insert_run called on a covered position"),
        };
        self.runs.insert(
            index,
            Run {
                start: rel,
                end: rel,
                value,
            },
        );
        self.merge_around(index);
    }

    /// Merge the run at `index` with its positional neighbors where the
    /// values match.
    fn merge_around(&mut self, index: usize) {
        if index + 1 < self.runs.len()
            && self.runs[index].value == self.runs[index + 1].value
            && self.runs[index].end + 1 == self.runs[index + 1].start
        {
            self.runs[index].end = self.runs[index + 1].end;
            self.runs.remove(index + 1);
        }
        if index > 0
            && self.runs[index - 1].value == self.runs[index].value
            && self.runs[index - 1].end + 1 == self.runs[index].start
        {
            self.runs[index - 1].end = self.runs[index].end;
            self.runs.remove(index);
        }
    }

    /// Drop coverage past `limit` (inclusive last valid position). Used
    /// when the store shrinks.
    fn trim_past(&mut self, limit: RunOffset) {
        self.runs.retain(|run| run.start <= limit);
        if let Some(last) = self.runs.last_mut() {
            if last.end > limit {
                last.end = limit;
            }
        }
    }
}

/// Run-length-encoded label store: a linear sequence of chunks plus the
/// page's logical size and geometry.
#[derive(Clone, Debug)]
pub struct RleStore {
    len: usize,
    nrows: usize,
    ncols: usize,
    stride: usize,
    page_offset_y: usize,
    page_offset_x: usize,
    chunks: Vec<Chunk>,
}

impl RleStore {
    /// Empty (all-background) page of `nrows x ncols` at page offset
    /// (0, 0).
    pub fn new(nrows: usize, ncols: usize) -> Self {
        Self::with_page_offset(nrows, ncols, 0, 0)
    }

    /// Empty page whose upper-left corner sits at
    /// (`page_offset_y`, `page_offset_x`) on the logical page.
    pub fn with_page_offset(
        nrows: usize,
        ncols: usize,
        page_offset_y: usize,
        page_offset_x: usize,
    ) -> Self {
        let len = nrows * ncols;
        Self {
            len,
            nrows,
            ncols,
            stride: ncols,
            page_offset_y,
            page_offset_x,
            chunks: vec![Chunk::default(); len.div_ceil(CHUNK_SIZE)],
        }
    }

    /// Total number of materialized runs, across all chunks. Compression
    /// diagnostic; a sparse page keeps this far below `len()`.
    pub fn run_count(&self) -> usize {
        self.chunks.iter().map(|chunk| chunk.runs.len()).sum()
    }

    /// Verify the per-chunk run invariant: sorted by start, in-range,
    /// non-overlapping, no materialized background, no unmerged
    /// equal-valued positional neighbors.
    pub(crate) fn check_run_invariants(&self) -> Result<(), String> {
        for (ci, chunk) in self.chunks.iter().enumerate() {
            let mut prev: Option<&Run> = None;
            for run in &chunk.runs {
                if run.start > run.end {
                    return Err(format!(
                        "chunk {ci}: inverted run [{}, {}]",
                        run.start, run.end
                    ));
                }
                if run.end as usize >= CHUNK_SIZE {
                    return Err(format!(
                        "chunk {ci}: run end {} outside chunk of {CHUNK_SIZE}",
                        run.end
                    ));
                }
                if run.value == BACKGROUND {
                    return Err(format!(
                        "chunk {ci}: background run materialized at [{}, {}]",
                        run.start, run.end
                    ));
                }
                if let Some(prev) = prev {
                    if prev.end >= run.start {
                        return Err(format!(
                            "chunk {ci}: runs [{}, {}] and [{}, {}] overlap or are unsorted",
                            prev.start, prev.end, run.start, run.end
                        ));
                    }
                    if prev.end + 1 == run.start && prev.value == run.value {
                        return Err(format!(
                            "chunk {ci}: unmerged adjacent runs of value {} at {}",
                            run.value, run.start
                        ));
                    }
                }
                prev = Some(run);
            }
        }
        Ok(())
    }
}

impl PixelStore for RleStore {
    fn get(&self, index: usize) -> Label {
        let chunk = &self.chunks[index / CHUNK_SIZE];
        let rel = (index % CHUNK_SIZE) as RunOffset;
        match chunk.find(rel) {
            Ok(i) => chunk.runs[i].value,
            Err(_) => BACKGROUND,
        }
    }

    fn set(&mut self, index: usize, value: Label) {
        let chunk = &mut self.chunks[index / CHUNK_SIZE];
        let rel = (index % CHUNK_SIZE) as RunOffset;
        match chunk.find(rel) {
            Ok(i) => {
                if chunk.runs[i].value == value {
                    return;
                }
                chunk.carve(i, rel);
                if value != BACKGROUND {
                    chunk.insert_run(rel, value);
                }
            }
            Err(i) => {
                if value == BACKGROUND {
                    // Nothing stored here; clearing stays a no-op.
                    return;
                }
                chunk.runs.insert(
                    i,
                    Run {
                        start: rel,
                        end: rel,
                        value,
                    },
                );
                chunk.merge_around(i);
            }
        }
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    fn resize(&mut self, new_len: usize) {
        let nchunks = new_len.div_ceil(CHUNK_SIZE);
        if new_len < self.len {
            self.chunks.truncate(nchunks);
            if new_len > 0 {
                if let Some(last) = self.chunks.last_mut() {
                    last.trim_past(((new_len - 1) % CHUNK_SIZE) as RunOffset);
                }
            }
        }
        self.chunks.resize_with(nchunks, Chunk::default);
        self.len = new_len;
        self.nrows = if self.stride == 0 {
            0
        } else {
            new_len / self.stride
        };
    }

    #[inline]
    fn nrows(&self) -> usize {
        self.nrows
    }

    #[inline]
    fn ncols(&self) -> usize {
        self.ncols
    }

    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    fn page_offset_y(&self) -> usize {
        self.page_offset_y
    }

    #[inline]
    fn page_offset_x(&self) -> usize {
        self.page_offset_x
    }
}
