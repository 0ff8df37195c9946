use crate::code::buffer::DynArray;
use crate::code::errors::{AccessResult, ErrorKind};


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LineRun {
    line: u32,
    run: u32,
}

/// Maps instruction offsets to originating source lines without storing
/// one line per byte: consecutive bytes from the same line share a single
/// run-length entry.
///
/// Should contain one recorded line for each byte in the associated
/// chunk's code buffer, and in the same order.
#[derive(Debug, Default, Clone)]
pub struct LineTable {
    runs: DynArray<LineRun>,
    count: usize,  // sum of all runs
}

impl LineTable {
    pub fn new() -> Self {
        Self {
            runs: DynArray::new(),
            count: 0,
        }
    }

    /// Number of instruction bytes recorded so far.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Records the source line for the next instruction byte. Offsets are
    /// implicit: each call covers the offset one past the previous call's.
    pub fn record(&mut self, line: u32) {
        match self.runs.last_mut() {
            Some(last) if last.line == line => {
                last.run += 1;
            },
            _ => { self.runs.push(LineRun { line, run: 1 }); }
        }
        self.count += 1;
    }

    /// Looks up the source line for the instruction byte at `offset`.
    pub fn line_for(&self, offset: usize) -> AccessResult<u32> {
        if offset >= self.count {
            return Err(ErrorKind::LineOutOfRange { offset, len: self.count }.into());
        }

        let mut remaining = offset;
        for entry in self.runs.as_slice() {
            if remaining < entry.run as usize {
                return Ok(entry.line);
            }
            remaining -= entry.run as usize;
        }

        // unreachable while count == sum of runs
        Err(ErrorKind::LineOutOfRange { offset, len: self.count }.into())
    }
}
