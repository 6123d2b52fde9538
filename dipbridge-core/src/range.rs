use std::fmt;

use crate::error::DipError;

/// A strided index range along one image dimension.
///
/// `stop` is the last index included, and negative `start` or `stop` count
/// from the end of the dimension (`-1` is the last index). A range with
/// `start > stop` runs backwards. The step is always positive; direction is
/// carried by the order of `start` and `stop` alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: isize,
    pub stop: isize,
    pub step: usize,
}

impl Default for Range {
    fn default() -> Self {
        Range::new()
    }
}

impl Range {
    /// The full range, `{0, -1, 1}`.
    pub fn new() -> Self {
        Range {
            start: 0,
            stop: -1,
            step: 1,
        }
    }

    /// A range selecting a single index.
    pub fn single(index: isize) -> Self {
        Range {
            start: index,
            stop: index,
            step: 1,
        }
    }

    /// # Errors
    /// Returns `DipError::InvalidRange` for a zero step.
    pub fn with_step(start: isize, stop: isize, step: usize) -> Result<Self, DipError> {
        if step == 0 {
            return Err(DipError::InvalidRange("step must be at least 1".to_string()));
        }
        Ok(Range { start, stop, step })
    }

    /// Resolves negative indices against `extent` and checks both ends.
    ///
    /// # Errors
    /// `DipError::IndexOutOfRange` if either end lies outside `[0, extent)`.
    pub fn fix(&mut self, extent: usize) -> Result<(), DipError> {
        let resolve = |index: isize| -> Result<isize, DipError> {
            let resolved = if index < 0 { index + extent as isize } else { index };
            if resolved < 0 || resolved >= extent as isize {
                return Err(DipError::IndexOutOfRange { index, extent });
            }
            Ok(resolved)
        };
        let start = resolve(self.start)?;
        let stop = resolve(self.stop)?;
        self.start = start;
        self.stop = stop;
        Ok(())
    }

    /// Number of indices visited. Only meaningful after `fix`.
    pub fn size(&self) -> usize {
        (self.start - self.stop).unsigned_abs() / self.step + 1
    }

    /// First index visited. Only meaningful after `fix`.
    pub fn offset(&self) -> usize {
        self.start.max(0) as usize
    }

    /// Last index actually visited, which differs from `stop` when the step
    /// does not divide the span. Only meaningful after `fix`.
    pub fn last(&self) -> usize {
        let travel = ((self.size() - 1) * self.step) as isize;
        let last = if self.is_reversed() {
            self.start - travel
        } else {
            self.start + travel
        };
        last.max(0) as usize
    }

    pub fn is_reversed(&self) -> bool {
        self.start > self.stop
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.start, self.stop, self.step)
    }
}

#[cfg(test)]
#[path = "range_test.rs"]
mod tests;
