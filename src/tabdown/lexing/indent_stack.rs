//! Stack of open indentation steps
//!
//!     Each entry is the size, in units, of the indent step taken at that nesting depth, not
//!     the absolute depth. The running total of all entries is the current absolute depth and
//!     is kept alongside the entries so comparing a line against it is constant time.

/// Open indentation steps with their memoized sum.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndentStack {
    steps: Vec<usize>,
    total: usize,
}

impl IndentStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a new level `step` units deeper than the current one.
    pub fn push(&mut self, step: usize) {
        self.steps.push(step);
        self.total += step;
    }

    /// Close the innermost level, returning its step.
    pub fn pop(&mut self) -> Option<usize> {
        let step = self.steps.pop()?;
        self.total -= step;
        Some(step)
    }

    /// Absolute depth in units.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of open levels.
    pub fn depth(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Pop levels until the total is at most `target`, returning the popped steps innermost
    /// first. The caller decides whether landing below `target` is an error.
    pub fn unwind_to(&mut self, target: usize) -> Vec<usize> {
        let mut popped = Vec::new();
        while self.total > target {
            match self.pop() {
                Some(step) => popped.push(step),
                None => break,
            }
        }
        popped
    }
}
