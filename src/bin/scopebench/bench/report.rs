use std::fmt;

/// Outcome of a single benchmark run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub iterations: u32,
    pub start_ms: u64,
    pub end_ms: u64,
}

impl Report {
    pub fn elapsed_ms(&self) -> u64 {
        self.end_ms.saturating_sub(self.start_ms)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Time taken: {} ms", self.elapsed_ms())
    }
}
