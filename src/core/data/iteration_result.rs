/// Outcome of running an escape-time recurrence for one point.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IterationResult {
    /// The orbit left the escape radius after this many completed steps.
    Escaped(u32),
    /// The iteration cap was reached; the point is treated as inside the set.
    Unbounded,
}

impl IterationResult {
    /// `None` for points treated as inside the set.
    #[must_use]
    pub fn escape_count(&self) -> Option<u32> {
        match self {
            Self::Escaped(iterations) => Some(*iterations),
            Self::Unbounded => None,
        }
    }
}
