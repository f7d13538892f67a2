use super::Slot;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ScopeError {
    #[error("Undefined variable: {0}")]
    Undefined(String),
    #[error("Scope has no ancestor at distance {distance} (depth is {depth})")]
    NoAncestor { distance: usize, depth: usize },
    #[error("No binding at slot {} of scope at distance {}", .0.index, .0.distance)]
    NoSlot(Slot),
}
