/// Failures of the region activation controller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActivationError {
    #[error("region index {index} is out of range for {len} regions")]
    InvalidIndex { index: usize, len: usize },
    #[error("activation needs at least one region")]
    NoRegions,
}

/// Problems with the embedded module catalogue.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("module catalogue is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("module catalogue is empty")]
    Empty,
    #[error("module at position {position} has id {found}, expected {expected}")]
    UnexpectedId {
        position: usize,
        expected: u32,
        found: u32,
    },
    #[error("module {0} lists no features")]
    NoFeatures(u32),
}
