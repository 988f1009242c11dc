use thiserror::Error;

/// Reason an axis ordering (or its textual specifier) was rejected.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderingError {
    #[error("malformed token '{token}' at position {position}")]
    MalformedToken { position: usize, token: String },

    #[error("incorrect number of axes (expected {expected}, found {found})")]
    WrongTokenCount { expected: usize, found: usize },

    #[error("axis ordering {value} at position {position} out of range for {ndim} dimensions")]
    OutOfRangeAxis { position: usize, value: isize, ndim: usize },

    #[error("duplicate axis ordering ({magnitude}) at positions {first} and {second}")]
    DuplicateAxis { magnitude: usize, first: usize, second: usize },

    /// A per-axis list (sizes, spacings, labels) doesn't have one entry per axis.
    #[error("per-axis metadata has {found} entries, expected {expected}")]
    MetadataLength { expected: usize, found: usize },
}

/// Failure to parse an axes specifier. Carries the offending text alongside the cause.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid axes specification \"{specifier}\": {kind}")]
pub struct ParseError {
    pub specifier: String,
    #[source]
    pub kind: OrderingError,
}

impl ParseError {
    pub fn new<S: Into<String>>(specifier: S, kind: OrderingError) -> Self {
        Self { specifier: specifier.into(), kind }
    }

    pub fn kind(&self) -> &OrderingError { &self.kind }
}
