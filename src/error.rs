/// Recoverable failures of k-mer length selection, capped path
/// enumeration, and quality averaging.
///
/// Precondition violations, such as looking up a k-mer that was never
/// inserted, are not represented here; those panic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// No k in the requested range produced an acyclic graph from the
    /// reference sequence.
    #[error("no k-mer length in {min_k}..={max_k} gives an acyclic reference graph")]
    NoAcyclicKmerLength { min_k: usize, max_k: usize },

    /// Path enumeration allocated more path records than allowed.
    #[error("path enumeration exceeded the limit of {limit} path records")]
    RecordLimitExceeded { limit: usize },

    #[error("quality strings differ in length: expected {expected}, found {found}")]
    QualityLengthMismatch { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
