//! Error type for chromosome operations.

use thiserror::Error;

/// Errors reported by [`Chromosome`](super::Chromosome) operations and
/// [`ChromosomeConfig`](super::ChromosomeConfig) validation.
///
/// Every error is raised before the receiver is touched, so a failed call
/// leaves the chromosome exactly as it was.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChromosomeError {
    /// `decode` was called before a decoder was assigned.
    #[error("decoder not set")]
    DecoderNotSet,

    /// Crossover parents have different genome lengths.
    #[error("parent size mismatch: {left} vs {right}")]
    SizeMismatch { left: usize, right: usize },

    /// Masked-uniform crossover was requested without a mask.
    #[error("mask not set")]
    MaskNotSet,

    /// The crossover mask does not cover the genome.
    #[error("mask length mismatch: expected {expected}, got {actual}")]
    MaskLengthMismatch { expected: usize, actual: usize },

    /// A probability outside `[0, 1]` (or NaN).
    #[error("probability must be within [0, 1], got {0}")]
    InvalidProbability(f64),

    /// A gene value other than 0 or 1.
    #[error("invalid gene {value} at position {index}: genes must be 0 or 1")]
    InvalidGene { index: usize, value: u8 },

    /// A configuration parameter is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ChromosomeError>;
