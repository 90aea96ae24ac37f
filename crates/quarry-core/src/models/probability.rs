//! Probability estimates produced by a probability source.
//!
//! Shape convention for every array: `[n_samples, n_outputs, n_iterations]`.

use std::fmt;

use ndarray::{Array3, Axis};

use crate::errors::QuarryResult;

/// One block of probability estimates.
pub type ProbabilityChunk = Array3<f64>;

/// Lazily produced, single-pass sequence of chunks. Each chunk may fail.
pub type ProbabilityStream = Box<dyn Iterator<Item = QuarryResult<ProbabilityChunk>>>;

/// Output of a probability source: a dense array, or a stream of chunks
/// whose concatenation along axis 0 is the dense array.
pub enum ProbabilityResult {
    Dense(ProbabilityChunk),
    Stream(ProbabilityStream),
}

impl ProbabilityResult {
    /// Wrap any iterator of chunks as a stream.
    pub fn stream<I>(chunks: I) -> Self
    where
        I: IntoIterator<Item = QuarryResult<ProbabilityChunk>>,
        I::IntoIter: 'static,
    {
        Self::Stream(Box::new(chunks.into_iter()))
    }

    /// True only for a dense result with no samples.
    ///
    /// A stream is never reported empty: finding out would consume it.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Dense(probs) => probs.len_of(Axis(0)) == 0,
            Self::Stream(_) => false,
        }
    }

    /// Sample count when known without consuming anything.
    pub fn n_samples_hint(&self) -> Option<usize> {
        match self {
            Self::Dense(probs) => Some(probs.len_of(Axis(0))),
            Self::Stream(_) => None,
        }
    }

    pub fn is_stream(&self) -> bool {
        matches!(self, Self::Stream(_))
    }

    /// View either form as a stream of chunks. A dense result yields one chunk.
    pub fn into_chunks(self) -> ProbabilityStream {
        match self {
            Self::Dense(probs) => Box::new(std::iter::once(Ok(probs))),
            Self::Stream(chunks) => chunks,
        }
    }
}

impl From<ProbabilityChunk> for ProbabilityResult {
    fn from(probs: ProbabilityChunk) -> Self {
        Self::Dense(probs)
    }
}

impl fmt::Debug for ProbabilityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dense(probs) => f.debug_tuple("Dense").field(&probs.shape()).finish(),
            Self::Stream(_) => f.write_str("Stream(..)"),
        }
    }
}
