//! Pool-size limiting and the index map back to original pool positions.

use quarry_core::errors::HeuristicError;
use rand::Rng;

/// Positions of the working pool within the provider's pool.
///
/// `Identity` when the whole pool is scored, `Sampled` when `max_sample`
/// restricted it; in both cases `original = map[local]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexMap {
    Identity(usize),
    Sampled(Vec<usize>),
}

impl IndexMap {
    /// Number of positions in the working pool.
    pub fn len(&self) -> usize {
        match self {
            Self::Identity(n) => *n,
            Self::Sampled(positions) => positions.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Original pool position of local index `local`.
    pub fn original(&self, local: usize) -> Option<usize> {
        match self {
            Self::Identity(n) => (local < *n).then_some(local),
            Self::Sampled(positions) => positions.get(local).copied(),
        }
    }

    /// Gather: `ranks[k]` becomes `map[ranks[k]]`, order preserved.
    pub fn translate(&self, ranks: &[usize]) -> Result<Vec<usize>, HeuristicError> {
        ranks
            .iter()
            .map(|&local| {
                self.original(local).ok_or(HeuristicError::RankOutOfRange {
                    index: local,
                    pool_size: self.len(),
                })
            })
            .collect()
    }

    /// Materialize as an explicit position list.
    pub fn to_vec(&self) -> Vec<usize> {
        match self {
            Self::Identity(n) => (0..*n).collect(),
            Self::Sampled(positions) => positions.clone(),
        }
    }

    /// Sampled positions, `None` for the identity.
    pub fn sampled(&self) -> Option<&[usize]> {
        match self {
            Self::Identity(_) => None,
            Self::Sampled(positions) => Some(positions),
        }
    }
}

/// Build the index map for a pool of `pool_len` samples.
///
/// With a limit below `pool_len`, draws `limit` distinct positions uniformly
/// without replacement; the draw order is the working-pool order.
pub fn limit_pool<R: Rng + ?Sized>(rng: &mut R, pool_len: usize, max_sample: Option<usize>) -> IndexMap {
    match max_sample {
        Some(limit) if limit < pool_len => {
            IndexMap::Sampled(rand::seq::index::sample(rng, pool_len, limit).into_vec())
        }
        _ => IndexMap::Identity(pool_len),
    }
}
