use quarry_core::errors::{ProviderError, QuarryResult};
use quarry_core::traits::PoolProvider;
use serde::{Deserialize, Serialize};

/// Labelling state captured into snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetState {
    pub labelled: Vec<bool>,
}

/// Dataset held in memory with a labelled mask.
///
/// The pool is the unlabelled samples in dataset order. `label` receives
/// pool positions and maps them back to dataset positions.
#[derive(Debug, Clone)]
pub struct InMemoryDataset<T> {
    samples: Vec<T>,
    labelled: Vec<bool>,
    label_calls: Vec<Vec<usize>>,
    fail_labelling: bool,
}

impl<T: Clone> InMemoryDataset<T> {
    /// Every sample unlabelled.
    pub fn new(samples: Vec<T>) -> Self {
        let labelled = vec![false; samples.len()];
        Self {
            samples,
            labelled,
            label_calls: Vec::new(),
            fail_labelling: false,
        }
    }

    /// The first `n_labelled` samples already labelled.
    pub fn with_labelled(samples: Vec<T>, n_labelled: usize) -> Self {
        let mut dataset = Self::new(samples);
        for flag in dataset.labelled.iter_mut().take(n_labelled) {
            *flag = true;
        }
        dataset
    }

    /// Make every subsequent `label` call fail.
    pub fn failing_labels(mut self) -> Self {
        self.fail_labelling = true;
        self
    }

    /// Dataset positions of the current pool, in pool order.
    pub fn pool_positions(&self) -> Vec<usize> {
        (0..self.samples.len())
            .filter(|&i| !self.labelled[i])
            .collect()
    }

    /// Pool positions exactly as passed to each `label` call.
    pub fn label_calls(&self) -> &[Vec<usize>] {
        &self.label_calls
    }

    /// Labelled samples, in dataset order.
    pub fn labelled_samples(&self) -> Vec<T> {
        self.samples
            .iter()
            .zip(&self.labelled)
            .filter(|(_, l)| **l)
            .map(|(s, _)| s.clone())
            .collect()
    }

    pub fn is_labelled(&self, dataset_index: usize) -> bool {
        self.labelled.get(dataset_index).copied().unwrap_or(false)
    }
}

impl<T: Clone> PoolProvider for InMemoryDataset<T> {
    type Sample = T;
    type State = DatasetState;

    fn pool(&self) -> Vec<T> {
        self.samples
            .iter()
            .zip(&self.labelled)
            .filter(|(_, l)| !**l)
            .map(|(s, _)| s.clone())
            .collect()
    }

    fn label(&mut self, indices: &[usize]) -> QuarryResult<()> {
        if self.fail_labelling {
            return Err(ProviderError::LabelFailed {
                reason: "oracle unavailable".to_string(),
            }
            .into());
        }
        let positions = self.pool_positions();
        let mut targets = Vec::with_capacity(indices.len());
        for &index in indices {
            let dataset_index = positions.get(index).copied().ok_or(
                ProviderError::IndexOutOfRange {
                    index,
                    pool_size: positions.len(),
                },
            )?;
            targets.push(dataset_index);
        }
        for dataset_index in targets {
            self.labelled[dataset_index] = true;
        }
        self.label_calls.push(indices.to_vec());
        Ok(())
    }

    fn state_dict(&self) -> QuarryResult<DatasetState> {
        Ok(DatasetState {
            labelled: self.labelled.clone(),
        })
    }

    fn n_labelled(&self) -> usize {
        self.labelled.iter().filter(|&&l| l).count()
    }
}
