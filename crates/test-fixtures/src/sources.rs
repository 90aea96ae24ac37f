use ndarray::Array3;
use quarry_core::config::InferenceParams;
use quarry_core::errors::{ProbabilityError, QuarryResult};
use quarry_core::models::{PoolView, ProbabilityChunk, ProbabilityResult};
use quarry_core::traits::ProbabilitySource;

/// What a [`ScriptedSource`] answers with.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceMode {
    /// Dense zeros of shape `[pool, outputs, iterations]`.
    Dense,
    /// The same zeros, streamed in chunks of at most `chunk_size` samples.
    Stream { chunk_size: usize },
    /// `Ok(None)`.
    Nothing,
    /// Dense array with zero samples.
    Empty,
    /// Dense array with the given sample count, whatever the pool size.
    WrongShape(usize),
    /// `Err(InferenceFailed)`.
    Fail,
}

/// Probability source that records every call and answers per its mode.
#[derive(Debug, Clone)]
pub struct ScriptedSource<T> {
    mode: SourceMode,
    n_outputs: usize,
    calls: Vec<Vec<T>>,
    params: Vec<InferenceParams>,
}

impl<T: Clone> ScriptedSource<T> {
    pub fn new(mode: SourceMode) -> Self {
        Self {
            mode,
            n_outputs: 2,
            calls: Vec::new(),
            params: Vec::new(),
        }
    }

    /// Working pools received, one entry per call.
    pub fn calls(&self) -> &[Vec<T>] {
        &self.calls
    }

    /// Parameters received, one entry per call.
    pub fn params_seen(&self) -> &[InferenceParams] {
        &self.params
    }

    fn zeros(&self, n_samples: usize, params: &InferenceParams) -> ProbabilityChunk {
        Array3::zeros((n_samples, self.n_outputs, params.iterations))
    }
}

impl<T: Clone> ProbabilitySource<T> for ScriptedSource<T> {
    fn probabilities(
        &mut self,
        pool: &PoolView<'_, T>,
        params: &InferenceParams,
    ) -> QuarryResult<Option<ProbabilityResult>> {
        self.calls.push(pool.to_vec());
        self.params.push(params.clone());

        let n = pool.len();
        match self.mode.clone() {
            SourceMode::Dense => Ok(Some(ProbabilityResult::Dense(self.zeros(n, params)))),
            SourceMode::Stream { chunk_size } => {
                let step = chunk_size.max(1);
                let chunks: Vec<QuarryResult<ProbabilityChunk>> = (0..n)
                    .step_by(step)
                    .map(|start| Ok(self.zeros(step.min(n - start), params)))
                    .collect();
                Ok(Some(ProbabilityResult::stream(chunks)))
            }
            SourceMode::Nothing => Ok(None),
            SourceMode::Empty => Ok(Some(ProbabilityResult::Dense(self.zeros(0, params)))),
            SourceMode::WrongShape(rows) => {
                Ok(Some(ProbabilityResult::Dense(self.zeros(rows, params))))
            }
            SourceMode::Fail => Err(ProbabilityError::InferenceFailed {
                reason: "scripted failure".to_string(),
            }
            .into()),
        }
    }
}

/// Source for pools of `f64` samples where each sample *is* its uncertainty:
/// every entry of row `i` equals the `i`-th working-pool sample.
#[derive(Debug, Clone, Default)]
pub struct ValueSource {
    calls: Vec<Vec<f64>>,
}

impl ValueSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Working pools received, one entry per call.
    pub fn calls(&self) -> &[Vec<f64>] {
        &self.calls
    }
}

impl ProbabilitySource<f64> for ValueSource {
    fn probabilities(
        &mut self,
        pool: &PoolView<'_, f64>,
        params: &InferenceParams,
    ) -> QuarryResult<Option<ProbabilityResult>> {
        let values = pool.to_vec();
        self.calls.push(values.clone());
        let probs = Array3::from_shape_fn((values.len(), 1, params.iterations), |(i, _, _)| {
            values[i]
        });
        Ok(Some(ProbabilityResult::Dense(probs)))
    }
}
