//! ActiveLearningLoop: drives one selection step at a time against a pool provider.

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use quarry_core::config::{InferenceParams, QuarryConfig};
use quarry_core::errors::{ConfigError, ProbabilityError, QuarryResult};
use quarry_core::models::{PoolView, UncertaintySnapshot};
use quarry_core::traits::{PoolProvider, ProbabilitySource, RankingHeuristic};
use quarry_observability::{ranking_span, scoring_span, snapshot_span, step_span};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::heuristics::RandomHeuristic;
use crate::sampling::{self, IndexMap};
use crate::snapshot;

/// The active learning loop.
///
/// Holds fixed configuration plus its three collaborators. `step()` keeps no
/// state of its own between calls apart from the subsampling generator; the
/// labelled/unlabelled partition lives in the provider. Not meant to be
/// stepped from several threads at once.
pub struct ActiveLearningLoop<D, P, H = RandomHeuristic>
where
    D: PoolProvider,
    P: ProbabilitySource<D::Sample>,
    H: RankingHeuristic,
{
    dataset: D,
    source: P,
    heuristic: H,
    params: InferenceParams,
    /// Samples labelled per step. Never zero, so a `true` step always labels.
    ndata_to_label: NonZeroUsize,
    /// Working-pool limit; `None` scores the whole pool.
    max_sample: Option<usize>,
    /// Destination of per-step uncertainty snapshots.
    uncertainty_folder: Option<PathBuf>,
    rng: StdRng,
}

impl<D, P, H> ActiveLearningLoop<D, P, H>
where
    D: PoolProvider,
    P: ProbabilitySource<D::Sample>,
    H: RankingHeuristic,
{
    /// Create a loop labelling one sample per step from the unlimited pool,
    /// without snapshots and with default inference parameters.
    pub fn new(dataset: D, source: P, heuristic: H) -> Self {
        Self {
            dataset,
            source,
            heuristic,
            params: InferenceParams::default(),
            ndata_to_label: NonZeroUsize::MIN,
            max_sample: None,
            uncertainty_folder: None,
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a loop from a configuration. The config is validated first.
    pub fn from_config(
        dataset: D,
        source: P,
        heuristic: H,
        config: &QuarryConfig,
    ) -> QuarryResult<Self> {
        QuarryConfig::validate(config)?;
        let active = &config.active;
        let ndata_to_label =
            NonZeroUsize::new(active.ndata_to_label).ok_or_else(|| ConfigError::ValidationFailed {
                field: "active.ndata_to_label".to_string(),
                message: "must be at least 1".to_string(),
            })?;
        let mut al_loop = Self::new(dataset, source, heuristic)
            .with_params(config.inference.clone())
            .with_ndata_to_label(ndata_to_label)
            .with_max_sample(active.max_sample_limit());
        if let Some(folder) = &active.uncertainty_folder {
            al_loop = al_loop.with_uncertainty_folder(folder);
        }
        if let Some(seed) = active.seed {
            al_loop = al_loop.with_seed(seed);
        }
        Ok(al_loop)
    }

    /// Number of top-ranked samples labelled per step.
    pub fn with_ndata_to_label(mut self, ndata_to_label: NonZeroUsize) -> Self {
        self.ndata_to_label = ndata_to_label;
        self
    }

    /// Limit the working pool; `None` scores the whole pool every step.
    pub fn with_max_sample(mut self, max_sample: Option<usize>) -> Self {
        self.max_sample = max_sample;
        self
    }

    /// Write one uncertainty snapshot per step into `folder`, which must exist.
    /// An empty path disables snapshots.
    pub fn with_uncertainty_folder(mut self, folder: impl Into<PathBuf>) -> Self {
        let folder = folder.into();
        self.uncertainty_folder = (!folder.as_os_str().is_empty()).then_some(folder);
        self
    }

    /// Inference parameters forwarded to the probability source.
    pub fn with_params(mut self, params: InferenceParams) -> Self {
        self.params = params;
        self
    }

    /// Seed the subsampling generator.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// The pool provider.
    pub fn dataset(&self) -> &D {
        &self.dataset
    }

    /// Mutable access to the pool provider, e.g. to label outside the loop.
    pub fn dataset_mut(&mut self) -> &mut D {
        &mut self.dataset
    }

    /// Consume the loop, handing back the pool provider.
    pub fn into_dataset(self) -> D {
        self.dataset
    }

    /// The probability source.
    pub fn source(&self) -> &P {
        &self.source
    }

    /// The ranking heuristic.
    pub fn heuristic(&self) -> &H {
        &self.heuristic
    }

    /// Inference parameters forwarded on every step.
    pub fn params(&self) -> &InferenceParams {
        &self.params
    }

    /// Samples labelled per step.
    pub fn ndata_to_label(&self) -> usize {
        self.ndata_to_label.get()
    }

    /// Working-pool limit, `None` when unlimited.
    pub fn max_sample(&self) -> Option<usize> {
        self.max_sample
    }

    /// Snapshot destination, if snapshots are enabled.
    pub fn uncertainty_folder(&self) -> Option<&Path> {
        self.uncertainty_folder.as_deref()
    }

    /// Perform one active learning step.
    ///
    /// With `pool = None` the provider's current pool is used, subsampled to
    /// `max_sample`, and ranked indices are translated back to positions in
    /// that pool. An explicit `pool` is scored whole and ranked indices are
    /// passed to `label` untranslated.
    ///
    /// Returns `Ok(true)` when samples were labelled, `Ok(false)` when there
    /// was nothing to do (empty pool, no probabilities, empty ranking).
    /// Collaborator errors are returned as-is.
    pub fn step(&mut self, pool: Option<&[D::Sample]>) -> QuarryResult<bool> {
        let span = step_span!(self.ndata_to_label.get(), self.max_sample);
        let _guard = span.enter();

        let provider_pool: Vec<D::Sample>;
        let (items, index_map) = match pool {
            Some(explicit) => (explicit, None),
            None => {
                provider_pool = self.dataset.pool();
                let map = sampling::limit_pool(&mut self.rng, provider_pool.len(), self.max_sample);
                (provider_pool.as_slice(), Some(map))
            }
        };

        let view = match index_map.as_ref().and_then(IndexMap::sampled) {
            Some(positions) => PoolView::subset(items, positions),
            None => PoolView::full(items),
        };
        if view.is_empty() {
            info!("pool exhausted, nothing to label");
            return Ok(false);
        }
        debug!(
            pool_size = items.len(),
            working_pool = view.len(),
            subsampled = view.is_subset(),
            "working pool resolved"
        );

        let probs = {
            let _scoring = scoring_span!(view.len()).entered();
            self.source.probabilities(&view, &self.params)?
        };
        let probs = match probs {
            Some(probs) if !probs.is_empty() => probs,
            _ => {
                info!("probability source returned no estimates");
                return Ok(false);
            }
        };
        if let Some(n_samples) = probs.n_samples_hint() {
            if n_samples != view.len() {
                return Err(ProbabilityError::ShapeMismatch {
                    expected: view.len(),
                    actual: n_samples,
                }
                .into());
            }
        }

        let mut ranking = {
            let _ranking = ranking_span!(probs.is_stream()).entered();
            let ranking = self.heuristic.rank(probs)?;
            ranking.validate()?;
            ranking
        };

        if let Some(map) = &index_map {
            ranking.to_label = map.translate(&ranking.to_label)?;
        }

        if let Some(folder) = &self.uncertainty_folder {
            let _snapshot = snapshot_span!(folder).entered();
            let record = UncertaintySnapshot {
                indices: index_map.as_ref().map(IndexMap::to_vec),
                uncertainty: ranking.uncertainty.clone(),
                dataset: self.dataset.state_dict()?,
            };
            snapshot::write_snapshot(folder, view.len(), self.dataset.n_labelled(), &record)?;
        }

        if ranking.is_empty() {
            info!("heuristic ranked no candidates");
            return Ok(false);
        }

        let selected = ranking.top(self.ndata_to_label.get());
        info!(
            labelled = selected.len(),
            candidates = ranking.len(),
            top = ?selected.first(),
            "labelling top candidates"
        );
        self.dataset.label(selected)?;
        Ok(true)
    }
}
