use batch_helpers::{batch_count, Element, LabeledArrays};
use ndarray::{ArrayD, Axis};

use crate::{read_array, DataConfig, LoaderError};

/// Batch size used by [`load_training_data_default`].
pub const DEFAULT_BATCH_SIZE: usize = 32;

/// Training features and labels split into matching batches.
///
/// Batch `i` of `features` and batch `i` of `labels` always hold the same
/// samples, and both vectors have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingBatches<F, L>
where
    F: Element,
    L: Element,
{
    pub features: Vec<ArrayD<F>>,
    pub labels: Vec<ArrayD<L>>,
}

impl<F, L> TrainingBatches<F, L>
where
    F: Element,
    L: Element,
{
    /// Number of batches.
    pub fn len(&self) -> usize {
        self.features.len()
    }

    pub fn is_empty(&self) -> bool {
        self.features.is_empty()
    }

    /// Number of samples in each batch, in order.
    pub fn batch_sizes(&self) -> Vec<usize> {
        self.features.iter().map(|b| b.len_of(Axis(0))).collect()
    }

    /// Iterates over `(features, labels)` for each batch.
    pub fn pairs(&self) -> impl Iterator<Item = (&ArrayD<F>, &ArrayD<L>)> {
        self.features.iter().zip(self.labels.iter())
    }

    pub fn into_parts(self) -> (Vec<ArrayD<F>>, Vec<ArrayD<L>>) {
        (self.features, self.labels)
    }
}

/// Loads the training arrays and splits them into batches.
///
/// The number of batches is `samples / batch_size` (rounded down), and the
/// samples are then spread over that many batches as evenly as possible: when
/// they do not divide evenly, the leading batches get one extra sample. So
/// 100 samples with a batch size of 32 give 3 batches of 34, 33 and 33.
///
/// # Arguments
///
/// * `config`: Where to find `training_features` and `training_labels`.
/// * `batch_size`: The target number of samples per batch. Must be greater than 0.
///
/// # Errors
///
/// Returns `LoaderError::InvalidBatchSize` if `batch_size` is 0. No file is read in that case.
/// Returns `LoaderError::Io`, `LoaderError::Format` or `LoaderError::ScalarArray` if either file cannot be read.
/// Returns `LoaderError::ShapeMismatch` if features and labels have different sample counts.
/// Returns `LoaderError::DegenerateBatching` if there are fewer samples than `batch_size`.
pub fn load_training_data<F, L>(
    config: &DataConfig,
    batch_size: usize,
) -> Result<TrainingBatches<F, L>, LoaderError>
where
    F: Element,
    L: Element,
{
    if batch_size == 0 {
        return Err(LoaderError::InvalidBatchSize);
    }

    let features = read_array::<F>(&config.training_features)?;
    let labels = read_array::<L>(&config.training_labels)?;
    let data = LabeledArrays::new(features, labels);

    if !data.sample_counts_match() {
        return Err(LoaderError::ShapeMismatch {
            features: data.feature_samples(),
            labels: data.label_samples(),
        });
    }

    let samples = data.feature_samples();
    let n = batch_count(samples, batch_size);
    if n == 0 {
        return Err(LoaderError::DegenerateBatching { samples, batch_size });
    }

    let (features, labels) = data.split_batches(n);
    log::info!(
        "loaded {} training samples as {} batches (batch size {})",
        samples,
        n,
        batch_size
    );

    Ok(TrainingBatches { features, labels })
}

/// [`load_training_data`] with [`DEFAULT_BATCH_SIZE`].
pub fn load_training_data_default<F, L>(
    config: &DataConfig,
) -> Result<TrainingBatches<F, L>, LoaderError>
where
    F: Element,
    L: Element,
{
    load_training_data(config, DEFAULT_BATCH_SIZE)
}
