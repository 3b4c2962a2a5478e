//! Load `.npy` training data as equal-parts batches and validation data as stored.
//!
//! This crate re-exports the workspace members so callers need a single dependency.

pub use batch_helpers::{array_split, batch_count, split_sizes, Element, LabeledArrays};
pub use npy_loaders::{
    load_training_data, load_training_data_default, load_validation_data, read_array, DataConfig,
    LoaderError, TrainingBatches, DEFAULT_BATCH_SIZE,
};
