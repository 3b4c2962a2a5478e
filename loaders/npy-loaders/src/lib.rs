//! Loaders that read training and validation arrays from NumPy `.npy` files.
//!
//! Training data comes back partitioned into equal-parts batches along the
//! sample axis, validation data comes back as stored. File locations are
//! passed in through a [`DataConfig`].
//!
//! ```no_run
//! use npy_loaders::{load_training_data, load_validation_data, DataConfig};
//!
//! let config = DataConfig::default();
//! let batches = load_training_data::<f32, i64>(&config, 32)?;
//! let validation = load_validation_data::<f32, i64>(&config)?;
//! println!("{} batches, {} validation samples", batches.len(), validation.feature_samples());
//! # Ok::<(), npy_loaders::LoaderError>(())
//! ```

mod config;
mod error;
mod npy;
mod training;
mod validation;

pub use batch_helpers::{Element, LabeledArrays};
pub use config::{
    DataConfig, DATA_DIR, TRAINING_FEATURES_FILE, TRAINING_LABELS_FILE, VALIDATION_FEATURES_FILE,
    VALIDATION_LABELS_FILE,
};
pub use error::LoaderError;
pub use npy::read_array;
pub use training::{
    load_training_data, load_training_data_default, TrainingBatches, DEFAULT_BATCH_SIZE,
};
pub use validation::load_validation_data;
