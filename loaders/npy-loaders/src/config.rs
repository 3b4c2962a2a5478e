use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Directory the default configuration reads from, relative to the working directory.
pub const DATA_DIR: &str = "./data";

pub const TRAINING_FEATURES_FILE: &str = "training_data.npy";
pub const TRAINING_LABELS_FILE: &str = "training_labels.npy";
pub const VALIDATION_FEATURES_FILE: &str = "val_data.npy";
pub const VALIDATION_LABELS_FILE: &str = "val_labels.npy";

/// Locations of the four `.npy` files the loaders read.
///
/// Relative paths are resolved against the process working directory when a
/// loader is called, not when the configuration is built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct DataConfig {
    pub training_features: PathBuf,
    pub training_labels: PathBuf,
    pub validation_features: PathBuf,
    pub validation_labels: PathBuf,
}

impl DataConfig {
    /// Uses the standard file names inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        let dir = dir.as_ref();
        Self {
            training_features: dir.join(TRAINING_FEATURES_FILE),
            training_labels: dir.join(TRAINING_LABELS_FILE),
            validation_features: dir.join(VALIDATION_FEATURES_FILE),
            validation_labels: dir.join(VALIDATION_LABELS_FILE),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        Self::in_dir(DATA_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths() {
        let config = DataConfig::default();
        assert_eq!(config.training_features, PathBuf::from("./data/training_data.npy"));
        assert_eq!(config.training_labels, PathBuf::from("./data/training_labels.npy"));
        assert_eq!(config.validation_features, PathBuf::from("./data/val_data.npy"));
        assert_eq!(config.validation_labels, PathBuf::from("./data/val_labels.npy"));
    }

    #[test]
    fn test_in_dir() {
        let config = DataConfig::in_dir("/tmp/run-7");
        assert_eq!(config.training_features, Path::new("/tmp/run-7").join("training_data.npy"));
        assert_eq!(config.validation_labels, Path::new("/tmp/run-7").join("val_labels.npy"));
        assert_ne!(config, DataConfig::default());
    }
}
