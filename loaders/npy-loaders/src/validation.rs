use batch_helpers::{Element, LabeledArrays};

use crate::{read_array, DataConfig, LoaderError};

/// Loads the validation features and labels exactly as stored.
///
/// Unlike [`load_training_data`](crate::load_training_data) the sample counts
/// are not required to match; a disagreement is only logged. Use
/// [`LabeledArrays::sample_counts_match`] to enforce it.
///
/// # Errors
///
/// Returns `LoaderError::Io`, `LoaderError::Format` or `LoaderError::ScalarArray`
/// if either file cannot be read.
pub fn load_validation_data<F, L>(config: &DataConfig) -> Result<LabeledArrays<F, L>, LoaderError>
where
    F: Element,
    L: Element,
{
    let features = read_array::<F>(&config.validation_features)?;
    let labels = read_array::<L>(&config.validation_labels)?;
    let data = LabeledArrays::new(features, labels);

    if !data.sample_counts_match() {
        log::warn!(
            "validation features have {} samples but labels have {}",
            data.feature_samples(),
            data.label_samples()
        );
    }
    log::info!("loaded {} validation samples", data.feature_samples());

    Ok(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn test_returns_arrays_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let config = DataConfig::in_dir(dir.path());
        fixtures::write(&config.validation_features, &fixtures::features(13));
        fixtures::write(&config.validation_labels, &fixtures::labels(13));

        let data = load_validation_data::<f32, i64>(&config).unwrap();
        assert_eq!(data.feature_samples(), 13);
        assert_eq!(data.label_samples(), 13);
        assert_eq!(data.features, fixtures::features(13));
        assert_eq!(data.labels, fixtures::labels(13));
    }

    #[test]
    fn test_does_not_read_training_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = DataConfig::in_dir(dir.path());
        fixtures::write(&config.training_features, &fixtures::features(4));
        fixtures::write(&config.training_labels, &fixtures::labels(4));

        let err = load_validation_data::<f32, i64>(&config).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_missing_labels_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = DataConfig::in_dir(dir.path());
        fixtures::write(&config.validation_features, &fixtures::features(4));

        let err = load_validation_data::<f32, i64>(&config).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_mismatched_counts_are_passed_through() {
        let dir = tempfile::tempdir().unwrap();
        let config = DataConfig::in_dir(dir.path());
        fixtures::write(&config.validation_features, &fixtures::features(5));
        fixtures::write(&config.validation_labels, &fixtures::labels(3));

        let data = load_validation_data::<f32, i64>(&config).unwrap();
        assert!(!data.sample_counts_match());
        assert_eq!(data.label_samples(), 3);
    }
}
