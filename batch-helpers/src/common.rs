use ndarray::{ArrayD, Axis};
use crate::{array_split, Element};

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// A feature array together with the label array aligned to it.
///
/// F: The element type of the features (e.g., f32, u8 pixels).
/// L: The element type of the labels (e.g., i64 class ids).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
pub struct LabeledArrays<F, L>
where
    F: Element,
    L: Element,
{
    pub features: ArrayD<F>,
    pub labels: ArrayD<L>,
}

impl<F, L> LabeledArrays<F, L>
where
    F: Element,
    L: Element,
{
    pub fn new(features: ArrayD<F>, labels: ArrayD<L>) -> Self {
        LabeledArrays { features, labels }
    }

    /// Number of samples along the feature array's first axis.
    pub fn feature_samples(&self) -> usize {
        leading_len(&self.features)
    }

    /// Number of samples along the label array's first axis.
    pub fn label_samples(&self) -> usize {
        leading_len(&self.labels)
    }

    pub fn sample_counts_match(&self) -> bool {
        self.feature_samples() == self.label_samples()
    }

    /// Splits features and labels into `n` batches with the same boundaries.
    ///
    /// Both arrays go through [`array_split`], so batch `i` of the features and
    /// batch `i` of the labels cover the same sample indices as long as the two
    /// sample counts are equal. Callers are expected to check that first.
    pub fn split_batches(&self, n: usize) -> (Vec<ArrayD<F>>, Vec<ArrayD<L>>) {
        (array_split(&self.features, n), array_split(&self.labels, n))
    }

    pub fn into_parts(self) -> (ArrayD<F>, ArrayD<L>) {
        (self.features, self.labels)
    }
}

fn leading_len<T>(array: &ArrayD<T>) -> usize {
    if array.ndim() == 0 {
        0
    } else {
        array.len_of(Axis(0))
    }
}
