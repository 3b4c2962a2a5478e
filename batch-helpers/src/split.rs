//! Equal-parts splitting along the sample axis.
//!
//! The remainder policy matches NumPy's `array_split`: when `total` is not a
//! multiple of `n`, the first `total % n` parts are one sample longer than the
//! rest. For example 100 samples in 3 parts gives `[34, 33, 33]`.

use ndarray::{Array, ArrayBase, Axis, Data, Dimension, Slice};

/// Number of whole batches of `batch_size` that fit into `total` samples.
///
/// Returns 0 when `batch_size` is 0 or larger than `total`.
pub fn batch_count(total: usize, batch_size: usize) -> usize {
    if batch_size == 0 {
        return 0;
    }
    total / batch_size
}

/// Sizes of the `n` parts `total` samples are split into.
///
/// The leading `total % n` parts absorb the remainder. An `n` of 0 yields no parts.
pub fn split_sizes(total: usize, n: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }
    let base = total / n;
    let extra = total % n;
    (0..n).map(|i| if i < extra { base + 1 } else { base }).collect()
}

/// Splits `array` along its first axis into `n` contiguous, owned parts.
///
/// Part sizes follow [`split_sizes`]. Concatenating the parts in order gives
/// back the input.
///
/// # Panics
///
/// Panics if `array` is zero-dimensional, since it has no axis to split along.
pub fn array_split<S, D>(array: &ArrayBase<S, D>, n: usize) -> Vec<Array<S::Elem, D>>
where
    S: Data,
    S::Elem: Clone,
    D: Dimension,
{
    let total = array.len_of(Axis(0));
    if n > 0 && total % n != 0 {
        log::debug!(
            "splitting {} samples into {} parts: first {} hold {}, rest hold {}",
            total,
            n,
            total % n,
            total / n + 1,
            total / n
        );
    }

    let mut start = 0;
    split_sizes(total, n)
        .into_iter()
        .map(|size| {
            let end = start + size;
            let part = array.slice_axis(Axis(0), Slice::from(start..end)).to_owned();
            start = end;
            part
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, concatenate, Array2, Array3};
    use ndarray_rand::rand::SeedableRng;
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;
    use rand_xoshiro::Xoshiro256Plus;

    #[test]
    fn test_batch_count() {
        assert_eq!(batch_count(100, 32), 3);
        assert_eq!(batch_count(32, 32), 1);
        assert_eq!(batch_count(10, 32), 0);
        assert_eq!(batch_count(10, 0), 0);
    }

    #[test]
    fn test_split_sizes_leading_parts_take_remainder() {
        assert_eq!(split_sizes(100, 3), vec![34, 33, 33]);
        assert_eq!(split_sizes(10, 4), vec![3, 3, 2, 2]);
        assert_eq!(split_sizes(32, 1), vec![32]);
        assert_eq!(split_sizes(12, 4), vec![3, 3, 3, 3]);
    }

    #[test]
    fn test_split_sizes_edge_cases() {
        assert!(split_sizes(10, 0).is_empty());
        // More parts than samples leaves trailing parts empty.
        assert_eq!(split_sizes(2, 4), vec![1, 1, 0, 0]);
        assert_eq!(split_sizes(0, 2), vec![0, 0]);
    }

    #[test]
    fn test_array_split_one_dimensional() {
        let a = array![0, 1, 2, 3, 4, 5, 6];
        let parts = array_split(&a, 3);
        assert_eq!(parts, vec![array![0, 1, 2], array![3, 4], array![5, 6]]);
    }

    #[test]
    fn test_array_split_zero_parts() {
        let a = array![[1.0, 2.0], [3.0, 4.0]];
        assert!(array_split(&a, 0).is_empty());
    }

    #[test]
    fn test_array_split_keeps_trailing_shape() {
        let a = Array3::<u8>::zeros((10, 4, 4));
        let parts = array_split(&a, 3);
        let shapes: Vec<_> = parts.iter().map(|p| p.shape().to_vec()).collect();
        assert_eq!(shapes, vec![vec![4, 4, 4], vec![3, 4, 4], vec![3, 4, 4]]);
    }

    #[test]
    fn test_array_split_round_trip() {
        let mut rng = Xoshiro256Plus::seed_from_u64(42);
        let a: Array2<f64> = Array2::random_using((101, 5), Uniform::new(-1.0, 1.0), &mut rng);

        let parts = array_split(&a, 7);
        assert_eq!(parts.len(), 7);

        let views: Vec<_> = parts.iter().map(|p| p.view()).collect();
        let joined = concatenate(Axis(0), &views).unwrap();
        assert_abs_diff_eq!(joined, a, epsilon = 0.0);
    }

    #[test]
    fn test_array_split_parts_are_owned_copies() {
        let a = array![1, 2, 3, 4];
        let mut parts = array_split(&a.view(), 2);
        parts[0][0] = 100;
        assert_eq!(a[0], 1);
        assert_eq!(parts[1], array![3, 4]);
    }
}
