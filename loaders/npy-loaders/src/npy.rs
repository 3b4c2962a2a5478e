use batch_helpers::Element;
use ndarray::ArrayD;
use ndarray_npy::ReadNpyExt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::LoaderError;

/// Reads an array of any dimensionality from a `.npy` file.
///
/// The file's dtype must match `T`. Zero-dimensional arrays are rejected since
/// every loader needs a sample axis.
///
/// # Errors
///
/// Returns `LoaderError::Io` if the file cannot be opened.
/// Returns `LoaderError::Format` if the header or data cannot be decoded as `T`.
/// Returns `LoaderError::ScalarArray` if the stored array has no axes.
pub fn read_array<T: Element>(path: &Path) -> Result<ArrayD<T>, LoaderError> {
    let file = File::open(path).map_err(|source| LoaderError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let array = ArrayD::<T>::read_npy(BufReader::new(file)).map_err(|source| {
        LoaderError::Format {
            path: path.to_path_buf(),
            source,
        }
    })?;

    if array.ndim() == 0 {
        return Err(LoaderError::ScalarArray {
            path: path.to_path_buf(),
        });
    }

    log::debug!("read {} with shape {:?}", path.display(), array.shape());
    Ok(array)
}
