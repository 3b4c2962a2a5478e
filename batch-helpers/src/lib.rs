use ndarray_npy::ReadableElement;

use std::fmt::Debug;

// Include submodules
mod common;
mod split;

// Re-export types from submodules
pub use common::LabeledArrays;
pub use split::{array_split, batch_count, split_sizes};

/// Element types that can be read from a `.npy` file and batched.
///
/// The on-disk dtype tag has to match the implementing type exactly, e.g. a
/// file written from `float32` data can only be read as `f32`.
pub trait Element: ReadableElement + Clone + Debug + Send + Sync + 'static {}

impl Element for f32 {}
impl Element for f64 {}

impl Element for i8 {}
impl Element for i16 {}
impl Element for i32 {}
impl Element for i64 {}

impl Element for u8 {}
impl Element for u16 {}
impl Element for u32 {}
impl Element for u64 {}

impl Element for bool {}
