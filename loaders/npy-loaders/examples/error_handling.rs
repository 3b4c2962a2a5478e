//! Example demonstrating how the loaders report failures.
//!
//! Each case writes its own fixture files into a temporary directory, so the
//! example runs anywhere without a prepared `./data` directory.

use ndarray::{Array1, Array2};
use ndarray_npy::write_npy;
use npy_loaders::{load_training_data, load_validation_data, DataConfig, LoaderError};

fn write_training(config: &DataConfig, features: usize, labels: usize) {
    write_npy(&config.training_features, &Array2::<f32>::zeros((features, 8))).unwrap();
    write_npy(&config.training_labels, &Array1::<i64>::zeros(labels)).unwrap();
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    println!("Data Loader Error Handling Examples");
    println!("===================================");

    let dir = tempfile::tempdir().unwrap();
    let config = DataConfig::in_dir(dir.path());

    // Example 1: Missing files
    println!("\n1. Handling missing files:");
    match load_training_data::<f32, i64>(&config, 32) {
        Ok(_) => println!("   Loaded unexpectedly"),
        Err(e) if e.is_not_found() => println!("   ✓ Caught expected error: {}", e),
        Err(e) => println!("   ✗ Unexpected error: {}", e),
    }

    // Example 2: Invalid batch size
    println!("\n2. Handling a batch size of 0:");
    write_training(&config, 100, 100);
    match load_training_data::<f32, i64>(&config, 0) {
        Ok(_) => println!("   Loaded unexpectedly"),
        Err(LoaderError::InvalidBatchSize) => {
            println!("   ✓ Caught expected error: {}", LoaderError::InvalidBatchSize)
        }
        Err(e) => println!("   ✗ Unexpected error: {}", e),
    }

    // Example 3: Successful load
    println!("\n3. Successful load with batch size 32:");
    match load_training_data::<f32, i64>(&config, 32) {
        Ok(batches) => println!("   ✓ {} batches of sizes {:?}", batches.len(), batches.batch_sizes()),
        Err(e) => println!("   ✗ Loading failed: {}", e),
    }

    // Example 4: Too few samples for one batch
    println!("\n4. Handling fewer samples than the batch size:");
    write_training(&config, 10, 10);
    match load_training_data::<f32, i64>(&config, 32) {
        Ok(_) => println!("   Loaded unexpectedly"),
        Err(e @ LoaderError::DegenerateBatching { .. }) => println!("   ✓ Caught expected error: {}", e),
        Err(e) => println!("   ✗ Unexpected error: {}", e),
    }

    // Example 5: Misaligned features and labels
    println!("\n5. Handling mismatched sample counts:");
    write_training(&config, 64, 60);
    match load_training_data::<f32, i64>(&config, 32) {
        Ok(_) => println!("   Loaded unexpectedly"),
        Err(e @ LoaderError::ShapeMismatch { .. }) => println!("   ✓ Caught expected error: {}", e),
        Err(e) => println!("   ✗ Unexpected error: {}", e),
    }

    // Example 6: Wrong element type
    println!("\n6. Reading labels stored as i64 with the wrong element type:");
    write_training(&config, 64, 64);
    match load_training_data::<f32, f32>(&config, 32) {
        Ok(_) => println!("   Loaded unexpectedly"),
        Err(e @ LoaderError::Format { .. }) => println!("   ✓ Caught expected error: {}", e),
        Err(e) => println!("   ✗ Unexpected error: {}", e),
    }

    // Example 7: Error propagation in a function
    println!("\n7. Error propagation in functions:");

    fn count_validation_samples(config: &DataConfig) -> Result<usize, LoaderError> {
        let data = load_validation_data::<f32, i64>(config)?;
        Ok(data.feature_samples())
    }

    match count_validation_samples(&config) {
        Ok(n) => println!("   Validation samples: {}", n),
        Err(e) => println!("   ✓ Propagated error: {}", e),
    }

    println!("\nAll examples completed!");
}
