// Loads the data under ./data and prints what the training loop would receive.
use npy_batch::{load_training_data, load_validation_data, DataConfig, LoaderError, DEFAULT_BATCH_SIZE};
use std::process::ExitCode;

fn run() -> Result<(), LoaderError> {
    let config = DataConfig::default();
    log::info!("reading data from {:?}", config);

    let batches = load_training_data::<f32, i64>(&config, DEFAULT_BATCH_SIZE)?;
    println!("Training: {} batches", batches.len());
    for (i, (features, labels)) in batches.pairs().enumerate() {
        println!("  batch {}: features {:?}, labels {:?}", i, features.shape(), labels.shape());
    }

    let validation = load_validation_data::<f32, i64>(&config)?;
    println!(
        "Validation: features {:?}, labels {:?}",
        validation.features.shape(),
        validation.labels.shape()
    );
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
