use std::path::Path;

use log::info;

use crate::{
    BatchError,
    config::Config,
    core::step::{Step, StepBuilder, StepResult, read_batch},
    item::{
        fake::{Person, PersonReaderBuilder, PhoneMode},
        json::JsonItemWriterBuilder,
    },
};

/// Generates `count` persons in memory, all or nothing.
pub fn generate_persons(
    count: usize,
    seed: Option<u64>,
    phone_mode: PhoneMode,
) -> Result<Vec<Person>, BatchError> {
    let reader = PersonReaderBuilder::new()
        .number_of_items(count)
        .seed(seed)
        .phone_mode(phone_mode)
        .build();

    read_batch(&reader)
}

/// Runs the CLI file export described by `config`.
pub fn generate_json_file(config: &Config) -> Result<StepResult, BatchError> {
    write_json_file(
        config.count,
        &config.output_path,
        config.seed,
        config.phone_mode,
    )
}

/// Generates `count` persons and writes them to `path` as an indented JSON array.
///
/// The file is only created once the whole batch has been generated, so a
/// failed run leaves any previous file untouched.
pub fn write_json_file(
    count: usize,
    path: &Path,
    seed: Option<u64>,
    phone_mode: PhoneMode,
) -> Result<StepResult, BatchError> {
    let reader = PersonReaderBuilder::new()
        .number_of_items(count)
        .seed(seed)
        .phone_mode(phone_mode)
        .build();

    let writer = JsonItemWriterBuilder::new().from_path(path);

    let step: Step<Person> = StepBuilder::new().reader(&reader).writer(&writer).build();
    let result = step.execute()?;

    info!(
        "Wrote {} records to {} in {:?}",
        result.write_count,
        path.display(),
        result.duration
    );
    Ok(result)
}
