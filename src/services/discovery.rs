use crate::domain::constants::{CONFIG_EXTENSION, OUTPUT_EXTENSION, PROCESS_FILE_PREFIX};
use crate::domain::errors::InputError;
use crate::domain::models::ProcessRecord;
use std::path::{Path, PathBuf};

/// `proc07.config`, `proc12.output`, ... (two-digit padding, wider past 99).
pub fn process_file_name(index: usize, extension: &str) -> String {
    format!("{PROCESS_FILE_PREFIX}{index:02}.{extension}")
}

pub fn discover_records(log_dir: &Path, processes: usize) -> Vec<ProcessRecord> {
    (1..=processes)
        .map(|index| ProcessRecord {
            index,
            config: log_dir.join(process_file_name(index, CONFIG_EXTENSION)),
            output: log_dir.join(process_file_name(index, OUTPUT_EXTENSION)),
        })
        .collect()
}

pub fn pair_records(
    configs: &[PathBuf],
    outputs: &[PathBuf],
) -> Result<Vec<ProcessRecord>, InputError> {
    if configs.len() != outputs.len() {
        return Err(InputError::UnpairedPaths {
            configs: configs.len(),
            outputs: outputs.len(),
        });
    }
    Ok(configs
        .iter()
        .zip(outputs)
        .enumerate()
        .map(|(i, (config, output))| ProcessRecord {
            index: i + 1,
            config: config.clone(),
            output: output.clone(),
        })
        .collect())
}
