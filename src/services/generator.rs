use crate::domain::constants::CONFIG_EXTENSION;
use crate::domain::errors::InputError;
use crate::domain::models::{ConfigHeader, GenerateReport, Value};
use crate::services::discovery::process_file_name;
use anyhow::Context;
use rand::seq::index;
use rand::Rng;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy)]
pub struct GeneratorParams {
    pub processes: usize,
    pub proposals: usize,
    pub values: u32,
    pub max_length: usize,
}

impl GeneratorParams {
    /// Proposal lengths are capped by the universe size.
    pub fn effective_max_length(&self) -> usize {
        self.max_length.min(self.values as usize)
    }

    pub fn validate(&self) -> Result<(), InputError> {
        if self.values == 0 {
            return Err(InputError::InvalidParameter { flag: "values" });
        }
        if self.max_length == 0 {
            return Err(InputError::InvalidParameter { flag: "max-length" });
        }
        Ok(())
    }

    pub fn header(&self) -> ConfigHeader {
        ConfigHeader {
            proposals: self.proposals,
            max_length: self.effective_max_length(),
            values: self.values,
        }
    }
}

/// Draws between 1 and `max_length` distinct values from `[0, values)`.
/// Each proposal samples independently; cost depends on the length drawn.
pub fn generate_proposal<R: Rng>(rng: &mut R, values: u32, max_length: usize) -> Vec<Value> {
    let length = rng.random_range(1..=max_length);
    index::sample(rng, values as usize, length)
        .into_iter()
        .map(|i| i as Value)
        .collect()
}

fn write_config<R: Rng>(path: &Path, params: &GeneratorParams, rng: &mut R) -> anyhow::Result<()> {
    let header = params.header();
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut out = BufWriter::new(file);
    writeln!(out, "{} {} {}", header.proposals, header.max_length, header.values)?;
    for _ in 0..params.proposals {
        let proposal = generate_proposal(rng, params.values, header.max_length);
        let line: Vec<String> = proposal.iter().map(Value::to_string).collect();
        writeln!(out, "{}", line.join(" "))?;
    }
    out.flush().with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

/// Writes `procNN.config` for every process into `directory`.
pub fn write_configs<R: Rng>(
    directory: &Path,
    params: &GeneratorParams,
    rng: &mut R,
) -> anyhow::Result<GenerateReport> {
    params.validate()?;
    std::fs::create_dir_all(directory)
        .with_context(|| format!("creating {}", directory.display()))?;

    let mut files = Vec::with_capacity(params.processes);
    for index in 1..=params.processes {
        let path: PathBuf = directory.join(process_file_name(index, CONFIG_EXTENSION));
        write_config(&path, params, rng)?;
        tracing::info!(path = %path.display(), "wrote proposals");
        files.push(path.display().to_string());
    }

    Ok(GenerateReport {
        directory: directory.display().to_string(),
        files,
        proposals: params.proposals,
        max_length: params.effective_max_length(),
        values: params.values,
    })
}
