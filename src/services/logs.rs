use crate::domain::errors::InputError;
use crate::domain::models::{
    ConfigHeader, DecisionLog, ProcessRecord, ProcessRun, ProposalFile, Value, ValueSet,
};
use anyhow::Context;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parses one space-separated line into a set. Trailing separators and
/// blank lines yield no values.
pub fn parse_value_line(path: &Path, line_no: usize, line: &str) -> Result<ValueSet, InputError> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<Value>().map_err(|_| InputError::InvalidValue {
                path: path.to_path_buf(),
                line: line_no,
                token: token.to_string(),
            })
        })
        .collect()
}

pub fn parse_header(path: &Path, line: &str) -> Result<ConfigHeader, InputError> {
    let malformed = || InputError::MalformedHeader {
        path: path.to_path_buf(),
        line: line.trim_end().to_string(),
    };
    let fields: Vec<&str> = line.split_whitespace().collect();
    let [proposals, max_length, values] = fields.as_slice() else {
        return Err(malformed());
    };
    Ok(ConfigHeader {
        proposals: proposals.parse().map_err(|_| malformed())?,
        max_length: max_length.parse().map_err(|_| malformed())?,
        values: values.parse().map_err(|_| malformed())?,
    })
}

fn open_lines(path: &Path) -> anyhow::Result<std::io::Lines<BufReader<File>>> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    Ok(BufReader::new(file).lines())
}

pub fn read_config(path: &Path) -> anyhow::Result<ProposalFile> {
    let mut lines = open_lines(path)?;
    let header_line = match lines.next() {
        Some(line) => line.with_context(|| format!("reading {}", path.display()))?,
        None => {
            return Err(InputError::MissingHeader {
                path: path.to_path_buf(),
            }
            .into())
        }
    };
    let header = parse_header(path, &header_line)?;

    let mut proposals = Vec::with_capacity(header.proposals);
    for (i, line) in lines.enumerate() {
        let line = line.with_context(|| format!("reading {}", path.display()))?;
        // header is line 1
        proposals.push(parse_value_line(path, i + 2, &line)?);
    }

    if proposals.len() != header.proposals {
        tracing::warn!(
            path = %path.display(),
            declared = header.proposals,
            found = proposals.len(),
            "config header disagrees with proposal count"
        );
    }

    Ok(ProposalFile {
        path: path.to_path_buf(),
        header,
        proposals,
    })
}

pub fn read_output(path: &Path) -> anyhow::Result<DecisionLog> {
    let mut decisions = Vec::new();
    for (i, line) in open_lines(path)?.enumerate() {
        let line = line.with_context(|| format!("reading {}", path.display()))?;
        decisions.push(parse_value_line(path, i + 1, &line)?);
    }
    Ok(DecisionLog {
        path: path.to_path_buf(),
        decisions,
    })
}

/// Checks that a process has one decision per proposal. Strict mode turns a
/// mismatch into an input error; tolerant mode only logs it.
pub fn align(
    proposals: &ProposalFile,
    decisions: &DecisionLog,
    allow_incomplete: bool,
) -> Result<(), InputError> {
    if proposals.proposals.len() == decisions.decisions.len() {
        return Ok(());
    }
    if allow_incomplete {
        tracing::warn!(
            config = %proposals.path.display(),
            output = %decisions.path.display(),
            proposals = proposals.proposals.len(),
            decisions = decisions.decisions.len(),
            "length mismatch tolerated, comparing common prefix"
        );
        return Ok(());
    }
    Err(InputError::LengthMismatch {
        config: proposals.path.clone(),
        output: decisions.path.clone(),
        proposals: proposals.proposals.len(),
        decisions: decisions.decisions.len(),
    })
}

pub fn load_process(record: &ProcessRecord, allow_incomplete: bool) -> anyhow::Result<ProcessRun> {
    let proposals = read_config(&record.config)?;
    let decisions = read_output(&record.output)?;
    align(&proposals, &decisions, allow_incomplete)?;
    tracing::debug!(
        process = record.index,
        rounds = decisions.decisions.len(),
        universe_size = proposals.header.values,
        "loaded process"
    );
    Ok(ProcessRun {
        record: record.clone(),
        proposals,
        decisions,
    })
}

pub fn load_processes(
    records: &[ProcessRecord],
    allow_incomplete: bool,
) -> anyhow::Result<Vec<ProcessRun>> {
    records
        .iter()
        .map(|r| load_process(r, allow_incomplete))
        .collect()
}
