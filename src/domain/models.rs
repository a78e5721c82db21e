use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::path::PathBuf;

pub type Value = u32;
pub type ValueSet = BTreeSet<Value>;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// First line of a config file: `<proposals> <max_length> <values>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfigHeader {
    pub proposals: usize,
    pub max_length: usize,
    pub values: u32,
}

#[derive(Debug, Clone)]
pub struct ProposalFile {
    pub path: PathBuf,
    pub header: ConfigHeader,
    pub proposals: Vec<ValueSet>,
}

#[derive(Debug, Clone)]
pub struct DecisionLog {
    pub path: PathBuf,
    pub decisions: Vec<ValueSet>,
}

/// Paired config/output paths for process `index` (1-based).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessRecord {
    pub index: usize,
    pub config: PathBuf,
    pub output: PathBuf,
}

/// A process whose config and output have been loaded and aligned.
#[derive(Debug, Clone)]
pub struct ProcessRun {
    pub record: ProcessRecord,
    pub proposals: ProposalFile,
    pub decisions: DecisionLog,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Property {
    /// Every proposed value appears in the decision of the same round.
    Validity,
    /// Every decided value was proposed by some process.
    UniverseContainment,
    /// Same-round decisions of any two processes are ordered by inclusion.
    ChainConsistency,
}

impl Property {
    pub fn as_str(&self) -> &'static str {
        match self {
            Property::Validity => "validity",
            Property::UniverseContainment => "universe containment",
            Property::ChainConsistency => "chain consistency",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub property: Property,
    /// Config file for validity, output file otherwise.
    pub subject: String,
    /// Paired output for validity, the other output for consistency.
    pub against: Option<String>,
    /// 1-based round index.
    pub round: usize,
    /// Values that broke the property (missing, foreign, or the symmetric difference).
    pub values: Vec<Value>,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Passed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub verdict: Verdict,
    pub processes: usize,
    pub comparisons: usize,
    pub violations: Vec<Violation>,
}

impl CheckReport {
    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Passed
    }
}

/// One comparison about to run; handed to the progress callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub property: Property,
    pub subject: String,
    pub against: String,
    pub step: usize,
    pub total: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
    pub directory: String,
    pub files: Vec<String>,
    pub proposals: usize,
    pub max_length: usize,
    pub values: u32,
}
