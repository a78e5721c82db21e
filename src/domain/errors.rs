use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("{path}: missing header line")]
    MissingHeader { path: PathBuf },
    #[error("{path}: malformed header `{line}` (expected `<proposals> <max_length> <values>`)")]
    MalformedHeader { path: PathBuf, line: String },
    #[error("{path}:{line}: invalid value `{token}`")]
    InvalidValue {
        path: PathBuf,
        line: usize,
        token: String,
    },
    #[error(
        "{output} has {decisions} decision lines but {config} has {proposals} proposals \
         (pass --allow-incomplete to tolerate)"
    )]
    LengthMismatch {
        config: PathBuf,
        output: PathBuf,
        proposals: usize,
        decisions: usize,
    },
    #[error("got {configs} config paths but {outputs} output paths")]
    UnpairedPaths { configs: usize, outputs: usize },
    #[error("--{flag} must be at least 1")]
    InvalidParameter { flag: &'static str },
}
