#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub struct TestEnv {
    _tmp: TempDir,
    pub logs: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let logs = tmp.path().join("logs");
        fs::create_dir_all(&logs).expect("create log dir");
        Self { _tmp: tmp, logs }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("lattice-verify");
        cmd.env_remove("RUST_LOG");
        cmd
    }

    pub fn path(&self, name: &str) -> String {
        self.logs.join(name).to_str().expect("utf8 path").to_string()
    }

    /// Writes `procNN.config` and `procNN.output` the way a run leaves them:
    /// decision lines end with a trailing separator.
    pub fn write_process(&self, index: usize, proposals: &[&[u32]], decisions: &[&[u32]]) {
        let max_length = proposals.iter().map(|p| p.len()).max().unwrap_or(0);
        let universe = proposals
            .iter()
            .flat_map(|p| p.iter())
            .max()
            .map(|v| v + 1)
            .unwrap_or(0);
        let mut config = format!("{} {} {}\n", proposals.len(), max_length, universe);
        for p in proposals {
            config.push_str(&join(p, ""));
        }
        let mut output = String::new();
        for d in decisions {
            output.push_str(&join(d, " "));
        }
        fs::write(self.logs.join(format!("proc{index:02}.config")), config).expect("write config");
        fs::write(self.logs.join(format!("proc{index:02}.output")), output).expect("write output");
    }

    pub fn check(&self, processes: usize) -> Command {
        let mut cmd = self.cmd();
        cmd.args([
            "check",
            "--log-dir",
            self.logs.to_str().expect("utf8 path"),
        ])
            .arg("--processes")
            .arg(processes.to_string());
        cmd
    }

    /// Runs with `--json` and parses stdout regardless of exit status.
    pub fn run_json(&self, mut cmd: Command) -> (Option<i32>, Value) {
        let out = cmd.arg("--json").output().expect("run binary");
        let value = serde_json::from_slice(&out.stdout).expect("valid json output");
        (out.status.code(), value)
    }
}

fn join(values: &[u32], trailer: &str) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("{}{}\n", items.join(" "), trailer)
}
