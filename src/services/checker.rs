use crate::domain::models::{
    CheckReport, DecisionLog, ProcessRun, Progress, Property, ProposalFile, Value, ValueSet,
    Verdict, Violation,
};
use std::cmp::Ordering;
use std::ops::ControlFlow;
use std::path::Path;

fn label(path: &Path) -> String {
    path.display().to_string()
}

fn render(values: &ValueSet) -> String {
    let items: Vec<String> = values.iter().map(Value::to_string).collect();
    format!("{{{}}}", items.join(", "))
}

/// Proposed values of round `j` must all appear in the decision of round `j`.
pub fn check_validity(proposals: &ProposalFile, decisions: &DecisionLog) -> Result<(), Violation> {
    for (i, (proposed, decided)) in proposals
        .proposals
        .iter()
        .zip(&decisions.decisions)
        .enumerate()
    {
        let missing: Vec<Value> = proposed.difference(decided).copied().collect();
        if !missing.is_empty() {
            return Err(Violation {
                property: Property::Validity,
                subject: label(&proposals.path),
                against: Some(label(&decisions.path)),
                round: i + 1,
                message: format!(
                    "round {}: proposed {} not contained in decided {}",
                    i + 1,
                    render(proposed),
                    render(decided)
                ),
                values: missing,
            });
        }
    }
    Ok(())
}

/// Union of every value any process proposed in any round.
pub fn collect_universe<'a>(configs: impl IntoIterator<Item = &'a ProposalFile>) -> ValueSet {
    configs
        .into_iter()
        .flat_map(|c| c.proposals.iter().flatten().copied())
        .collect()
}

pub fn check_universe(decisions: &DecisionLog, universe: &ValueSet) -> Result<(), Violation> {
    for (i, decided) in decisions.decisions.iter().enumerate() {
        let foreign: Vec<Value> = decided.difference(universe).copied().collect();
        if !foreign.is_empty() {
            let foreign_set: ValueSet = foreign.iter().copied().collect();
            return Err(Violation {
                property: Property::UniverseContainment,
                subject: label(&decisions.path),
                against: None,
                round: i + 1,
                message: format!(
                    "round {}: decided {} never proposed by any process",
                    i + 1,
                    render(&foreign_set)
                ),
                values: foreign,
            });
        }
    }
    Ok(())
}

/// Two same-round decisions are comparable when one contains the other.
/// Equal sizes therefore require equal sets.
pub fn comparable(a: &ValueSet, b: &ValueSet) -> bool {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => a == b,
        Ordering::Less => a.is_subset(b),
        Ordering::Greater => b.is_subset(a),
    }
}

/// Rounds are zipped, so the shorter log bounds the comparison.
pub fn check_comparable(a: &DecisionLog, b: &DecisionLog) -> Result<(), Violation> {
    for (i, (da, db)) in a.decisions.iter().zip(&b.decisions).enumerate() {
        if !comparable(da, db) {
            return Err(Violation {
                property: Property::ChainConsistency,
                subject: label(&a.path),
                against: Some(label(&b.path)),
                round: i + 1,
                message: format!(
                    "round {}: decided {} and {} are not ordered by inclusion",
                    i + 1,
                    render(da),
                    render(db)
                ),
                values: da.symmetric_difference(db).copied().collect(),
            });
        }
    }
    Ok(())
}

struct Tally {
    keep_going: bool,
    comparisons: usize,
    violations: Vec<Violation>,
}

impl Tally {
    fn record(&mut self, result: Result<(), Violation>) -> ControlFlow<()> {
        self.comparisons += 1;
        match result {
            Ok(()) => ControlFlow::Continue(()),
            Err(v) => {
                tracing::debug!(
                    property = %v.property,
                    subject = %v.subject,
                    round = v.round,
                    "violation"
                );
                self.violations.push(v);
                if self.keep_going {
                    ControlFlow::Continue(())
                } else {
                    ControlFlow::Break(())
                }
            }
        }
    }
}

fn validity_pass(
    runs: &[ProcessRun],
    tally: &mut Tally,
    progress: &mut impl FnMut(&Progress),
) -> ControlFlow<()> {
    for (i, run) in runs.iter().enumerate() {
        tracing::debug!(process = run.record.index, "checking validity");
        progress(&Progress {
            property: Property::Validity,
            subject: label(&run.proposals.path),
            against: label(&run.decisions.path),
            step: i + 1,
            total: runs.len(),
        });
        tally.record(check_validity(&run.proposals, &run.decisions))?;
    }
    ControlFlow::Continue(())
}

fn universe_pass(
    runs: &[ProcessRun],
    universe: &ValueSet,
    tally: &mut Tally,
    progress: &mut impl FnMut(&Progress),
) -> ControlFlow<()> {
    for (i, run) in runs.iter().enumerate() {
        progress(&Progress {
            property: Property::UniverseContainment,
            subject: label(&run.decisions.path),
            against: "possible values".to_string(),
            step: i + 1,
            total: runs.len(),
        });
        tally.record(check_universe(&run.decisions, universe))?;
    }
    ControlFlow::Continue(())
}

fn consistency_pass(
    runs: &[ProcessRun],
    tally: &mut Tally,
    progress: &mut impl FnMut(&Progress),
) -> ControlFlow<()> {
    let total = runs.len() * runs.len().saturating_sub(1) / 2;
    let mut step = 0;
    for (i, a) in runs.iter().enumerate() {
        for b in &runs[i + 1..] {
            step += 1;
            progress(&Progress {
                property: Property::ChainConsistency,
                subject: label(&a.decisions.path),
                against: label(&b.decisions.path),
                step,
                total,
            });
            tally.record(check_comparable(&a.decisions, &b.decisions))?;
        }
    }
    ControlFlow::Continue(())
}

fn run_passes(
    runs: &[ProcessRun],
    tally: &mut Tally,
    progress: &mut impl FnMut(&Progress),
) -> ControlFlow<()> {
    validity_pass(runs, tally, progress)?;
    tracing::info!(processes = runs.len(), "validity pass done");

    let universe = collect_universe(runs.iter().map(|r| &r.proposals));
    universe_pass(runs, &universe, tally, progress)?;
    tracing::info!(universe = universe.len(), "universe containment pass done");

    consistency_pass(runs, tally, progress)?;
    tracing::info!("chain consistency pass done");
    ControlFlow::Continue(())
}

/// Runs validity, universe containment and chain consistency in that order.
/// Without `keep_going` the run stops at the first violation.
pub fn run_checks(
    runs: &[ProcessRun],
    keep_going: bool,
    mut progress: impl FnMut(&Progress),
) -> CheckReport {
    let mut tally = Tally {
        keep_going,
        comparisons: 0,
        violations: Vec::new(),
    };
    if run_passes(runs, &mut tally, &mut progress).is_break() {
        tracing::debug!(comparisons = tally.comparisons, "stopped at first violation");
    }

    CheckReport {
        verdict: if tally.violations.is_empty() {
            Verdict::Passed
        } else {
            Verdict::Failed
        },
        processes: runs.len(),
        comparisons: tally.comparisons,
        violations: tally.violations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{ConfigHeader, ProcessRecord};
    use std::path::PathBuf;

    fn set(values: &[Value]) -> ValueSet {
        values.iter().copied().collect()
    }

    fn config(name: &str, rounds: &[&[Value]]) -> ProposalFile {
        ProposalFile {
            path: PathBuf::from(format!("{name}.config")),
            header: ConfigHeader {
                proposals: rounds.len(),
                max_length: 3,
                values: 10,
            },
            proposals: rounds.iter().map(|r| set(r)).collect(),
        }
    }

    fn output(name: &str, rounds: &[&[Value]]) -> DecisionLog {
        DecisionLog {
            path: PathBuf::from(format!("{name}.output")),
            decisions: rounds.iter().map(|r| set(r)).collect(),
        }
    }

    fn run(name: &str, proposed: &[&[Value]], decided: &[&[Value]]) -> ProcessRun {
        ProcessRun {
            record: ProcessRecord {
                index: 0,
                config: PathBuf::from(format!("{name}.config")),
                output: PathBuf::from(format!("{name}.output")),
            },
            proposals: config(name, proposed),
            decisions: output(name, decided),
        }
    }

    #[test]
    fn validity_accepts_supersets() {
        let c = config("p1", &[&[0], &[1, 2]]);
        let o = output("p1", &[&[0, 1], &[0, 1, 2]]);
        assert!(check_validity(&c, &o).is_ok());
    }

    #[test]
    fn validity_names_missing_values_and_round() {
        let c = config("p2", &[&[0], &[1]]);
        let o = output("p2", &[&[0], &[2]]);
        let v = check_validity(&c, &o).unwrap_err();
        assert_eq!(v.property, Property::Validity);
        assert_eq!(v.subject, "p2.config");
        assert_eq!(v.against.as_deref(), Some("p2.output"));
        assert_eq!(v.round, 2);
        assert_eq!(v.values, vec![1]);
    }

    #[test]
    fn universe_is_union_of_all_proposals() {
        let a = config("p1", &[&[0], &[3]]);
        let b = config("p2", &[&[1, 0]]);
        assert_eq!(collect_universe([&a, &b]), set(&[0, 1, 3]));
    }

    #[test]
    fn universe_rejects_foreign_values() {
        let universe = set(&[0, 1, 2]);
        assert!(check_universe(&output("p1", &[&[0, 1]]), &universe).is_ok());
        let v = check_universe(&output("p1", &[&[0], &[0, 5]]), &universe).unwrap_err();
        assert_eq!(v.property, Property::UniverseContainment);
        assert_eq!(v.round, 2);
        assert_eq!(v.values, vec![5]);
        assert_eq!(v.against, None);
    }

    #[test]
    fn comparable_follows_inclusion_chain() {
        assert!(comparable(&set(&[0, 1]), &set(&[0])));
        assert!(comparable(&set(&[0]), &set(&[0, 1, 2])));
        assert!(comparable(&set(&[1, 2]), &set(&[2, 1])));
        assert!(comparable(&set(&[]), &set(&[4])));
        assert!(!comparable(&set(&[0, 1]), &set(&[2, 3])));
        assert!(!comparable(&set(&[0, 1]), &set(&[1, 2, 3])));
        assert!(!comparable(&set(&[1, 2, 3]), &set(&[0, 1])));
    }

    #[test]
    fn comparable_logs_zip_to_shorter() {
        let a = output("p1", &[&[0], &[0, 1]]);
        let b = output("p2", &[&[0, 2]]);
        assert!(check_comparable(&a, &b).is_ok());

        let c = output("p3", &[&[0], &[2, 3]]);
        let v = check_comparable(&a, &c).unwrap_err();
        assert_eq!(v.round, 2);
        assert_eq!(v.values, vec![0, 1, 2, 3]);
    }

    #[test]
    fn chain_of_three_passes() {
        let runs = vec![
            run("p1", &[&[1]], &[&[0, 1]]),
            run("p2", &[&[0]], &[&[0]]),
            run("p3", &[&[2]], &[&[0, 1, 2]]),
        ];
        let mut seen = Vec::new();
        let report = run_checks(&runs, false, |p| seen.push(p.clone()));
        assert!(report.passed());
        assert_eq!(report.comparisons, 3 + 3 + 3);
        assert_eq!(seen.len(), 9);
        let last = seen.last().unwrap();
        assert_eq!(last.property, Property::ChainConsistency);
        assert_eq!((last.step, last.total), (3, 3));
        assert_eq!(last.subject, "p2.output");
        assert_eq!(last.against, "p3.output");
    }

    #[test]
    fn stops_at_first_violation() {
        let runs = vec![
            run("p1", &[&[0]], &[&[0, 1]]),
            run("p2", &[&[1]], &[&[2]]),
            run("p3", &[&[9]], &[&[7]]),
        ];
        let report = run_checks(&runs, false, |_| {});
        assert_eq!(report.verdict, Verdict::Failed);
        assert_eq!(report.comparisons, 2);
        assert_eq!(report.violations.len(), 1);
        assert_eq!(report.violations[0].subject, "p2.config");
    }

    #[test]
    fn keep_going_collects_every_pass() {
        let runs = vec![
            run("p1", &[&[0]], &[&[0, 1]]),
            run("p2", &[&[1]], &[&[2]]),
        ];
        let report = run_checks(&runs, true, |_| {});
        let properties: Vec<Property> = report.violations.iter().map(|v| v.property).collect();
        // 2 is never proposed, and {0,1} vs {2} are incomparable
        assert_eq!(
            properties,
            vec![
                Property::Validity,
                Property::UniverseContainment,
                Property::ChainConsistency
            ]
        );
        assert_eq!(report.comparisons, 2 + 2 + 1);
    }

    #[test]
    fn rerun_gives_same_report() {
        let runs = vec![
            run("p1", &[&[0]], &[&[0, 5]]),
            run("p2", &[&[1]], &[&[1]]),
        ];
        let first = run_checks(&runs, false, |_| {});
        let second = run_checks(&runs, false, |_| {});
        assert_eq!(first, second);
        assert_eq!(first.violations[0].property, Property::UniverseContainment);
    }
}
