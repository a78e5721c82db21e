use crate::*;

fn describe(v: &Violation) -> String {
    match &v.against {
        Some(other) => format!(
            "{} violated by {} against {}: {}",
            v.property, v.subject, other, v.message
        ),
        None => format!("{} violated by {}: {}", v.property, v.subject, v.message),
    }
}

/// Returns the report so the caller can map a failed verdict to exit code 1.
pub fn handle_check_command(cli: &Cli) -> anyhow::Result<Option<CheckReport>> {
    let Commands::Check {
        config,
        output,
        log_dir,
        processes,
        allow_incomplete,
        keep_going,
    } = &cli.command
    else {
        return Ok(None);
    };

    let records = match (log_dir, processes) {
        (Some(dir), Some(n)) => discover_records(dir, *n),
        _ => pair_records(config, output)?,
    };
    let runs = load_processes(&records, *allow_incomplete)?;
    tracing::info!(processes = runs.len(), "loaded process logs");

    let json = cli.json;
    let report = run_checks(&runs, *keep_going, |p| {
        let line = format!(
            "Checking {} against {}. {}/{}",
            p.subject, p.against, p.step, p.total
        );
        if json {
            tracing::debug!(property = %p.property, "{line}");
        } else {
            println!("{line}");
        }
    });

    print_report(cli.json, report.passed(), &report, |r| {
        if r.passed() {
            return vec![format!("Validation passed ({} comparisons)", r.comparisons)];
        }
        let mut lines: Vec<String> = r.violations.iter().map(describe).collect();
        lines.push(VALIDATION_FAILED.to_string());
        lines
    })?;
    Ok(Some(report))
}
