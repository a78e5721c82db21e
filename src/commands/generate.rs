use crate::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

pub fn handle_generate_command(cli: &Cli) -> anyhow::Result<bool> {
    let Commands::Generate {
        directory,
        values,
        proposals,
        processes,
        max_length,
        seed,
    } = &cli.command
    else {
        return Ok(false);
    };

    let params = GeneratorParams {
        processes: *processes,
        proposals: *proposals,
        values: *values,
        max_length: *max_length,
    };
    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(*s),
        None => StdRng::from_os_rng(),
    };
    let report = write_configs(directory, &params, &mut rng)?;

    print_report(cli.json, true, report, |r| {
        let mut lines: Vec<String> = r.files.iter().map(|f| format!("wrote {}", f)).collect();
        lines.push(format!(
            "generated {} files ({} proposals, max length {}, {} values)",
            r.files.len(),
            r.proposals,
            r.max_length,
            r.values
        ));
        lines
    })?;
    Ok(true)
}
