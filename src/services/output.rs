use crate::domain::models::JsonOut;
use serde::Serialize;

/// Text mode prints the rendered lines; JSON mode wraps `data` with `ok`.
pub fn print_report<T: Serialize>(
    json: bool,
    ok: bool,
    data: T,
    lines: impl Fn(&T) -> Vec<String>,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok, data })?
        );
    } else {
        for line in lines(&data) {
            println!("{}", line);
        }
    }
    Ok(())
}
