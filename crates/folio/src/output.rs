use anyhow::Context;
use serde::Serialize;

#[derive(Serialize)]
struct JsonOut<T> {
    ok: bool,
    data: T,
}

/// Prints `data` as a JSON envelope, or as text lines.
pub fn print_one<T: Serialize>(
    json: bool,
    ok: bool,
    data: T,
    lines: impl Fn(&T) -> Vec<String>,
) -> anyhow::Result<()> {
    if json {
        let out = serde_json::to_string_pretty(&JsonOut { ok, data })
            .context("Failed to encode JSON output")?;
        println!("{out}");
    } else {
        for line in lines(&data) {
            println!("{line}");
        }
    }
    Ok(())
}
