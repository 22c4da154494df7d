use anyhow::{bail, Context, Result};
use std::io::BufRead;

/// Read every number from a text stream
///
/// Values are separated by whitespace or commas. Blank lines and lines
/// starting with `#` are skipped. Anything `f64::from_str` accepts is a
/// value, including `NaN` and `inf`.
///
/// # Errors
/// Returns an error if the stream cannot be read or if a token is not a number.
pub fn read_values<R: BufRead>(reader: R) -> Result<Vec<f64>> {
    let mut values = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_num = idx + 1;
        let line = line.with_context(|| format!("failed to read line {line_num}"))?;

        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        for token in line.split(|c: char| c.is_whitespace() || c == ',') {
            if token.is_empty() {
                continue;
            }
            match token.parse::<f64>() {
                Ok(value) => values.push(value),
                Err(_) => bail!("invalid number {token:?} on line {line_num}"),
            }
        }
    }

    log::debug!("read {} values", values.len());

    Ok(values)
}
