use std::io::{BufRead, Write};

use anyhow::{Context, Result};

pub const WARNING: &str = "\
WARNING: this program shows continuously moving, high-contrast colour
patterns that may trigger seizures in people with photosensitive epilepsy.
";

/// Prints the photosensitivity warning and reads one answer.
///
/// An empty line, `y` or `yes` accepts; `n`, `no` or end of input declines.
/// Anything else asks again.
pub fn confirm<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<bool> {
    write!(output, "{WARNING}").context("failed to write warning")?;

    let mut line = String::new();
    loop {
        write!(output, "Continue? [Y/n] ").context("failed to write prompt")?;
        output.flush().context("failed to flush prompt")?;

        line.clear();
        let read = input.read_line(&mut line).context("failed to read answer")?;
        if read == 0 {
            // No terminal: say how to start unattended.
            writeln!(output, "\nno answer on input; pass --accept-warning to skip this prompt").ok();
            return Ok(false);
        }

        match line.trim().to_ascii_lowercase().as_str() {
            "" | "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => continue,
        }
    }
}
