use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub fn create_progress_bar(total: usize, unit: &str) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    let template = format!(
        "{{spinner:.green}} [{{elapsed_precise}}] [{{bar:40.cyan/blue}}] \
         {{pos}}/{{len}} {unit} ({{eta}})"
    );
    let style = ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("#>-");
    pb.set_style(style);
    pb
}

/// Asks for a path on `output` and reads one line from `input`.
pub fn prompt_path<R: BufRead, W: Write>(
    message: &str,
    input: &mut R,
    output: &mut W,
) -> Result<PathBuf> {
    write!(output, "{message}: ")?;
    output.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read path from stdin")?;
    if read == 0 {
        anyhow::bail!("No path given for \"{}\"", message);
    }

    Ok(PathBuf::from(line.trim()))
}
