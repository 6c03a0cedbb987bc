use std::io::{BufRead, Write};

use anyhow::Context;

use crate::config::Config;
use crate::thumbnail::record_for_line;
use crate::types::{OutputFormat, ThumbnailRecord};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessSummary {
    pub emitted: usize,
    pub skipped: usize,
}

fn write_record<W: Write>(
    writer: &mut W,
    line: &[u8],
    record: &ThumbnailRecord,
    format: OutputFormat,
) -> anyhow::Result<()> {
    match format {
        OutputFormat::Tsv => {
            // echo the raw line so non-UTF-8 names survive untouched
            writer.write_all(line)?;
            writeln!(writer, "\t{}", record.url)?;
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, record)?;
            writer.write_all(b"\n")?;
        }
    }
    writer.flush()?;
    Ok(())
}

/// Read ROM names line by line from `reader` and write one thumbnail record
/// per non-empty line to `writer`, in input order.
///
/// A trailing `\r` is stripped from each line, including a final line with
/// no newline. Lines are handled as raw bytes, so invalid UTF-8 is never a
/// read error.
pub fn process_lines<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    config: &Config,
) -> anyhow::Result<ProcessSummary> {
    let mut summary = ProcessSummary::default();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .context("Error reading input")?;
        if read == 0 {
            break;
        }

        if buf.last() == Some(&b'\n') {
            buf.pop();
        }
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }

        if buf.is_empty() {
            summary.skipped += 1;
            vprintln!(config.verbose, 2, "skip: empty line");
            continue;
        }

        let record = record_for_line(&buf, config);
        vprintln!(config.verbose, 2, "{} -> {}", record.name, record.url);
        write_record(&mut writer, &buf, &record, config.format)
            .context("Error writing output")?;
        summary.emitted += 1;
    }

    vprintln!(
        config.verbose,
        1,
        "processed {} line(s), skipped {} blank line(s)",
        summary.emitted,
        summary.skipped
    );
    Ok(summary)
}
