use std::io::Write;

use clap::ValueEnum;

use crate::error::Result;
use crate::types::QueryResult;

/// Verdict output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One `Bad`/`Good` token per line
    #[default]
    Text,
    /// One JSON object per line: `{"domain":"...","verdict":"Bad"}`
    Json,
}

/// Write one line per result, in the order given.
pub fn write_results<'a, W, I>(out: &mut W, results: I, format: OutputFormat) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a QueryResult>,
{
    for result in results {
        match format {
            OutputFormat::Text => writeln!(out, "{}", result.verdict)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, result)?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
