use std::{
    fs::{self, File},
    io::{self, BufWriter, Read as _, Write},
    path::Path,
};

use anyhow::Context;
use freqtable_stats::table::FrequencyTable;

use crate::render;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, derive_more::FromStr)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Destination of a rendered frequency table: stdout or a file
pub struct Output {
    writer: Box<dyn Write>,
    destination: String,
}

impl Output {
    pub fn create(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self {
                writer: Box::new(io::stdout().lock()),
                destination: "stdout".to_owned(),
            });
        };
        let file = File::create(path)
            .with_context(|| format!("Failed to create output file: {}", path.display()))?;
        Ok(Self {
            writer: Box::new(BufWriter::new(file)),
            destination: path.display().to_string(),
        })
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Render `table` in `format` and flush
    pub fn write_table(
        &mut self,
        table: &FrequencyTable,
        format: OutputFormat,
    ) -> anyhow::Result<()> {
        match format {
            OutputFormat::Text => render::write_report(&mut self.writer, table)
                .with_context(|| format!("Failed to write table to {}", self.destination))?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut self.writer, table)
                    .with_context(|| format!("Failed to write JSON to {}", self.destination))?;
                writeln!(self.writer)
                    .with_context(|| format!("Failed to write JSON to {}", self.destination))?;
            }
        }
        self.writer
            .flush()
            .with_context(|| format!("Failed to flush output to {}", self.destination))
    }
}

/// Read raw observation text from a file, or from stdin when no path is given
pub fn read_input_text<P>(path: Option<P>) -> anyhow::Result<String>
where
    P: AsRef<Path>,
{
    match path {
        Some(path) => {
            let path = path.as_ref();
            fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read observations from stdin")?;
            Ok(text)
        }
    }
}
