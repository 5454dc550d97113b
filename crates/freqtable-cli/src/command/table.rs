use std::path::PathBuf;

use anyhow::Context;
use freqtable_stats::table::FrequencyTable;

use crate::{
    input,
    util::{self, Output, OutputFormat},
};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct TableArg {
    /// Observations, negative values included; read from `--input` or stdin when omitted
    #[arg(allow_negative_numbers = true)]
    pub values: Vec<String>,
    /// Read observations from this file (comma- or whitespace-separated)
    #[arg(long, conflicts_with = "values")]
    pub input: Option<PathBuf>,
    /// Output format (text or json)
    #[arg(long, default_value = "text")]
    pub format: OutputFormat,
    /// Output file path (stdout when omitted)
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub(crate) fn run(arg: &TableArg) -> anyhow::Result<()> {
    let TableArg {
        values,
        input,
        format,
        output,
    } = arg;

    let text = if values.is_empty() {
        util::read_input_text(input.as_ref())?
    } else {
        values.join(" ")
    };
    let observations = input::parse_observations(&text).context("Failed to parse observations")?;
    tracing::info!(count = observations.len(), "observations read");

    let table =
        FrequencyTable::new(&observations).context("Failed to compute frequency table")?;
    tracing::info!(
        kind = %table.kind,
        class_count = table.class_count,
        "frequency table computed"
    );

    let mut output = Output::create(output.as_deref())?;
    output.write_table(&table, *format)?;
    tracing::info!(output = output.destination(), "table written");

    Ok(())
}
