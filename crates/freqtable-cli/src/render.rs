//! Plain-text rendering of frequency tables
//!
//! The layout is a fixed-width table followed by a legend, the interval
//! notation key and a block of descriptive statistics.

use std::io::{self, Write};

use freqtable_stats::{interval::ClassInterval, table::FrequencyTable};

const TABLE_WIDTH: usize = 120;
const SUMMARY_WIDTH: usize = 60;

/// Write the full report for `table`
pub fn write_report<W>(out: &mut W, table: &FrequencyTable) -> io::Result<()>
where
    W: Write,
{
    write_table(out, table)?;
    writeln!(out)?;
    write_legend(out)?;
    writeln!(out)?;
    write_summary(out, table)?;
    Ok(())
}

fn write_table<W>(out: &mut W, table: &FrequencyTable) -> io::Result<()>
where
    W: Write,
{
    let rule = "=".repeat(TABLE_WIDTH);
    let thin_rule = "-".repeat(TABLE_WIDTH);

    writeln!(out, "{rule}")?;
    writeln!(out, "FREQUENCY DISTRIBUTION TABLE")?;
    writeln!(out, "{rule}")?;
    writeln!(
        out,
        "{:<6} {:<20} {:<6} {:<6} {:<8} {:<8} {:<9} {:<9} {:<12}",
        "Class", "Interval", "Fi", "Fac", "Fr", "Frac", "F%", "F%ac", "Midpoint"
    )?;
    writeln!(out, "{thin_rule}")?;

    for (idx, interval) in table.intervals.iter().enumerate() {
        write_row(out, idx + 1, interval)?;
    }

    writeln!(out, "{thin_rule}")?;
    writeln!(
        out,
        "{:<6} {:<20} {:<6} {:<6} {:<8.4} {:<8.4} {:<9} {:<9}",
        "Total",
        "",
        table.total,
        table.total,
        1.0,
        1.0,
        percent(100.0),
        percent(100.0)
    )?;
    Ok(())
}

fn write_row<W>(out: &mut W, class: usize, interval: &ClassInterval) -> io::Result<()>
where
    W: Write,
{
    writeln!(
        out,
        "{:<6} {:<20} {:<6} {:<6} {:<8.4} {:<8.4} {:<9} {:<9} {:<12.2}",
        class,
        interval.label,
        interval.absolute_frequency,
        interval.cumulative_absolute,
        interval.relative_frequency,
        interval.cumulative_relative,
        percent(interval.percentage_frequency),
        percent(interval.cumulative_percentage),
        interval.midpoint()
    )
}

fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

fn write_legend<W>(out: &mut W) -> io::Result<()>
where
    W: Write,
{
    writeln!(out, "LEGEND:")?;
    writeln!(out, "Fi   = Absolute frequency")?;
    writeln!(out, "Fac  = Cumulative absolute frequency")?;
    writeln!(out, "Fr   = Relative frequency")?;
    writeln!(out, "Frac = Cumulative relative frequency")?;
    writeln!(out, "F%   = Percentage frequency")?;
    writeln!(out, "F%ac = Cumulative percentage frequency")?;
    writeln!(out)?;
    writeln!(out, "INTERVAL NOTATION:")?;
    writeln!(out, "a |- b  = includes 'a' but not 'b'")?;
    writeln!(out, "a |-| b = includes both 'a' and 'b'")?;
    Ok(())
}

fn write_summary<W>(out: &mut W, table: &FrequencyTable) -> io::Result<()>
where
    W: Write,
{
    let rule = "=".repeat(SUMMARY_WIDTH);
    let stats = &table.stats;

    writeln!(out, "{rule}")?;
    writeln!(out, "DESCRIPTIVE STATISTICS:")?;
    writeln!(out, "{rule}")?;
    writeln!(out, "Number of observations: {}", stats.count)?;
    writeln!(out, "Minimum: {:.2}", stats.min)?;
    writeln!(out, "Maximum: {:.2}", stats.max)?;
    writeln!(out, "Amplitude: {:.2}", stats.amplitude)?;
    writeln!(out, "Mean: {:.2}", stats.mean)?;
    writeln!(out, "Median: {:.2}", stats.median)?;
    writeln!(out, "Standard deviation: {:.2}", stats.std_dev)?;
    writeln!(out, "Number of classes: {}", table.class_count)?;
    writeln!(out, "Data kind: {}", table.kind)?;
    Ok(())
}
