use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::Context;

use crate::{input, render, session::Session, util};

#[derive(Default, Debug, Clone, clap::Args)]
pub(crate) struct InteractiveArg {
    /// Load observations from this file before showing the menu
    #[arg(long)]
    pub input: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    EnterData,
    GenerateTable,
    Exit,
}

impl MenuChoice {
    fn parse(line: &str) -> Option<Self> {
        match line.trim() {
            "1" => Some(Self::EnterData),
            "2" => Some(Self::GenerateTable),
            "3" => Some(Self::Exit),
            _ => None,
        }
    }
}

pub(crate) fn run(arg: &InteractiveArg) -> anyhow::Result<()> {
    let mut session = Session::new();
    if let Some(path) = &arg.input {
        let text = util::read_input_text(Some(path))?;
        let values = input::parse_observations(&text)
            .with_context(|| format!("Failed to parse observations in {}", path.display()))?;
        session.load(values);
    }

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    run_menu(stdin, stdout, &mut session)
}

fn run_menu<R, W>(mut reader: R, mut out: W, session: &mut Session) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "FREQUENCY DISTRIBUTION TABLE BUILDER")?;
    writeln!(out, "Quantitative data, grouped in class intervals")?;
    if let Some(dataset) = session.dataset() {
        writeln!(
            out,
            "Loaded {} observations ({})",
            dataset.values.len(),
            dataset.kind
        )?;
    }

    loop {
        writeln!(out)?;
        writeln!(out, "Menu:")?;
        writeln!(out, "1. Enter data")?;
        writeln!(out, "2. Generate table")?;
        writeln!(out, "3. Exit")?;
        write!(out, "Choose an option: ")?;
        out.flush()?;

        let Some(line) = read_line(&mut reader)? else {
            // End of input behaves like choosing exit
            writeln!(out)?;
            break;
        };

        match MenuChoice::parse(&line) {
            Some(MenuChoice::EnterData) => enter_data(&mut reader, &mut out, session)?,
            Some(MenuChoice::GenerateTable) => generate_table(&mut out, session)?,
            Some(MenuChoice::Exit) => {
                writeln!(out, "Exiting...")?;
                break;
            }
            None => writeln!(out, "Invalid option! Try again.")?,
        }
    }

    out.flush()?;
    Ok(())
}

fn read_line<R>(reader: &mut R) -> anyhow::Result<Option<String>>
where
    R: BufRead,
{
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok((read > 0).then_some(line))
}

fn enter_data<R, W>(reader: &mut R, out: &mut W, session: &mut Session) -> anyhow::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(out, "=== DATA ENTRY ===")?;
    writeln!(out, "Enter the values separated by commas or spaces:")?;
    write!(out, "Data: ")?;
    out.flush()?;

    let line = read_line(reader)?.unwrap_or_default();
    match input::parse_observations(&line) {
        Ok(values) => {
            let dataset = session.load(values);
            writeln!(out, "Data received: {:?}", dataset.values)?;
            writeln!(out, "Data kind: {}", dataset.kind)?;
            writeln!(out, "Count: {}", dataset.values.len())?;
        }
        Err(err) => {
            tracing::warn!(%err, "rejected data entry");
            writeln!(out, "Could not read the data: {err}")?;
        }
    }
    Ok(())
}

fn generate_table<W>(out: &mut W, session: &Session) -> anyhow::Result<()>
where
    W: Write,
{
    let Some(result) = session.table() else {
        writeln!(out, "Please enter data first!")?;
        return Ok(());
    };
    let table = result.context("Failed to compute frequency table")?;
    tracing::info!(
        kind = %table.kind,
        class_count = table.class_count,
        "frequency table computed"
    );
    writeln!(out)?;
    render::write_report(out, &table)?;
    Ok(())
}
