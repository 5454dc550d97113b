use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use self::{interactive::InteractiveArg, table::TableArg};

mod interactive;
mod table;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); `RUST_LOG` takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// What mode to run the program in
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print the frequency table of a list of numbers
    Table(#[clap(flatten)] TableArg),
    /// Enter data and generate tables from a menu
    Interactive(#[clap(flatten)] InteractiveArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_tracing(args.verbose);

    match args
        .mode
        .unwrap_or(Mode::Interactive(InteractiveArg::default()))
    {
        Mode::Table(arg) => table::run(&arg)?,
        Mode::Interactive(arg) => interactive::run(&arg)?,
    }
    Ok(())
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
