mod command;
mod input;
mod render;
mod session;
mod util;

fn main() -> anyhow::Result<()> {
    command::run()
}
