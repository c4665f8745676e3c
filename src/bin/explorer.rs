use clap::Parser;
use fractal_explorer::{ExplorerArgs, PixelsPresenterFactory, RunGuiCommand};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = ExplorerArgs::parse().into_config()?;
    let command = RunGuiCommand::new(PixelsPresenterFactory, config);

    command.execute()?;

    Ok(())
}
