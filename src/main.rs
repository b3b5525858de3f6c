use std::io;

use anyhow::Result;
use clap::Parser;
use log::debug;

mod counter;

use counter::Sleep;

#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    debug!("CLI: {:?}", cli);

    let stdout = io::stdout();
    counter::run(&mut stdout.lock(), &mut Sleep)?;

    debug!("Counting finished");
    Ok(())
}
