// newsreel-cli/src/main.rs
//
// Binary entry point: parses arguments, initializes logging, and dispatches
// to the requested command.

use clap::Parser;
use newsreel_cli::{Cli, Commands, logging, run_render};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Render(args) => run_render(args),
    };

    if let Err(e) = result {
        log::error!("{e}");
        std::process::exit(1);
    }
}
