use std::io;

use clap::CommandFactory;
use romthumb::cli::Cli;
use romthumb::config::Config;
use romthumb::pipeline::process_lines;

fn main() {
    let cli = Cli::parse_normalized();
    let config = match Config::try_from(cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err:#}");
            eprintln!("{}", Cli::command().render_help());
            std::process::exit(1);
        }
    };
    config.log_summary();

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(err) = process_lines(stdin.lock(), stdout.lock(), &config) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}
