use clap::Parser;
use is_terminal::IsTerminal;
use legiscope::{run, Cli};
use owo_colors::OwoColorize;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        if std::io::stderr().is_terminal() {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
        } else {
            eprintln!("Error: {:#}", e);
        }
        std::process::exit(1);
    }
}
