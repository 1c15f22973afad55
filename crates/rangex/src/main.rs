//! rangex CLI
//!
//! Expands character range patterns given on the command line.

use rangex::{init_tracing, parse_args, run, CliCommand, USAGE};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!();
            eprintln!("{USAGE}");
            std::process::exit(1);
        }
    };

    if command == CliCommand::Help {
        println!("{USAGE}");
        return;
    }

    match run(&command) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
