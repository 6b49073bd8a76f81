//! Test suite runner for the rayrect intersection kernel.
//!
//! Dispatches named test cases selected by numeric ID from the command line.
//! Argument errors map to distinct negative exit codes; a failing test
//! assertion panics and aborts the whole run without continuing to later
//! tests.

use log::info;

mod args;
mod cases;
mod logger;

fn main() {
    logger::init();

    let argv: Vec<String> = std::env::args().skip(1).collect();
    match args::parse(&argv) {
        Ok(args::Command::Help) => print!("{}", args::usage()),
        Ok(args::Command::Run(cases)) => {
            for case in cases {
                info!("Running test {}: {}", case.id(), case.name());
                case.run();
                info!("Test {} ({}) passed", case.id(), case.name());
            }
        }
        Err(err) => {
            err.report();
            std::process::exit(err.exit_code());
        }
    }
}
