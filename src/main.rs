//! Simple Program - factorial, fibonacci and array sum fixture
//!
//! With no arguments this prints the same four lines as the classic C
//! fixture, so debugger front-ends can be pointed at either binary.

use clap::Parser;
use simple_program::{cli, commands::Options, common::logging};

#[derive(Parser)]
#[command(name = "simple_program", about = "Factorial and fibonacci debugging fixture")]
#[command(version, long_about = None)]
struct Cli {
    #[command(flatten)]
    options: Options,
}

fn main() {
    // Logs go to stderr so stdout stays identical to the fixture's output
    logging::init_cli();

    let cli = Cli::parse();

    if let Err(e) = cli::run(cli.options) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
