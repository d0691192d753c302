#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]

use std::process::ExitCode;

fn main() -> ExitCode {
    let result = pantho_lib::run_pantho();
    if let Err(err) = &result {
        eprintln!("pantho: {}", err.report());
    }
    pantho_lib::exit_code(&result)
}
