//! Binary entrypoint for the `stitch` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    // Values from .env behave like exported STITCH_* variables.
    dotenvy::dotenv().ok();

    // Recording is handled in commands::dispatch via STITCH_RECORD=<dir>.
    match stitch::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
