//! threadlist - todo lists stored as chat message text

use std::process::ExitCode;

fn main() -> ExitCode {
    threadlist::cli::run()
}
