//! gatelog main entrypoint.

use gatelog::{exit_code, run, ui::messages::error};

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(exit_code(&e));
    }
}
