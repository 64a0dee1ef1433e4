use std::process;

use artifact_scanner::{cli, run};

fn main() {
    let args = cli::get_args();
    if let Err(err) = run(args) {
        eprintln!("artifact-scanner: {}", err);
        process::exit(1);
    }
}
