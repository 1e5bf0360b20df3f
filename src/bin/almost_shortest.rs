use almost_sssp::input::solve_stream;
use std::io::{self, BufWriter};
use std::process::ExitCode;

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let stdin = io::stdin();
    let stdout = io::stdout();

    match solve_stream(stdin.lock(), BufWriter::new(stdout.lock())) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}
