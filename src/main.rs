use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    match cumulus::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("cumulus: {e}");
            ExitCode::FAILURE
        }
    }
}
