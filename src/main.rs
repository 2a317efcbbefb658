use std::process::ExitCode;

fn main() -> ExitCode {
    lk_cli::logging::init();
    lk_cli::cli::run()
}
