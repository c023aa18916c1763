use std::process::ExitCode;

fn main() -> ExitCode {
    matrix_mul::cli::run()
}
