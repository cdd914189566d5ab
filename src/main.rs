use std::process::ExitCode;

fn main() -> ExitCode {
    eventradar_app_lib::run()
}
