use std::process::ExitCode;

mod app;
mod cli;
mod discovery;
mod execution;
mod fixture;
mod runner;
mod stats;

fn main() -> ExitCode {
    app::run()
}
