//! Binary entrypoint for `scmd-server`.

mod app;
mod cli;
mod ingress;

fn main() {
    if let Err(err) = app::run() {
        eprintln!("scmd-server failed: {err}");
        std::process::exit(1);
    }
}
