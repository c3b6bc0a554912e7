//! lanechart CLI entry point.

fn main() {
    if let Err(e) = lanechart_cli::run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
