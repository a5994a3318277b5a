mod cli;
mod render;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("Error: {}", err.report());
        std::process::exit(1);
    }
}
