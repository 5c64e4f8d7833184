use Chemy::cli::cli_args::{ChemyArgs, run};
use clap::Parser;

pub fn main() {
    let args = ChemyArgs::parse();
    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
