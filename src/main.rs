use std::{
    fs::File,
    io::{self, BufReader},
    process,
};

use algebra::{config::Config, repl::Session};
use clap::Parser;

fn main() {
    let mut config = Config::parse();

    tracing_subscriber::fmt().with_target(false)
                             .with_level(true)
                             .with_max_level(config.log_level())
                             .with_writer(io::stderr)
                             .init();

    let result = match config.script.clone() {
        Some(path) => {
            let Ok(file) = File::open(&path) else {
                eprintln!("Failed to read the input file '{}'. Perhaps this file does not exist?",
                          path.display());
                process::exit(1);
            };
            config.prompt.clear();
            Session::new(config).run(BufReader::new(file), io::stdout().lock())
        },
        None => Session::new(config).run(io::stdin().lock(), io::stdout().lock()),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        process::exit(1);
    }
}
