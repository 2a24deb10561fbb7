//! Interactive console: choose where the edge list comes from, then print
//! the answers to the standard queries.

use std::process::ExitCode;

use route_server::console::Console;
use route_server::logging;
use tokio::io::BufReader;

#[tokio::main]
async fn main() -> ExitCode {
    logging::init();

    let mut console = Console::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout());
    match console.run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
