use clap::Parser;

use ark_resolver::adapters::logging;
use ark_resolver::cli::{dispatch, Cli};

#[tokio::main]
async fn main() {
    logging::init();
    let cli = Cli::parse();
    std::process::exit(dispatch(cli).await);
}
