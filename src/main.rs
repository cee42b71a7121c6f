//! Mana Pool CLI - relays one API call per invocation and prints the response.

use clap::Parser;
use manapool::{commands, Cli, ManapoolError};

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout is reserved for command output
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    log::debug!("Parsed command: {:?}", cli.command);

    match commands::run(cli).await {
        Ok(output) => print!("{}", output),
        Err(e) => exit_with(&e),
    }
}

fn exit_with(err: &ManapoolError) -> ! {
    match err {
        // Already reads "HTTP Error <code>: <body>"
        ManapoolError::HttpStatus { .. } => eprintln!("{}", err),
        _ => eprintln!("Error: {}", err),
    }
    std::process::exit(err.exit_code());
}
