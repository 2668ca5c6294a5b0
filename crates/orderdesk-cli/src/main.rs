// orderdesk CLI entry point

use orderdesk_cli::{output, router::CommandRouter, CliError};

#[tokio::main]
async fn main() {
    match CommandRouter::route().await {
        Ok(()) => {}
        // The failing envelope is already on stdout.
        Err(CliError::CommandFailed) => std::process::exit(1),
        Err(e) => {
            output::print_error(&e.user_message());
            std::process::exit(1);
        }
    }
}
