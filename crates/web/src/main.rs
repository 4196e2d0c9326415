//! Charge Administration Web Server

use std::process;

use salvo::{
    affix_state::inject, catch_panic::CatchPanic, flash::CookieStore, prelude::*,
    trailing_slash::remove_slash,
};
use tracing::{error, info};

use charge_app::context::AppContext;

use crate::{config::ServerConfig, state::State};

mod charges;
mod config;
mod extensions;
mod healthcheck;
mod logging;
mod router;
mod shutdown;
mod state;
#[cfg(test)]
mod test_helpers;

/// Charge administration web server entry point
///
/// # Panics
///
/// Panics if the server fails to bind or serve requests
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    // Initialize logging
    logging::init_subscriber(&config);

    let addr = config.socket_addr();

    info!("Starting server on {addr}");

    // Bind server
    let listener = TcpListener::new(addr).bind().await;

    let app = match AppContext::from_database_url(&config.database.database_url).await {
        Ok(app) => app,
        Err(init_error) => {
            error!("failed to initialize app context: {init_error}");

            process::exit(1);
        }
    };

    let router = Router::new()
        .hoop(CatchPanic::new())
        .hoop(remove_slash())
        .hoop(inject(State::from_app_context(app)))
        .hoop(CookieStore::new().into_handler())
        .push(Router::with_path("healthcheck").get(healthcheck::handler))
        .push(router::charge_router());

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    // Start serving requests
    server.serve(router).await;
}
