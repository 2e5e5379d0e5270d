//! # Facility Desk Server
//!
//! Reads the `FACILITY_*` environment, starts the actor store and serves the API until Ctrl+C
//! or SIGTERM. See [`facility_desk::config::Config`] for the variables.

use facility_desk::config::Config;
use facility_desk::lifecycle::setup_tracing;
use facility_desk::server::{start_server, ServerError};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    // Setup tracing once for the entire application
    setup_tracing();

    info!("Starting facility desk");

    let config = Config::load()?;
    if let Err(e) = start_server(config).await {
        error!(error = %e, "Server stopped with an error");
        return Err(e);
    }

    info!("Shutdown complete");
    Ok(())
}
