//! Serve command: run the HTTP API.

use clap::Args;
use tracing::{debug, instrument};

use writescan_core::Config;

use crate::http::{self, ApiSettings};

/// Arguments for the `serve` subcommand.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Address to bind (overrides config `host`).
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides config `port`).
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Start the HTTP server and block until shutdown.
#[instrument(name = "cmd_serve", skip_all)]
pub async fn cmd_serve(args: ServeArgs, config: &Config) -> anyhow::Result<()> {
    let host = args.host.as_deref().unwrap_or(&config.host);
    let port = args.port.unwrap_or(config.port);
    let settings = ApiSettings {
        max_input_bytes: config.input_limit(),
    };

    debug!(%host, port, "executing serve command");

    http::serve(host, port, settings).await
}
