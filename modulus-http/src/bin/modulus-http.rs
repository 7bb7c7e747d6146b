use clap::Parser;
use modulus_http::{self, server::ServerConfig};
use std::path::PathBuf;

/// Modulus HTTP API Server
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Host address to bind to
    #[arg(short = 'H', long, default_value = "127.0.0.1", env = "MODULUS_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 8081, env = "MODULUS_PORT")]
    port: u16,

    /// Value of the Access-Control-Allow-Origin header
    #[arg(long, default_value = "*", env = "MODULUS_ALLOW_ORIGIN")]
    allow_origin: String,

    /// Directory with the web client to serve at the root path
    #[arg(long, env = "MODULUS_STATIC_DIR")]
    static_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        allow_origin: cli.allow_origin,
        static_dir: cli.static_dir,
    };

    println!(
        "Starting modulus HTTP server on {}:{}",
        config.host, config.port
    );
    modulus_http::start_with_config(config).await
}
