use remesa_gateway::{Gateway, GatewayConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn print_help() {
    eprintln!(
        r#"Remesa Gateway - exchange-rate feed and request gatekeeper

USAGE:
    remesa-gateway [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --help              Print this help message

ENVIRONMENT VARIABLES:
    HOST                Server host (default: 0.0.0.0)
    PORT                Server port (default: 8080)
    RUST_LOG            Log level filter

EXAMPLES:
    # Run with defaults
    remesa-gateway

    # Run with config file
    remesa-gateway --config config.json

    # Run with custom port
    PORT=9000 remesa-gateway
"#
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "remesa_gateway=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut config = if let Some(path) = config_path {
        tracing::info!("Loading configuration from: {}", path);
        let config = GatewayConfig::from_file(&path)?;
        tracing::info!("Gateway: {}", config.name);
        tracing::info!("Rate seeds: {}", config.rates.len());
        config
    } else {
        tracing::info!("Using default configuration");
        GatewayConfig::default()
    };

    // Environment overrides
    if let Ok(host) = std::env::var("HOST") {
        config.server.host = host;
    }
    if let Ok(port) = std::env::var("PORT") {
        config.server.port = port.parse().unwrap_or(config.server.port);
    }

    let gateway = Gateway::new(config)?;

    tracing::info!("Starting Remesa Gateway");
    tracing::info!(
        "REST API: http://{}:{}/api/rates",
        gateway.config.server.host,
        gateway.config.server.port
    );
    tracing::info!("Available endpoints:");
    tracing::info!("  GET  /api/rates?base=USD&target=MXN");
    tracing::info!("  GET  /api/rates/stream?pairs=USD-MXN,USD-COP");
    tracing::info!("  GET  /api/rates/health");
    tracing::info!(
        "Stream cadence: {}ms, lifetime cap: {}ms",
        gateway.config.stream.refresh_ms,
        gateway.config.stream.max_lifetime_ms
    );

    gateway.run().await
}
