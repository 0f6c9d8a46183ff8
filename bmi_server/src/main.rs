use bmi_server::AppState;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bmid")]
#[command(about = "BMI calculation and history service", long_about = None)]
struct Cli {
    /// Override config file location
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override data directory
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Override listen port
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> bmi_core::Result<()> {
    bmi_core::logging::init();

    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(ref path) => bmi_core::Config::load_from(path)?,
        None => bmi_core::Config::load()?,
    };

    if let Some(data_dir) = cli.data_dir {
        config.data.data_dir = data_dir;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let store = bmi_core::FileLogStore::new(config.log_path());
    tracing::info!("Calculation log at {:?}", store.path());

    let state = AppState::new(store);

    let addr: SocketAddr = format!("{}:{}", config.server.bind, config.server.port)
        .parse()
        .map_err(|e| bmi_core::Error::Config(format!("Invalid bind address: {}", e)))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("BMI service listening on http://{}", addr);

    axum::serve(listener, bmi_server::router(state)).await?;

    Ok(())
}
