pub mod dashboards;
pub mod handlers;
pub mod routes;
pub mod shared;
pub mod system;

use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    system::tracing::initialize()?;

    // Loads config.toml next to the executable, or the embedded default
    let config = shared::config::load_config()?;
    shared::config::init(config);
    let config = shared::config::get();

    let app = routes::configure_routes(&config.server.static_dir);

    let addr = config.server.socket_addr();
    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
