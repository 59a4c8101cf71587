use std::{future::Future, net::SocketAddr};

use configs::{AppConfig, ServerConfig};
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::{routes, state::ServerState};

/// Resolve the listen address from the normalized server config.
fn load_bind_addr(cfg: &ServerConfig) -> anyhow::Result<SocketAddr> {
    Ok(cfg.bind_addr().parse()?)
}

/// Resolves once Ctrl+C is received.
async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!(event = "shutdown_signal", "received Ctrl+C, draining connections"),
        Err(e) => {
            error!(error = %e, "cannot install Ctrl+C handler; graceful shutdown disabled");
            std::future::pending::<()>().await;
        }
    }
}

/// Serve the application on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, state: ServerState, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = routes::build_router(state);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Public entry: build fresh stores, bind, and run until Ctrl+C.
pub async fn run(cfg: AppConfig) -> anyhow::Result<()> {
    let addr = load_bind_addr(&cfg.server)?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "listening");
    serve(listener, ServerState::new(), shutdown_signal()).await
}
