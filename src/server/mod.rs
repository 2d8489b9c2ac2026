use std::net::SocketAddr;
use std::path::Path;

use axum::Router;
use thiserror::Error;
use tower_http::services::ServeDir;

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error)]
pub enum ServeError {
    #[error("index.html not found in the current directory")]
    MissingIndex,

    #[error("failed to bind port {port}: {source}")]
    Bind {
        port: u16,
        #[source]
        source: std::io::Error,
    },

    #[error("server error: {source}")]
    Serve {
        #[source]
        source: std::io::Error,
    },
}

/// Serves the current working directory over HTTP until interrupted.
///
/// Binds all interfaces on the given port and optionally opens the
/// default browser at the root URL once the listener is up.
pub async fn serve(port: u16, open_browser: bool) -> Result<(), ServeError> {
    if !Path::new("index.html").exists() {
        return Err(ServeError::MissingIndex);
    }

    let app = Router::new().fallback_service(ServeDir::new("."));

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ServeError::Bind { port, source: e })?;

    let url = format!("http://localhost:{port}");
    let served_dir = std::env::current_dir()
        .map(|d| d.display().to_string())
        .unwrap_or_else(|_| ".".to_string());
    println!(":: {:<10}: {}", "Port", port);
    println!(":: {:<10}: {}", "URL", url);
    println!(":: {:<10}: {}", "Directory", served_dir);
    println!(":: Press Ctrl+C to stop");
    println!();

    if open_browser {
        match open::that(&url) {
            Ok(()) => println!(":: Browser opened at {url}"),
            Err(_) => println!(":: Open manually: {url}"),
        }
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServeError::Serve { source: e })?;

    println!();
    println!(":: Server stopped ::");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
