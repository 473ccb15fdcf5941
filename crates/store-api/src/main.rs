//! # Storefront RS
//!
//! Product catalog and payment echo API.
//!
//! ## Usage
//!
//! ```bash
//! # Optional settings (defaults shown)
//! export HOST=0.0.0.0
//! export PORT=8080
//! export CORS_ALLOWED_ORIGINS=http://localhost:3000
//! export LOG_FORMAT=json
//!
//! # Run the server
//! storefront
//! ```

use anyhow::Context;
use store_api::{routes, AppConfig, AppState, LogFormat};
use tokio::signal;
use tracing::{error, info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    init_tracing(config.log_format);

    print_banner();

    let addr = config.socket_addr()?;
    let state = AppState::new(config);

    info!("Environment: {}", state.config.environment);
    info!("Products loaded: {}", state.catalog.len());
    if state.config.cors_allowed_origins.is_empty() {
        info!("CORS: any origin");
    } else {
        info!("CORS origins: {:?}", state.config.cors_allowed_origins);
    }

    let is_prod = state.config.is_production();
    let app = routes::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Storefront starting on http://{}", addr);

    if !is_prod {
        info!("Products: GET http://{}/api/products", addr);
        info!("Payments: POST http://{}/api/payments", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Storefront stopped");
    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(fmt::layer().json())
            .with(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(fmt::layer())
            .with(filter)
            .init(),
    }
}

/// Resolves on Ctrl-C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections");
}

fn print_banner() {
    println!(
        r#"
  Storefront RS
  ━━━━━━━━━━━━━━━━━━━━━━━
  Catalog and payment echo API
  Version: {}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
