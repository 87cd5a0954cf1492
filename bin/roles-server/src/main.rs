//! Roles Service Server
//!
//! Serves the roles REST API over an in-memory store seeded at start-up.
//!
//! Usage: `roles-server [CONFIG_FILE]`. An explicit config file must exist;
//! without one the loader searches `ROLES_CONFIG` and the standard paths.
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `ROLES_CONFIG` | - | Path to a TOML config file |
//! | `ROLES_HTTP_HOST` | `0.0.0.0` | Bind address |
//! | `ROLES_HTTP_PORT` | `8080` | HTTP API port |
//! | `ROLES_CORS_ORIGINS` | `*` | Comma-separated allowed origins |
//! | `ROLES_SEED_ROLES` | `Admin,Root,Client` | Comma-separated start-up roles |
//! | `ROLES_DEV_MODE` | `false` | Serve Swagger UI and the OpenAPI document |
//! | `LOG_FORMAT` | `text` | `json` for structured output |
//! | `RUST_LOG` | `info` | Log level |

use std::sync::Arc;

use anyhow::Result;
use tokio::{net::TcpListener, signal};
use tracing::{error, info};

use roles_config::ConfigLoader;
use roles_platform::shared::app::{OPENAPI_PATH, SWAGGER_UI_PATH};
use roles_platform::{build_app, AppOptions, CorsPolicy, RoleRepository, RolesState};

#[tokio::main]
async fn main() -> Result<()> {
    roles_common::logging::init_logging("roles-server");

    info!("Starting Roles Service");

    let loader = match std::env::args_os().nth(1) {
        Some(path) => ConfigLoader::with_path(path),
        None => ConfigLoader::new(),
    };
    let config = loader.load()?;
    info!(
        port = config.http.port,
        dev_mode = config.dev_mode,
        cors_origins = ?config.http.cors_origins,
        "Configuration loaded"
    );

    let role_repo = Arc::new(RoleRepository::with_seed(config.seed.roles.iter().cloned())?);
    info!(count = role_repo.count(), "Role store seeded");

    let options = AppOptions {
        dev_mode: config.dev_mode,
        cors: CorsPolicy::from_origins(
            config.http.allows_any_origin(),
            &config.http.cors_origins,
        ),
    };
    let app = build_app(RolesState::new(role_repo), &options);

    let addr = config.http.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("API server listening on http://{}", addr);
    if config.dev_mode {
        info!("Swagger UI available at http://{}{}", addr, SWAGGER_UI_PATH);
        info!("OpenAPI document at http://{}{}", addr, OPENAPI_PATH);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Roles Service shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
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

    info!("Shutdown signal received");
}
