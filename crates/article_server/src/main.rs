//! Article API server entry point.
//!
//! # Responsibility
//! - Load configuration, start logging, wire store -> service -> router.
//! - Serve until SIGINT/SIGTERM, then drain in-flight requests.

mod config;

use article_core::{init_logging, ArticleRepository, ArticleService, JsonFileArticleRepository};
use config::ServerConfig;
use log::{error, info, warn};
use std::process::ExitCode;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=server_exit module=server status=error error={}", err);
            eprintln!("article-server: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), String> {
    let config = ServerConfig::from_env().map_err(|err| err.to_string())?;
    init_logging(&config.log_level, config.log_dir.as_deref())?;

    let repo = JsonFileArticleRepository::new(&config.data_path);
    match repo.list() {
        Ok(articles) => info!(
            "event=store_open module=server status=ok path={} articles={}",
            config.data_path.display(),
            articles.len()
        ),
        // Keep serving: the store is re-read per request and may be fixed on disk.
        Err(err) => warn!(
            "event=store_open module=server status=error path={} error={}",
            config.data_path.display(),
            err
        ),
    }

    let app = article_http::router(Arc::new(ArticleService::new(repo)));
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .map_err(|err| format!("failed to bind {}: {err}", config.bind_addr))?;
    info!(
        "event=server_start module=server status=ok addr={}",
        config.bind_addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(wait_for_shutdown_signal())
        .await
        .map_err(|err| format!("server failed: {err}"))?;

    info!("event=server_stop module=server status=ok");
    Ok(())
}

async fn wait_for_shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        match (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
        ) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {}
                    _ = sigint.recv() => {}
                }
            }
            _ => {
                warn!("event=signal_register module=server status=error fallback=ctrl_c");
                let _ = tokio::signal::ctrl_c().await;
            }
        }
    }
    #[cfg(not(unix))]
    {
        let _ = tokio::signal::ctrl_c().await;
    }
    info!("event=server_shutdown module=server status=start");
}
